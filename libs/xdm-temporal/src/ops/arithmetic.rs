//! Duration arithmetic: scaling by a number, division by a number, and the
//! ratio of two durations of the same kind.
//!
//! Year-month results are rounded to whole months with ties going towards
//! positive infinity (`-3.5` months becomes `-3`, `3.5` becomes `4`), the
//! rounding of `fn:round`.

use crate::duration::{exact_mul, DayTimeDuration, YearMonthDuration};
use crate::error::{Error, Result};
use crate::types::XdmType;
use crate::value::{Value, ValueData};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;

/// `duration * factor` for a year-month duration.
pub fn scale_year_month_duration(
    duration: YearMonthDuration,
    factor: f64,
) -> Result<YearMonthDuration> {
    check_factor(factor)?;
    round_months(duration.months() as f64 * factor)
}

/// `duration div divisor` for a year-month duration.
pub fn divide_year_month_duration(
    duration: YearMonthDuration,
    divisor: f64,
) -> Result<YearMonthDuration> {
    check_divisor(divisor)?;
    round_months(duration.months() as f64 / divisor)
}

/// `duration * factor` for a day-time duration. The product is exact in the
/// decimal representation of `factor`; a product that does not fit without
/// rounding overflows.
pub fn scale_day_time_duration(duration: DayTimeDuration, factor: f64) -> Result<DayTimeDuration> {
    check_factor(factor)?;
    let factor = Decimal::from_f64(factor).ok_or_else(|| seconds_overflow(duration))?;
    exact_mul(duration.seconds(), factor)
        .map(|seconds| DayTimeDuration::from_seconds(seconds.normalize()))
        .ok_or_else(|| seconds_overflow(duration))
}

pub fn divide_day_time_duration(
    duration: DayTimeDuration,
    divisor: f64,
) -> Result<DayTimeDuration> {
    check_divisor(divisor)?;
    if divisor.is_infinite() {
        return Ok(DayTimeDuration::ZERO);
    }
    let divisor = Decimal::from_f64(divisor).ok_or_else(|| seconds_overflow(duration))?;
    duration
        .seconds()
        .checked_div(divisor)
        .map(|seconds| DayTimeDuration::from_seconds(seconds.normalize()))
        .ok_or_else(|| seconds_overflow(duration))
}

/// `lhs div rhs` for two year-month durations.
pub fn divide_year_month_durations(
    lhs: YearMonthDuration,
    rhs: YearMonthDuration,
) -> Result<Decimal> {
    if rhs.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Decimal::from(lhs.months())
        .checked_div(Decimal::from(rhs.months()))
        .ok_or_else(|| Error::ArithmeticOverflow("duration ratio out of range".into()))
}

/// `lhs div rhs` for two day-time durations.
pub fn divide_day_time_durations(lhs: DayTimeDuration, rhs: DayTimeDuration) -> Result<Decimal> {
    if rhs.is_zero() {
        return Err(Error::DivisionByZero);
    }
    lhs.seconds()
        .checked_div(rhs.seconds())
        .map(|ratio| ratio.normalize())
        .ok_or_else(|| Error::ArithmeticOverflow("duration ratio out of range".into()))
}

/// `lhs * rhs`, defined only for a concrete duration and a number (either order).
pub fn multiply(lhs: &Value, rhs: &Value, lhs_type: XdmType, rhs_type: XdmType) -> Result<Value> {
    reject_abstract_duration("*", lhs_type, rhs_type)?;

    match (lhs.data(), rhs.data()) {
        (ValueData::YearMonthDuration(d), other) | (other, ValueData::YearMonthDuration(d)) => {
            let factor = numeric_operand("*", other)?;
            scale_year_month_duration(*d, factor).map(Value::from)
        }
        (ValueData::DayTimeDuration(d), other) | (other, ValueData::DayTimeDuration(d)) => {
            let factor = numeric_operand("*", other)?;
            scale_day_time_duration(*d, factor).map(Value::from)
        }
        _ => Err(Error::StaticTypeError(format!(
            "* is not defined on {} and {}",
            lhs.dynamic_type(),
            rhs.dynamic_type()
        ))),
    }
}

/// `lhs div rhs` for a duration divided by a number or by a duration of the same kind.
pub fn divide(lhs: &Value, rhs: &Value, lhs_type: XdmType, rhs_type: XdmType) -> Result<Value> {
    reject_abstract_duration("div", lhs_type, rhs_type)?;

    match (lhs.data(), rhs.data()) {
        (ValueData::YearMonthDuration(l), ValueData::YearMonthDuration(r)) => {
            divide_year_month_durations(*l, *r).map(Value::decimal)
        }
        (ValueData::DayTimeDuration(l), ValueData::DayTimeDuration(r)) => {
            divide_day_time_durations(*l, *r).map(Value::decimal)
        }
        (ValueData::YearMonthDuration(d), other) => {
            let divisor = numeric_operand("div", other)?;
            divide_year_month_duration(*d, divisor).map(Value::from)
        }
        (ValueData::DayTimeDuration(d), other) => {
            let divisor = numeric_operand("div", other)?;
            divide_day_time_duration(*d, divisor).map(Value::from)
        }
        _ => Err(Error::StaticTypeError(format!(
            "div is not defined on {} and {}",
            lhs.dynamic_type(),
            rhs.dynamic_type()
        ))),
    }
}

fn reject_abstract_duration(op: &str, lhs_type: XdmType, rhs_type: XdmType) -> Result<()> {
    if lhs_type.is_abstract_duration() || rhs_type.is_abstract_duration() {
        tracing::debug!(op, %lhs_type, %rhs_type, "Rejected by static type");
        return Err(Error::StaticTypeError(format!(
            "{op} is only defined on subtypes of {}",
            XdmType::Duration
        )));
    }
    Ok(())
}

fn numeric_operand(op: &str, operand: &ValueData) -> Result<f64> {
    operand.as_f64().ok_or_else(|| {
        Error::StaticTypeError(format!("{op}: a duration can only be combined with a number"))
    })
}

fn check_factor(factor: f64) -> Result<()> {
    if factor.is_nan() {
        return Err(Error::InvalidArithmeticValue(
            "duration cannot be multiplied by NaN".into(),
        ));
    }
    if factor.is_infinite() {
        return Err(Error::ArithmeticOverflow(
            "duration multiplied by infinity".into(),
        ));
    }
    Ok(())
}

fn check_divisor(divisor: f64) -> Result<()> {
    if divisor.is_nan() {
        return Err(Error::InvalidArithmeticValue(
            "duration cannot be divided by NaN".into(),
        ));
    }
    if divisor == 0.0 {
        return Err(Error::ArithmeticOverflow("duration divided by zero".into()));
    }
    Ok(())
}

fn round_months(raw: f64) -> Result<YearMonthDuration> {
    let floor = raw.floor();
    let rounded = if raw - floor >= 0.5 { floor + 1.0 } else { floor };
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
    if !rounded.is_finite() || rounded < i64::MIN as f64 || rounded >= i64::MAX as f64 {
        tracing::debug!(months = raw, "Year-month duration out of range");
        return Err(Error::ArithmeticOverflow(format!(
            "{raw} months out of range"
        )));
    }
    Ok(YearMonthDuration::from_months(rounded as i64))
}

fn seconds_overflow(duration: DayTimeDuration) -> Error {
    tracing::debug!(seconds = %duration.seconds(), "Day-time duration out of range");
    Error::ArithmeticOverflow("day-time duration out of range".into())
}
