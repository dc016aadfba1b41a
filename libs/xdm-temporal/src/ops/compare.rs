//! Value comparison
//!
//! Booleans are ordered `false < true`. Calendar values are compared as
//! instants on the UTC timeline. Durations are gated by their static types
//! first: the abstract `xs:duration` has no comparison at all, and the two
//! concrete kinds only compare with themselves.

use super::ComparisonOperator;
use crate::calendar::{CalendarValue, TimezoneOffset};
use crate::error::{Error, Result};
use crate::instant::Instant;
use crate::types::XdmType;
use crate::value::{Value, ValueData};
use std::cmp::Ordering;

/// Compare two operands.
///
/// `lhs_type` and `rhs_type` are the static types the evaluator inferred for
/// the operand expressions. They may be less specific than the values (an
/// `if` whose branches return `xs:duration` and `xs:yearMonthDuration` is
/// typed `xs:duration`), and that is enough to reject a duration comparison.
pub fn compare_values(
    lhs: &Value,
    rhs: &Value,
    op: ComparisonOperator,
    lhs_type: XdmType,
    rhs_type: XdmType,
    implicit_timezone: TimezoneOffset,
) -> Result<bool> {
    // Must run before the values are looked at.
    if lhs_type.is_abstract_duration() || rhs_type.is_abstract_duration() {
        tracing::debug!(%op, %lhs_type, %rhs_type, "Rejected by static type");
        return Err(Error::StaticTypeError(format!(
            "{op} is not defined on {}",
            XdmType::Duration
        )));
    }

    match (lhs.data(), rhs.data()) {
        (ValueData::Boolean(l), ValueData::Boolean(r)) => Ok(op.evaluate(l.cmp(r))),
        (ValueData::Calendar(l), ValueData::Calendar(r)) => {
            compare_calendar(l, r, op, implicit_timezone)
        }
        (l, r) if l.is_numeric() && r.is_numeric() => Ok(compare_numeric(l, r, op)),
        _ if is_duration(lhs) && is_duration(rhs) => {
            compare_durations(lhs, rhs, op, lhs_type, rhs_type)
        }
        _ => Err(Error::not_comparable(lhs.dynamic_type(), rhs.dynamic_type())),
    }
}

fn compare_calendar(
    lhs: &CalendarValue,
    rhs: &CalendarValue,
    op: ComparisonOperator,
    implicit_timezone: TimezoneOffset,
) -> Result<bool> {
    if lhs.kind() != rhs.kind() {
        return Err(Error::not_comparable(lhs.kind(), rhs.kind()));
    }
    if op.is_ordering() && !lhs.kind().is_ordered() {
        return Err(Error::StaticTypeError(format!(
            "{op} is not defined on {}",
            lhs.kind()
        )));
    }

    let l = Instant::of(lhs, implicit_timezone)?;
    let r = Instant::of(rhs, implicit_timezone)?;
    Ok(op.evaluate(l.cmp(&r)))
}

fn compare_durations(
    lhs: &Value,
    rhs: &Value,
    op: ComparisonOperator,
    lhs_type: XdmType,
    rhs_type: XdmType,
) -> Result<bool> {
    let l_type = concrete_duration_type(lhs, lhs_type)?;
    let r_type = concrete_duration_type(rhs, rhs_type)?;

    match (lhs.data(), rhs.data()) {
        (ValueData::YearMonthDuration(l), ValueData::YearMonthDuration(r)) => {
            Ok(op.evaluate(l.months().cmp(&r.months())))
        }
        (ValueData::DayTimeDuration(l), ValueData::DayTimeDuration(r)) => {
            Ok(op.evaluate(l.seconds().cmp(&r.seconds())))
        }
        _ => Err(Error::not_comparable(l_type, r_type)),
    }
}

/// The concrete duration subtype an operand resolves to.
///
/// A static type of `xs:anyAtomicType` defers to the value; a concrete
/// static type must agree with it.
fn concrete_duration_type(value: &Value, static_type: XdmType) -> Result<XdmType> {
    let dynamic = value.dynamic_type();
    if dynamic.is_abstract_duration() {
        return Err(Error::StaticTypeError(format!(
            "{} values cannot be compared",
            XdmType::Duration
        )));
    }
    if static_type.is_concrete_duration() && static_type != dynamic {
        return Err(Error::StaticTypeError(format!(
            "{dynamic} value does not match static type {static_type}"
        )));
    }
    Ok(dynamic)
}

fn is_duration(value: &Value) -> bool {
    matches!(
        value.data(),
        ValueData::Duration(_) | ValueData::YearMonthDuration(_) | ValueData::DayTimeDuration(_)
    )
}

/// Integers and decimals compare exactly; a double operand promotes both
/// sides, and NaN is unordered (only `ne` holds).
fn compare_numeric(lhs: &ValueData, rhs: &ValueData, op: ComparisonOperator) -> bool {
    let ordering: Option<Ordering> = match (lhs.as_decimal(), rhs.as_decimal()) {
        (Some(l), Some(r)) => Some(l.cmp(&r)),
        _ => lhs
            .as_f64()
            .zip(rhs.as_f64())
            .and_then(|(l, r)| l.partial_cmp(&r)),
    };
    match ordering {
        Some(ordering) => op.evaluate(ordering),
        None => op == ComparisonOperator::Ne,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::{DayTimeDuration, Duration, YearMonthDuration};
    use rust_decimal::Decimal;

    fn cmp(lhs: &Value, rhs: &Value, op: ComparisonOperator) -> Result<bool> {
        compare_values(
            lhs,
            rhs,
            op,
            lhs.dynamic_type(),
            rhs.dynamic_type(),
            TimezoneOffset::UTC,
        )
    }

    #[test]
    fn booleans_order_false_before_true() {
        let f = Value::boolean(false);
        let t = Value::boolean(true);
        assert!(cmp(&f, &t, ComparisonOperator::Lt).unwrap());
        assert!(!cmp(&t, &f, ComparisonOperator::Lt).unwrap());
        assert!(cmp(&t, &t, ComparisonOperator::Ge).unwrap());
        assert!(cmp(&f, &t, ComparisonOperator::Ne).unwrap());
    }

    #[test]
    fn mixed_kinds_are_not_comparable() {
        let b = Value::boolean(true);
        let d = Value::calendar(CalendarValue::date(2000, 1, 1, None).unwrap());
        let err = cmp(&b, &d, ComparisonOperator::Eq).unwrap_err();
        assert_eq!(err.code(), "XPTY0004");

        let g = Value::calendar(CalendarValue::g_year(2000, None).unwrap());
        assert!(cmp(&d, &g, ComparisonOperator::Eq).is_err());
    }

    #[test]
    fn partial_dates_reject_ordering() {
        let a = Value::calendar(CalendarValue::g_day(1, None).unwrap());
        let b = Value::calendar(CalendarValue::g_day(2, None).unwrap());
        assert!(cmp(&a, &b, ComparisonOperator::Ne).unwrap());
        assert_eq!(
            cmp(&a, &b, ComparisonOperator::Lt).unwrap_err().code(),
            "XPTY0004"
        );
    }

    #[test]
    fn cross_kind_durations_are_rejected() {
        let ym = Value::year_month_duration(YearMonthDuration::ZERO);
        let dt = Value::day_time_duration(DayTimeDuration::ZERO);
        assert!(cmp(&ym, &dt, ComparisonOperator::Eq).is_err());
    }

    #[test]
    fn general_duration_value_is_never_comparable() {
        let general = Value::duration(Duration::from(YearMonthDuration::from_months(1)));
        let ym = Value::year_month_duration(YearMonthDuration::from_months(1));
        let err = compare_values(
            &general,
            &ym,
            ComparisonOperator::Eq,
            XdmType::AnyAtomic,
            XdmType::YearMonthDuration,
            TimezoneOffset::UTC,
        )
        .unwrap_err();
        assert_eq!(err.code(), "XPTY0004");
    }

    #[test]
    fn static_type_must_match_value() {
        let ym = Value::year_month_duration(YearMonthDuration::from_months(1));
        assert!(compare_values(
            &ym,
            &ym,
            ComparisonOperator::Eq,
            XdmType::DayTimeDuration,
            XdmType::YearMonthDuration,
            TimezoneOffset::UTC,
        )
        .is_err());
    }

    #[test]
    fn numeric_nan_is_unordered() {
        let nan = Value::double(f64::NAN);
        let one = Value::integer(1);
        assert!(!cmp(&nan, &nan, ComparisonOperator::Eq).unwrap());
        assert!(cmp(&nan, &one, ComparisonOperator::Ne).unwrap());
        assert!(!cmp(&nan, &one, ComparisonOperator::Lt).unwrap());
        assert!(cmp(&Value::decimal(Decimal::new(10, 1)), &one, ComparisonOperator::Eq).unwrap());
    }
}
