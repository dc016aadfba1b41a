#![allow(dead_code)]

use rust_decimal::Decimal;
use xdm_temporal::{
    CalendarValue, ComparisonOperator, DayTimeDuration, Engine, Result, TimezoneOffset, Value,
    XdmType, YearMonthDuration,
};

// ---------------------------------------------------------------------------
// Engines
// ---------------------------------------------------------------------------

pub fn engine_utc() -> Engine {
    Engine::default()
}

pub fn engine_at(minutes: i16) -> Engine {
    Engine::new(tz(minutes))
}

// ---------------------------------------------------------------------------
// Value builders
// ---------------------------------------------------------------------------

pub fn tz(minutes: i16) -> TimezoneOffset {
    TimezoneOffset::new(minutes).expect("timezone in range")
}

pub fn date(year: i64, month: u8, day: u8, timezone: Option<i16>) -> Value {
    Value::from(CalendarValue::date(year, month, day, timezone.map(tz)).expect("valid date"))
}

/// Seconds as written in a lexical form, e.g. `"0.00001"`.
pub fn sec(second: &str) -> Decimal {
    second.parse().expect("decimal seconds")
}

pub fn date_time(
    (year, month, day): (i64, u8, u8),
    (hour, minute): (u8, u8),
    second: &str,
    timezone: Option<i16>,
) -> Value {
    Value::from(
        CalendarValue::date_time(year, month, day, hour, minute, sec(second), timezone.map(tz))
            .expect("valid dateTime"),
    )
}

pub fn time(hour: u8, minute: u8, second: &str, timezone: Option<i16>) -> Value {
    Value::from(
        CalendarValue::time(hour, minute, sec(second), timezone.map(tz)).expect("valid time"),
    )
}

pub fn g_day(day: u8, timezone: Option<i16>) -> Value {
    Value::from(CalendarValue::g_day(day, timezone.map(tz)).expect("valid gDay"))
}

pub fn g_month_day(month: u8, day: u8, timezone: Option<i16>) -> Value {
    Value::from(CalendarValue::g_month_day(month, day, timezone.map(tz)).expect("valid gMonthDay"))
}

pub fn g_year_month(year: i64, month: u8, timezone: Option<i16>) -> Value {
    Value::from(
        CalendarValue::g_year_month(year, month, timezone.map(tz)).expect("valid gYearMonth"),
    )
}

pub fn ym(months: i64) -> YearMonthDuration {
    YearMonthDuration::from_months(months)
}

pub fn dt(seconds: i64) -> DayTimeDuration {
    DayTimeDuration::from_seconds(Decimal::from(seconds))
}

// ---------------------------------------------------------------------------
// Assertions
// ---------------------------------------------------------------------------

/// Compare with each value's dynamic type as its static type.
pub fn compare(engine: &Engine, lhs: &Value, op: &str, rhs: &Value) -> Result<bool> {
    engine.compare(lhs, parse_op(op), rhs)
}

pub fn compare_typed(
    lhs: (&Value, XdmType),
    op: &str,
    rhs: (&Value, XdmType),
) -> Result<bool> {
    engine_utc().compare_values(lhs.0, rhs.0, parse_op(op), lhs.1, rhs.1)
}

pub fn parse_op(op: &str) -> ComparisonOperator {
    op.parse().expect("comparison operator")
}

pub fn assert_code<T: std::fmt::Debug>(result: Result<T>, code: &str) {
    match result {
        Ok(value) => panic!("expected {code}, got {value:?}"),
        Err(err) => assert_eq!(err.code(), code, "{err}"),
    }
}
