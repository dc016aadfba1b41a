//! Calendar comparisons on the UTC timeline

use chrono::{FixedOffset, TimeZone, Utc};
use num_bigint::BigInt;
use xdm_temporal::{CalendarValue, Error, Value};

mod test_support;
use test_support::{
    compare, date, date_time, engine_at, engine_utc, g_day, g_month_day, g_year_month, time,
};

#[test]
fn test_zone_spellings_are_equivalent() {
    let engine = engine_utc();
    let z = Value::from(CalendarValue::from(
        Utc.with_ymd_and_hms(1999, 12, 4, 0, 0, 0).unwrap(),
    ));
    let plus_zero = Value::from(
        CalendarValue::try_from(
            FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(1999, 12, 4, 0, 0, 0)
                .unwrap(),
        )
        .unwrap(),
    );
    assert!(compare(&engine, &plus_zero, "eq", &z).unwrap());
    assert!(!compare(&engine, &plus_zero, "ne", &z).unwrap());
    // -00:00, +00:00 and Z all denote the zero offset
    assert_eq!(plus_zero, z);

    let new_york = Value::from(
        CalendarValue::try_from(
            FixedOffset::west_opt(5 * 3_600)
                .unwrap()
                .with_ymd_and_hms(1999, 12, 3, 19, 0, 0)
                .unwrap(),
        )
        .unwrap(),
    );
    assert!(compare(&engine, &new_york, "eq", &z).unwrap());
    assert_ne!(new_york, z);
}

#[test]
fn test_instant_ordering_across_zones() {
    let engine = engine_utc();
    let tokyo = date_time((2008, 1, 31), (0, 1), "0", Some(540));
    let local = date_time((2008, 1, 30), (0, 1), "0", None);
    assert!(compare(&engine, &tokyo, "gt", &local).unwrap());
    assert!(compare(&engine, &local, "lt", &tokyo).unwrap());
}

#[test]
fn test_same_instant_different_zones() {
    let engine = engine_utc();
    let tokyo = date_time((2008, 1, 31), (0, 1), "0", Some(540));
    let utc = date_time((2008, 1, 30), (15, 1), "0", Some(0));
    assert!(compare(&engine, &tokyo, "eq", &utc).unwrap());
    assert!(compare(&engine, &tokyo, "le", &utc).unwrap());
    assert!(compare(&engine, &tokyo, "ge", &utc).unwrap());
    // Equal instants, yet structurally different values
    assert_ne!(tokyo, utc);
}

#[test]
fn test_dates_compare_at_midnight_in_their_zone() {
    let engine = engine_utc();
    let east = date(2004, 12, 25, Some(60));
    let west = date(2004, 12, 24, Some(-60 * 11));
    // 2004-12-24T23:00Z vs 2004-12-24T11:00Z
    assert!(compare(&engine, &east, "gt", &west).unwrap());
}

#[test]
fn test_end_of_day_equals_next_midnight() {
    let engine = engine_utc();
    let end = date_time((1999, 12, 31), (24, 0), "0", Some(0));
    let next = date_time((2000, 1, 1), (0, 0), "0", Some(0));
    assert!(compare(&engine, &end, "eq", &next).unwrap());
}

#[test]
fn test_times_are_ordered() {
    let engine = engine_utc();
    let a = time(8, 0, "0", Some(300));
    let b = time(17, 0, "0", Some(-300));
    assert!(compare(&engine, &a, "lt", &b).unwrap());
}

#[test]
fn test_partial_dates_support_equality() {
    let engine = engine_utc();
    assert!(compare(&engine, &g_day(1, None), "eq", &g_day(1, None)).unwrap());
    assert!(compare(&engine, &g_month_day(2, 29, None), "ne", &g_month_day(3, 1, None)).unwrap());
    assert!(compare(
        &engine,
        &g_year_month(1976, 2, Some(-300)),
        "ne",
        &g_year_month(1976, 2, Some(0))
    )
    .unwrap());
}

#[test]
fn test_partial_dates_reject_ordering() {
    let engine = engine_utc();
    for op in ["lt", "le", "gt", "ge"] {
        let err = compare(&engine, &g_day(1, None), op, &g_day(2, None)).unwrap_err();
        assert!(matches!(err, Error::StaticTypeError(_)), "{op}: {err}");
    }
}

#[test]
fn test_partial_dates_follow_implicit_timezone() {
    let zoned = g_day(1, Some(0));
    let unzoned = g_day(1, None);

    assert!(compare(&engine_utc(), &unzoned, "eq", &zoned).unwrap());
    assert!(compare(&engine_at(9), &unzoned, "ne", &zoned).unwrap());
}

#[test]
fn test_kinds_do_not_mix() {
    let engine = engine_utc();
    let d = date(2000, 1, 1, None);
    let dt = date_time((2000, 1, 1), (0, 0), "0", None);
    assert_eq!(compare(&engine, &d, "eq", &dt).unwrap_err().code(), "XPTY0004");
    assert_eq!(
        compare(&engine, &g_day(1, None), "eq", &g_month_day(1, 1, None))
            .unwrap_err()
            .code(),
        "XPTY0004"
    );
}

#[test]
fn test_astronomical_years_overflow_or_compare_correctly() {
    let engine = engine_utc();
    let past = date(-25_252_734_927_766_555, 7, 28, None);
    let future = date(25_252_734_927_766_555, 7, 28, None);

    for (op, expected) in [("lt", true), ("eq", false), ("gt", false)] {
        match compare(&engine, &past, op, &future) {
            Ok(result) => assert_eq!(result, expected, "{op}"),
            Err(err) => assert_eq!(err.code(), "FODT0001", "{op}: {err}"),
        }
    }
}

#[test]
fn test_years_beyond_timeline_width_overflow() {
    let engine = engine_utc();
    let huge: BigInt = BigInt::from(i64::MAX) * 1_000;
    let a = Value::from(CalendarValue::date(huge.clone(), 1, 1, None).unwrap());
    let b = Value::from(CalendarValue::date(huge + 1, 1, 1, None).unwrap());

    match compare(&engine, &a, "lt", &b) {
        Ok(result) => assert!(result),
        Err(err) => assert!(matches!(err, Error::Overflow(_)), "{err}"),
    }
}

#[test]
fn test_fractional_seconds_order_date_times() {
    let engine = engine_utc();
    let earlier = date_time((2000, 1, 1), (0, 0), "0.00001", Some(0));
    let later = date_time((2000, 1, 1), (0, 0), "0.00002", Some(0));
    assert!(compare(&engine, &earlier, "lt", &later).unwrap());
    assert!(compare(&engine, &later, "ne", &earlier).unwrap());

    let padded = date_time((2000, 1, 1), (0, 0), "0.000010", Some(0));
    assert!(compare(&engine, &earlier, "eq", &padded).unwrap());
}

#[test]
fn test_smallest_fraction_is_not_midnight() {
    let engine = engine_utc();
    let tiny = date_time((2000, 1, 1), (0, 0), "0.0000000000000000000000000001", Some(0));
    let midnight = date_time((2000, 1, 1), (0, 0), "0", Some(0));
    assert!(!compare(&engine, &tiny, "eq", &midnight).unwrap());
    assert!(compare(&engine, &tiny, "gt", &midnight).unwrap());
}

#[test]
fn test_fractional_seconds_at_astronomical_years() {
    let engine = engine_utc();
    let year = 25_252_734_927_766_555;
    let earlier = date_time((year, 1, 1), (0, 0), "0.00001", Some(0));
    let later = date_time((year, 1, 1), (0, 0), "0.00002", Some(0));

    for (op, expected) in [("eq", false), ("lt", true), ("gt", false)] {
        match compare(&engine, &earlier, op, &later) {
            Ok(result) => assert_eq!(result, expected, "{op}"),
            Err(err) => assert_eq!(err.code(), "FODT0001", "{op}: {err}"),
        }
    }
}

#[test]
fn test_fraction_carries_across_zone_adjustment() {
    let engine = engine_utc();
    let tokyo = date_time((2008, 1, 31), (0, 0), "59.999", Some(540));
    let utc = date_time((2008, 1, 30), (15, 0), "59.999", Some(0));
    let a_bit_later = date_time((2008, 1, 30), (15, 1), "0", Some(0));
    assert!(compare(&engine, &tokyo, "eq", &utc).unwrap());
    assert!(compare(&engine, &tokyo, "lt", &a_bit_later).unwrap());
}

#[test]
fn test_fractional_times_order() {
    let engine = engine_utc();
    let a = time(23, 59, "59.5", Some(0));
    let b = time(23, 59, "59.25", Some(0));
    assert!(compare(&engine, &b, "lt", &a).unwrap());
}
