//! Calendar value model
//!
//! Date, time and partial-date (`gYearMonth`, `gMonthDay`, ...) values with an
//! optional timezone. Fields that a kind does not carry stay `None`; they are
//! only filled in when the value is placed on the timeline (see [`crate::instant`]).

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use num_bigint::BigInt;
use num_traits::Zero;
use rust_decimal::Decimal;
use std::fmt;

/// Timezone offset in minutes east of UTC, limited to `[-14:00, +14:00]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimezoneOffset {
    minutes: i16,
}

impl TimezoneOffset {
    pub const UTC: Self = Self { minutes: 0 };
    pub const MIN: Self = Self { minutes: -14 * 60 };
    pub const MAX: Self = Self { minutes: 14 * 60 };

    pub fn new(minutes: i16) -> Result<Self> {
        if (Self::MIN.minutes..=Self::MAX.minutes).contains(&minutes) {
            Ok(Self { minutes })
        } else {
            Err(Error::InvalidTimezone(i32::from(minutes)))
        }
    }

    pub fn minutes(self) -> i16 {
        self.minutes
    }
}

impl Default for TimezoneOffset {
    fn default() -> Self {
        Self::UTC
    }
}

impl TryFrom<FixedOffset> for TimezoneOffset {
    type Error = Error;

    fn try_from(offset: FixedOffset) -> Result<Self> {
        let seconds = offset.local_minus_utc();
        if seconds % 60 != 0 {
            return Err(Error::InvalidValue(format!(
                "timezone offset of {seconds} seconds is not a whole number of minutes"
            )));
        }
        let minutes =
            i16::try_from(seconds / 60).map_err(|_| Error::InvalidTimezone(seconds / 60))?;
        Self::new(minutes)
    }
}

/// Which fields a [`CalendarValue`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarKind {
    Date,
    DateTime,
    Time,
    GYearMonth,
    GYear,
    GMonthDay,
    GDay,
    GMonth,
}

impl CalendarKind {
    pub fn type_name(self) -> &'static str {
        match self {
            CalendarKind::Date => "xs:date",
            CalendarKind::DateTime => "xs:dateTime",
            CalendarKind::Time => "xs:time",
            CalendarKind::GYearMonth => "xs:gYearMonth",
            CalendarKind::GYear => "xs:gYear",
            CalendarKind::GMonthDay => "xs:gMonthDay",
            CalendarKind::GDay => "xs:gDay",
            CalendarKind::GMonth => "xs:gMonth",
        }
    }

    /// Whether `lt`/`le`/`gt`/`ge` are defined. Partial dates only support equality.
    pub fn is_ordered(self) -> bool {
        matches!(
            self,
            CalendarKind::Date | CalendarKind::DateTime | CalendarKind::Time
        )
    }
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Time-of-day fields. `24:00:00` is accepted and denotes the end of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: Decimal,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8, second: Decimal) -> Result<Self> {
        if minute > 59 {
            return Err(Error::InvalidValue(format!("minute {minute} out of range")));
        }
        if second.is_sign_negative() || second >= Decimal::from(60) {
            return Err(Error::InvalidValue(format!("second {second} out of range")));
        }
        match hour {
            0..=23 => {}
            24 if minute == 0 && second.is_zero() => {}
            _ => {
                return Err(Error::InvalidValue(format!(
                    "{hour:02}:{minute:02}:{second} is not a valid time of day"
                )))
            }
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Seconds including the fractional part.
    pub fn second(&self) -> Decimal {
        self.second
    }
}

/// An XML Schema date/time or partial-date value.
///
/// Constructed once through one of the kind-specific constructors, which
/// validate field ranges; immutable afterwards. The year has unbounded
/// magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarValue {
    kind: CalendarKind,
    year: Option<BigInt>,
    month: Option<u8>,
    day: Option<u8>,
    time: Option<TimeOfDay>,
    timezone: Option<TimezoneOffset>,
}

impl CalendarValue {
    pub fn date(
        year: impl Into<BigInt>,
        month: u8,
        day: u8,
        timezone: Option<TimezoneOffset>,
    ) -> Result<Self> {
        let year = year.into();
        check_month(month)?;
        check_day(Some(&year), Some(month), day)?;
        Ok(Self {
            kind: CalendarKind::Date,
            year: Some(year),
            month: Some(month),
            day: Some(day),
            time: None,
            timezone,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn date_time(
        year: impl Into<BigInt>,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: Decimal,
        timezone: Option<TimezoneOffset>,
    ) -> Result<Self> {
        let date = Self::date(year, month, day, timezone)?;
        Ok(Self {
            kind: CalendarKind::DateTime,
            time: Some(TimeOfDay::new(hour, minute, second)?),
            ..date
        })
    }

    pub fn time(
        hour: u8,
        minute: u8,
        second: Decimal,
        timezone: Option<TimezoneOffset>,
    ) -> Result<Self> {
        Ok(Self {
            kind: CalendarKind::Time,
            year: None,
            month: None,
            day: None,
            time: Some(TimeOfDay::new(hour, minute, second)?),
            timezone,
        })
    }

    pub fn g_year_month(
        year: impl Into<BigInt>,
        month: u8,
        timezone: Option<TimezoneOffset>,
    ) -> Result<Self> {
        check_month(month)?;
        Ok(Self {
            kind: CalendarKind::GYearMonth,
            year: Some(year.into()),
            month: Some(month),
            day: None,
            time: None,
            timezone,
        })
    }

    pub fn g_year(year: impl Into<BigInt>, timezone: Option<TimezoneOffset>) -> Result<Self> {
        Ok(Self {
            kind: CalendarKind::GYear,
            year: Some(year.into()),
            month: None,
            day: None,
            time: None,
            timezone,
        })
    }

    /// `--MM-DD`. February 29th is accepted without a leap-year check.
    pub fn g_month_day(month: u8, day: u8, timezone: Option<TimezoneOffset>) -> Result<Self> {
        check_month(month)?;
        check_day(None, Some(month), day)?;
        Ok(Self {
            kind: CalendarKind::GMonthDay,
            year: None,
            month: Some(month),
            day: Some(day),
            time: None,
            timezone,
        })
    }

    pub fn g_day(day: u8, timezone: Option<TimezoneOffset>) -> Result<Self> {
        check_day(None, None, day)?;
        Ok(Self {
            kind: CalendarKind::GDay,
            year: None,
            month: None,
            day: Some(day),
            time: None,
            timezone,
        })
    }

    pub fn g_month(month: u8, timezone: Option<TimezoneOffset>) -> Result<Self> {
        check_month(month)?;
        Ok(Self {
            kind: CalendarKind::GMonth,
            year: None,
            month: Some(month),
            day: None,
            time: None,
            timezone,
        })
    }

    pub fn kind(&self) -> CalendarKind {
        self.kind
    }

    pub fn year(&self) -> Option<&BigInt> {
        self.year.as_ref()
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    pub fn time_of_day(&self) -> Option<&TimeOfDay> {
        self.time.as_ref()
    }

    pub fn timezone(&self) -> Option<TimezoneOffset> {
        self.timezone
    }
}

impl From<NaiveDate> for CalendarValue {
    fn from(date: NaiveDate) -> Self {
        Self {
            kind: CalendarKind::Date,
            year: Some(BigInt::from(date.year())),
            month: Some(date.month() as u8),
            day: Some(date.day() as u8),
            time: None,
            timezone: None,
        }
    }
}

impl From<NaiveTime> for CalendarValue {
    fn from(time: NaiveTime) -> Self {
        Self {
            kind: CalendarKind::Time,
            year: None,
            month: None,
            day: None,
            time: Some(time_of_day_from_chrono(&time)),
            timezone: None,
        }
    }
}

impl From<NaiveDateTime> for CalendarValue {
    fn from(date_time: NaiveDateTime) -> Self {
        Self {
            kind: CalendarKind::DateTime,
            time: Some(time_of_day_from_chrono(&date_time.time())),
            ..Self::from(date_time.date())
        }
    }
}

impl From<DateTime<Utc>> for CalendarValue {
    fn from(date_time: DateTime<Utc>) -> Self {
        Self {
            timezone: Some(TimezoneOffset::UTC),
            ..Self::from(date_time.naive_utc())
        }
    }
}

impl TryFrom<DateTime<FixedOffset>> for CalendarValue {
    type Error = Error;

    fn try_from(date_time: DateTime<FixedOffset>) -> Result<Self> {
        let timezone = TimezoneOffset::try_from(*date_time.offset())?;
        Ok(Self {
            timezone: Some(timezone),
            ..Self::from(date_time.naive_local())
        })
    }
}

fn time_of_day_from_chrono<T: Timelike>(time: &T) -> TimeOfDay {
    // chrono encodes a leap second as nanos >= 1e9; fold it into the last second
    let nanos = i64::from(time.nanosecond() % 1_000_000_000);
    let second = Decimal::from(time.second()) + Decimal::new(nanos, 9);
    TimeOfDay {
        hour: time.hour() as u8,
        minute: time.minute() as u8,
        second: second.normalize(),
    }
}

fn check_month(month: u8) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(Error::InvalidValue(format!("month {month} out of range")))
    }
}

fn check_day(year: Option<&BigInt>, month: Option<u8>, day: u8) -> Result<()> {
    let max = month.map_or(31, |month| days_in_month(year, month));
    if (1..=max).contains(&day) {
        Ok(())
    } else {
        Err(Error::InvalidValue(format!("day {day} out of range")))
    }
}

/// Days in `month`; without a year February is assumed to have 29 days.
pub(crate) fn days_in_month(year: Option<&BigInt>, month: u8) -> u8 {
    match month {
        2 if year.map_or(true, is_leap_year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub(crate) fn is_leap_year(year: &BigInt) -> bool {
    let divisible = |n: u32| (year % BigInt::from(n)).is_zero();
    divisible(4) && (!divisible(100) || divisible(400))
}
