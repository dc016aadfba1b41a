//! Instant normalization
//!
//! Places a [`CalendarValue`] on a single UTC timeline so that any two values
//! of the same kind can be ordered. Absent fields are filled from fixed
//! reference values, and a missing timezone is replaced by the implicit
//! timezone of the engine, which makes every comparison determinate.

use crate::calendar::{CalendarValue, TimezoneOffset};
use crate::error::{Error, Result};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

/// Year substituted for kinds without a year. A leap year, so `--02-29` is representable.
pub(crate) const REFERENCE_YEAR: i64 = 1972;
/// Month substituted for kinds without a month. December has 31 days.
pub(crate) const REFERENCE_MONTH: u8 = 12;
/// Day substituted for kinds without a day.
pub(crate) const REFERENCE_DAY: u8 = 1;

const SECONDS_PER_DAY: i128 = 86_400;

/// Seconds since `1970-01-01T00:00:00Z` on the proleptic Gregorian calendar.
///
/// Whole seconds and the fraction are kept apart so that no precision is lost
/// to the 96-bit decimal mantissa at large years. `fraction` is in `[0, 1)`,
/// which makes the derived lexicographic order the timeline order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    whole: i128,
    fraction: Decimal,
}

impl Instant {
    /// Normalize `value`, using `implicit_timezone` when it carries no timezone.
    ///
    /// Years that do not fit the 64-bit timeline signal [`Error::Overflow`]
    /// instead of being truncated.
    pub fn of(value: &CalendarValue, implicit_timezone: TimezoneOffset) -> Result<Self> {
        let year = match value.year() {
            Some(year) => year.to_i64().ok_or_else(|| overflow(value))?,
            None => REFERENCE_YEAR,
        };
        let month = value.month().unwrap_or(REFERENCE_MONTH);
        let day = value.day().unwrap_or(REFERENCE_DAY);
        let (hour, minute, second) = value
            .time_of_day()
            .map_or((0, 0, Decimal::ZERO), |t| (t.hour(), t.minute(), t.second()));
        let offset = value.timezone().unwrap_or(implicit_timezone);

        let local_minutes = i128::from(hour) * 60 + i128::from(minute);
        // `second` is in [0, 60), so its integral part always fits
        let whole_second = second.trunc().to_i128().ok_or_else(|| overflow(value))?;
        let whole = days_from_civil(i128::from(year), month, day)
            .checked_mul(SECONDS_PER_DAY)
            .and_then(|s| s.checked_add((local_minutes - i128::from(offset.minutes())) * 60))
            .and_then(|s| s.checked_add(whole_second))
            .ok_or_else(|| overflow(value))?;

        Ok(Instant {
            whole,
            fraction: second.fract().normalize(),
        })
    }

    pub fn whole_seconds(self) -> i128 {
        self.whole
    }

    /// Sub-second part, in `[0, 1)`.
    pub fn fraction(self) -> Decimal {
        self.fraction
    }
}

fn overflow(value: &CalendarValue) -> Error {
    tracing::debug!(kind = %value.kind(), year = ?value.year(), "Instant out of range");
    Error::Overflow(format!("{} value out of range", value.kind()))
}

/// Days between `1970-01-01` and the given civil date.
fn days_from_civil(year: i128, month: u8, day: u8) -> i128 {
    // Shift the year start to March so the leap day is the last day of the year.
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let march_month = (i128::from(month) + 9) % 12;
    let day_of_year = (153 * march_month + 2) / 5 + i128::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}
