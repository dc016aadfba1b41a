//! Duration value model
//!
//! Two concrete, totally ordered duration kinds plus the general
//! [`Duration`], which is the dynamic value of the abstract `xs:duration`
//! type and has no order of its own.

use crate::calendar::TimezoneOffset;
use crate::error::{Error, Result};
use chrono::TimeDelta;
use rust_decimal::Decimal;

/// `xs:yearMonthDuration`, held as a signed number of months.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonthDuration {
    months: i64,
}

impl YearMonthDuration {
    pub const ZERO: Self = Self { months: 0 };

    pub fn from_months(months: i64) -> Self {
        Self { months }
    }

    /// Build from a year and a month count, e.g. `P1Y3M` as `(1, 3)`.
    pub fn new(years: i64, months: i64) -> Result<Self> {
        years
            .checked_mul(12)
            .and_then(|m| m.checked_add(months))
            .map(Self::from_months)
            .ok_or_else(|| Error::ArithmeticOverflow(format!("P{years}Y{months}M")))
    }

    /// Total signed months.
    pub fn months(self) -> i64 {
        self.months
    }

    pub fn is_zero(self) -> bool {
        self.months == 0
    }

    pub fn is_negative(self) -> bool {
        self.months < 0
    }
}

/// `xs:dayTimeDuration`, held as an exact signed number of seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayTimeDuration {
    seconds: Decimal,
}

impl DayTimeDuration {
    pub const ZERO: Self = Self {
        seconds: Decimal::ZERO,
    };

    pub fn from_seconds(seconds: Decimal) -> Self {
        Self { seconds }
    }

    pub fn new(days: i64, hours: i64, minutes: i64, seconds: Decimal) -> Result<Self> {
        let whole = days
            .checked_mul(86_400)
            .and_then(|s| s.checked_add(hours.checked_mul(3_600)?))
            .and_then(|s| s.checked_add(minutes.checked_mul(60)?));
        whole
            .and_then(|whole| exact_add(Decimal::from(whole), seconds))
            .map(Self::from_seconds)
            .ok_or_else(|| {
                Error::ArithmeticOverflow(format!("P{days}DT{hours}H{minutes}M{seconds}S"))
            })
    }

    /// Total signed seconds, including the fractional part.
    pub fn seconds(self) -> Decimal {
        self.seconds
    }

    pub fn is_zero(self) -> bool {
        self.seconds.is_zero()
    }

    pub fn is_negative(self) -> bool {
        self.seconds.is_sign_negative() && !self.seconds.is_zero()
    }
}

/// `lhs + rhs`, or `None` if the sum needs more than 96 bits of mantissa and
/// would be rounded.
pub(crate) fn exact_add(lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
    let (lhs, rhs) = (lhs.normalize(), rhs.normalize());
    let sum = lhs.checked_add(rhs)?;
    (sum.scale() >= lhs.scale().max(rhs.scale())).then_some(sum)
}

/// `lhs * rhs`, or `None` if the product would be rounded.
pub(crate) fn exact_mul(lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
    if lhs.is_zero() || rhs.is_zero() {
        return Some(Decimal::ZERO);
    }
    let (lhs, rhs) = (lhs.normalize(), rhs.normalize());
    let product = lhs.checked_mul(rhs)?;
    (product.scale() >= lhs.scale() + rhs.scale()).then_some(product)
}

impl From<TimeDelta> for DayTimeDuration {
    fn from(delta: TimeDelta) -> Self {
        // subsec_nanos carries the sign of the delta
        let seconds = Decimal::from(delta.num_seconds())
            + Decimal::new(i64::from(delta.subsec_nanos()), 9);
        Self::from_seconds(seconds.normalize())
    }
}

impl From<TimezoneOffset> for DayTimeDuration {
    fn from(offset: TimezoneOffset) -> Self {
        Self::from_seconds(Decimal::from(i32::from(offset.minutes()) * 60))
    }
}

/// A general `xs:duration` with both a month and a second component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Duration {
    year_month: YearMonthDuration,
    day_time: DayTimeDuration,
}

impl Duration {
    /// Both components must share a sign, as in the lexical form `-P1Y2DT3H`.
    pub fn new(year_month: YearMonthDuration, day_time: DayTimeDuration) -> Result<Self> {
        let mixed = (year_month.is_negative() && day_time.seconds() > Decimal::ZERO)
            || (day_time.is_negative() && year_month.months() > 0);
        if mixed {
            return Err(Error::InvalidValue(
                "duration components must share one sign".into(),
            ));
        }
        Ok(Self {
            year_month,
            day_time,
        })
    }

    pub fn year_month(self) -> YearMonthDuration {
        self.year_month
    }

    pub fn day_time(self) -> DayTimeDuration {
        self.day_time
    }
}

impl From<YearMonthDuration> for Duration {
    fn from(year_month: YearMonthDuration) -> Self {
        Self {
            year_month,
            day_time: DayTimeDuration::ZERO,
        }
    }
}

impl From<DayTimeDuration> for Duration {
    fn from(day_time: DayTimeDuration) -> Self {
        Self {
            year_month: YearMonthDuration::ZERO,
            day_time,
        }
    }
}
