//! Value representation for operator evaluation
//!
//! This module provides a cheap-to-clone handle over atomic values using Arc.

use crate::calendar::CalendarValue;
use crate::duration::{DayTimeDuration, Duration, YearMonthDuration};
use crate::types::XdmType;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;

/// An atomic value - cheap to clone via Arc
#[derive(Clone, Debug)]
pub struct Value(Arc<ValueData>);

/// Structural identity, not the `eq` operator: `2008-01-31T00:01:00+09:00`
/// and `2008-01-30T15:01:00Z` are `eq` but not identical.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.data() == other.data()
    }
}

impl Value {
    pub fn data(&self) -> &ValueData {
        &self.0
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn boolean(b: bool) -> Self {
        Self(Arc::new(ValueData::Boolean(b)))
    }

    pub fn integer(i: i64) -> Self {
        Self(Arc::new(ValueData::Integer(i)))
    }

    pub fn decimal(d: Decimal) -> Self {
        Self(Arc::new(ValueData::Decimal(d)))
    }

    pub fn double(f: f64) -> Self {
        Self(Arc::new(ValueData::Double(f)))
    }

    pub fn calendar(value: CalendarValue) -> Self {
        Self(Arc::new(ValueData::Calendar(value)))
    }

    pub fn duration(d: Duration) -> Self {
        Self(Arc::new(ValueData::Duration(d)))
    }

    pub fn year_month_duration(d: YearMonthDuration) -> Self {
        Self(Arc::new(ValueData::YearMonthDuration(d)))
    }

    pub fn day_time_duration(d: DayTimeDuration) -> Self {
        Self(Arc::new(ValueData::DayTimeDuration(d)))
    }

    /// Most specific type of this value. See [`XdmType::of`].
    pub fn dynamic_type(&self) -> XdmType {
        XdmType::of(self)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::boolean(b)
    }
}

impl From<CalendarValue> for Value {
    fn from(value: CalendarValue) -> Self {
        Self::calendar(value)
    }
}

impl From<YearMonthDuration> for Value {
    fn from(d: YearMonthDuration) -> Self {
        Self::year_month_duration(d)
    }
}

impl From<DayTimeDuration> for Value {
    fn from(d: DayTimeDuration) -> Self {
        Self::day_time_duration(d)
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Self::duration(d)
    }
}

/// Internal value data representation
#[derive(Debug, Clone, PartialEq)]
pub enum ValueData {
    Boolean(bool),
    Integer(i64),
    Decimal(Decimal),
    Double(f64),
    Calendar(CalendarValue),
    /// Dynamic value of the abstract `xs:duration` type.
    Duration(Duration),
    YearMonthDuration(YearMonthDuration),
    DayTimeDuration(DayTimeDuration),
}

impl ValueData {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ValueData::Integer(_) | ValueData::Decimal(_) | ValueData::Double(_)
        )
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            ValueData::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Exact numeric value; `None` for doubles and non-numerics.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            ValueData::Integer(i) => Some(Decimal::from(*i)),
            ValueData::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    /// Numeric value promoted to `xs:double`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ValueData::Integer(i) => Some(*i as f64),
            ValueData::Decimal(d) => d.to_f64(),
            ValueData::Double(f) => Some(*f),
            _ => None,
        }
    }
}
