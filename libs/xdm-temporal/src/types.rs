//! Static types of operands
//!
//! The evaluator passes the static type of each operand alongside its value.
//! Duration operators consult the static type before the value: an operand
//! typed as the abstract `xs:duration` is rejected whatever it evaluates to.

use crate::calendar::CalendarKind;
use crate::value::{Value, ValueData};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XdmType {
    /// `xs:anyAtomicType`; no static information beyond atomicity.
    AnyAtomic,
    Boolean,
    Integer,
    Decimal,
    Double,
    Date,
    DateTime,
    Time,
    GYearMonth,
    GYear,
    GMonthDay,
    GDay,
    GMonth,
    /// The abstract `xs:duration` supertype.
    Duration,
    YearMonthDuration,
    DayTimeDuration,
}

impl XdmType {
    /// The most specific type of a value, for callers without static typing.
    pub fn of(value: &Value) -> Self {
        match value.data() {
            ValueData::Boolean(_) => XdmType::Boolean,
            ValueData::Integer(_) => XdmType::Integer,
            ValueData::Decimal(_) => XdmType::Decimal,
            ValueData::Double(_) => XdmType::Double,
            ValueData::Calendar(c) => c.kind().into(),
            ValueData::Duration(_) => XdmType::Duration,
            ValueData::YearMonthDuration(_) => XdmType::YearMonthDuration,
            ValueData::DayTimeDuration(_) => XdmType::DayTimeDuration,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            XdmType::AnyAtomic => "xs:anyAtomicType",
            XdmType::Boolean => "xs:boolean",
            XdmType::Integer => "xs:integer",
            XdmType::Decimal => "xs:decimal",
            XdmType::Double => "xs:double",
            XdmType::Date => CalendarKind::Date.type_name(),
            XdmType::DateTime => CalendarKind::DateTime.type_name(),
            XdmType::Time => CalendarKind::Time.type_name(),
            XdmType::GYearMonth => CalendarKind::GYearMonth.type_name(),
            XdmType::GYear => CalendarKind::GYear.type_name(),
            XdmType::GMonthDay => CalendarKind::GMonthDay.type_name(),
            XdmType::GDay => CalendarKind::GDay.type_name(),
            XdmType::GMonth => CalendarKind::GMonth.type_name(),
            XdmType::Duration => "xs:duration",
            XdmType::YearMonthDuration => "xs:yearMonthDuration",
            XdmType::DayTimeDuration => "xs:dayTimeDuration",
        }
    }

    pub fn is_abstract_duration(self) -> bool {
        self == XdmType::Duration
    }

    pub fn is_concrete_duration(self) -> bool {
        matches!(self, XdmType::YearMonthDuration | XdmType::DayTimeDuration)
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, XdmType::Integer | XdmType::Decimal | XdmType::Double)
    }
}

impl From<CalendarKind> for XdmType {
    fn from(kind: CalendarKind) -> Self {
        match kind {
            CalendarKind::Date => XdmType::Date,
            CalendarKind::DateTime => XdmType::DateTime,
            CalendarKind::Time => XdmType::Time,
            CalendarKind::GYearMonth => XdmType::GYearMonth,
            CalendarKind::GYear => XdmType::GYear,
            CalendarKind::GMonthDay => XdmType::GMonthDay,
            CalendarKind::GDay => XdmType::GDay,
            CalendarKind::GMonth => XdmType::GMonth,
        }
    }
}

impl fmt::Display for XdmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
