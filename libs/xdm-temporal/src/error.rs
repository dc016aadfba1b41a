//! Error taxonomy shared by the comparator, the normalizer and the scaler.
//!
//! Every failure is reported as one [`Error`] variant; callers map it to the
//! XQuery error code with [`Error::code`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operator is undefined for the static types of its operands.
    #[error("Static type error: {0}")]
    StaticTypeError(String),

    /// A duration result falls outside the representable range.
    #[error("Duration overflow: {0}")]
    ArithmeticOverflow(String),

    /// A duration was scaled or divided by NaN.
    #[error("Invalid arithmetic value: {0}")]
    InvalidArithmeticValue(String),

    /// An instant computation exceeded the width of the timeline coordinate.
    #[error("Date/time overflow: {0}")]
    Overflow(String),

    #[error("Division by zero")]
    DivisionByZero,

    /// A value constructor was handed an out-of-range field.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Invalid timezone: {0} minutes")]
    InvalidTimezone(i32),
}

impl Error {
    /// The XQuery error code this failure surfaces as.
    pub fn code(&self) -> &'static str {
        match self {
            Error::StaticTypeError(_) => "XPTY0004",
            Error::ArithmeticOverflow(_) => "FODT0002",
            Error::InvalidArithmeticValue(_) => "FOCA0005",
            Error::Overflow(_) => "FODT0001",
            Error::DivisionByZero => "FOAR0001",
            Error::InvalidValue(_) => "FORG0001",
            Error::InvalidTimezone(_) => "FODT0003",
        }
    }

    pub(crate) fn not_comparable(lhs: impl std::fmt::Display, rhs: impl std::fmt::Display) -> Self {
        Error::StaticTypeError(format!("{lhs} and {rhs} cannot be compared"))
    }
}
