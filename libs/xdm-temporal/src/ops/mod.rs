//! Binary operators over atomic values
//!
//! Comparisons return `xs:boolean`; `*` and `div` implement duration
//! scaling and duration ratios. Every entry point receives the static type
//! of each operand next to its value.

pub mod arithmetic;
pub mod compare;

use crate::calendar::TimezoneOffset;
use crate::error::{Error, Result};
use crate::types::XdmType;
use crate::value::Value;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub use arithmetic::{
    divide, divide_day_time_duration, divide_day_time_durations, divide_year_month_duration,
    divide_year_month_durations, multiply, scale_day_time_duration, scale_year_month_duration,
};
pub use compare::compare_values;

/// The six value comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl ComparisonOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOperator::Eq => "eq",
            ComparisonOperator::Ne => "ne",
            ComparisonOperator::Lt => "lt",
            ComparisonOperator::Le => "le",
            ComparisonOperator::Gt => "gt",
            ComparisonOperator::Ge => "ge",
        }
    }

    /// `lt`, `le`, `gt` and `ge` need a total order; `eq`/`ne` only equality.
    pub fn is_ordering(self) -> bool {
        !matches!(self, ComparisonOperator::Eq | ComparisonOperator::Ne)
    }

    pub fn evaluate(self, ordering: Ordering) -> bool {
        match self {
            ComparisonOperator::Eq => ordering == Ordering::Equal,
            ComparisonOperator::Ne => ordering != Ordering::Equal,
            ComparisonOperator::Lt => ordering == Ordering::Less,
            ComparisonOperator::Le => ordering != Ordering::Greater,
            ComparisonOperator::Gt => ordering == Ordering::Greater,
            ComparisonOperator::Ge => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Accepts both value (`eq`) and general (`=`) comparison spellings.
impl FromStr for ComparisonOperator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "eq" | "=" => Ok(ComparisonOperator::Eq),
            "ne" | "!=" => Ok(ComparisonOperator::Ne),
            "lt" | "<" => Ok(ComparisonOperator::Lt),
            "le" | "<=" => Ok(ComparisonOperator::Le),
            "gt" | ">" => Ok(ComparisonOperator::Gt),
            "ge" | ">=" => Ok(ComparisonOperator::Ge),
            other => Err(Error::InvalidValue(format!(
                "unknown comparison operator '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Compare(ComparisonOperator),
    Mul,
    Div,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOperator::Compare(op) => op.fmt(f),
            BinaryOperator::Mul => f.write_str("*"),
            BinaryOperator::Div => f.write_str("div"),
        }
    }
}

/// Execute a binary operation
pub fn execute_binary_op(
    op: BinaryOperator,
    lhs: &Value,
    rhs: &Value,
    lhs_type: XdmType,
    rhs_type: XdmType,
    implicit_timezone: TimezoneOffset,
) -> Result<Value> {
    match op {
        BinaryOperator::Compare(cmp) => {
            compare_values(lhs, rhs, cmp, lhs_type, rhs_type, implicit_timezone).map(Value::boolean)
        }
        BinaryOperator::Mul => multiply(lhs, rhs, lhs_type, rhs_type),
        BinaryOperator::Div => divide(lhs, rhs, lhs_type, rhs_type),
    }
}
