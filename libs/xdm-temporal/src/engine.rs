//! The comparison engine
//!
//! An [`Engine`] owns the implicit timezone and exposes the operators with it
//! bound. The process-wide instance is initialized once, either explicitly
//! with [`install`] or lazily from [`EngineConfig::load`], and read from any
//! thread afterwards.

use crate::calendar::TimezoneOffset;
use crate::config::{ConfigError, EngineConfig};
use crate::duration::{DayTimeDuration, YearMonthDuration};
use crate::error::Result;
use crate::ops::{self, BinaryOperator, ComparisonOperator};
use crate::types::XdmType;
use crate::value::Value;
use std::sync::OnceLock;

static GLOBAL_ENGINE: OnceLock<Engine> = OnceLock::new();

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    implicit_timezone: TimezoneOffset,
}

impl Engine {
    pub fn new(implicit_timezone: TimezoneOffset) -> Self {
        Self { implicit_timezone }
    }

    pub fn from_config(config: &EngineConfig) -> std::result::Result<Self, ConfigError> {
        Ok(Self::new(config.implicit_timezone()?))
    }

    pub fn implicit_timezone_offset(&self) -> TimezoneOffset {
        self.implicit_timezone
    }

    /// `fn:implicit-timezone()`
    pub fn implicit_timezone(&self) -> DayTimeDuration {
        self.implicit_timezone.into()
    }

    /// Compare with explicit static types.
    pub fn compare_values(
        &self,
        lhs: &Value,
        rhs: &Value,
        op: ComparisonOperator,
        lhs_type: XdmType,
        rhs_type: XdmType,
    ) -> Result<bool> {
        ops::compare_values(lhs, rhs, op, lhs_type, rhs_type, self.implicit_timezone).inspect_err(
            |err| tracing::debug!(%op, %lhs_type, %rhs_type, error = %err, "Comparison failed"),
        )
    }

    /// Compare using each value's own type as its static type.
    pub fn compare(&self, lhs: &Value, op: ComparisonOperator, rhs: &Value) -> Result<bool> {
        self.compare_values(lhs, rhs, op, lhs.dynamic_type(), rhs.dynamic_type())
    }

    pub fn scale_year_month_duration(
        &self,
        duration: YearMonthDuration,
        factor: f64,
    ) -> Result<YearMonthDuration> {
        ops::scale_year_month_duration(duration, factor)
    }

    pub fn execute_binary_op(
        &self,
        op: BinaryOperator,
        lhs: &Value,
        rhs: &Value,
        lhs_type: XdmType,
        rhs_type: XdmType,
    ) -> Result<Value> {
        ops::execute_binary_op(op, lhs, rhs, lhs_type, rhs_type, self.implicit_timezone)
    }
}

/// Install the process-wide engine. Fails, returning `engine`, if one is
/// already installed.
pub fn install(engine: Engine) -> std::result::Result<(), Engine> {
    GLOBAL_ENGINE.set(engine)
}

/// The process-wide engine, loading [`EngineConfig`] on first use.
pub fn global() -> &'static Engine {
    GLOBAL_ENGINE.get_or_init(|| {
        match EngineConfig::load().and_then(|config| Engine::from_config(&config)) {
            Ok(engine) => engine,
            Err(err) => {
                tracing::warn!(error = %err, "Falling back to UTC implicit timezone");
                Engine::default()
            }
        }
    })
}
