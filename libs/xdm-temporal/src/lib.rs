//! XDM temporal values - comparison and duration arithmetic
//!
//! # Architecture
//!
//! ```text
//! Value + static XdmType ─► ops::compare   ─► Instant (calendar values)
//!                        └► ops::arithmetic ─► YearMonthDuration / DayTimeDuration
//! ```
//!
//! - **Calendar values** (`xs:date`, `xs:dateTime`, `xs:time` and the five
//!   partial `xs:g*` kinds) compare as points on the UTC timeline. Missing
//!   fields are taken from the reference date 1972-12-01 and a missing
//!   timezone from the engine's implicit timezone.
//! - **Durations** are gated on static types: an operand typed as the
//!   abstract `xs:duration` is rejected before its value is inspected.
//! - **Year-month scaling** rounds half towards positive infinity.
//!
//! [`Engine`] binds the implicit timezone; [`engine::global`] gives a
//! process-wide instance built from [`EngineConfig`].

pub mod calendar;
pub mod config;
pub mod duration;
pub mod engine;
pub mod error;
pub mod instant;
pub mod ops;
pub mod types;
pub mod value;

pub use calendar::{CalendarKind, CalendarValue, TimeOfDay, TimezoneOffset};
pub use config::{ConfigError, EngineConfig};
pub use duration::{DayTimeDuration, Duration, YearMonthDuration};
pub use engine::Engine;
pub use error::{Error, Result};
pub use instant::Instant;
pub use ops::{BinaryOperator, ComparisonOperator};
pub use types::XdmType;
pub use value::{Value, ValueData};
