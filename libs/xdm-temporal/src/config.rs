//! Configuration for the comparison engine
//!
//! The only setting is the implicit timezone. It is read once, from (in
//! increasing priority) the built-in default, an optional `xdm-temporal`
//! config file and `XDM__*` environment variables.

use crate::calendar::TimezoneOffset;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error("implicit_timezone_minutes must be within -840..=840, got {0}")]
    ImplicitTimezoneOutOfRange(i16),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Offset from UTC, in minutes, assumed for calendar values without a timezone.
    /// Environment variable: `XDM__IMPLICIT_TIMEZONE_MINUTES`
    #[serde(default = "default_implicit_timezone_minutes")]
    pub implicit_timezone_minutes: i16,
}

fn default_implicit_timezone_minutes() -> i16 {
    0
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            implicit_timezone_minutes: default_implicit_timezone_minutes(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from the `.env` file, config file and environment
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .set_default(
                "implicit_timezone_minutes",
                default_implicit_timezone_minutes() as i64,
            )?
            .add_source(config::File::with_name("xdm-temporal").required(false))
            // XDM__IMPLICIT_TIMEZONE_MINUTES=540
            .add_source(
                config::Environment::with_prefix("XDM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config = Self::from_settings(settings)?;
        tracing::info!(
            implicit_timezone_minutes = config.implicit_timezone_minutes,
            "Loaded engine configuration"
        );
        Ok(config)
    }

    /// Deserialize and validate an already assembled `config::Config`.
    pub fn from_settings(settings: config::Config) -> Result<Self, ConfigError> {
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.implicit_timezone().map(|_| ())
    }

    pub fn implicit_timezone(&self) -> Result<TimezoneOffset, ConfigError> {
        TimezoneOffset::new(self.implicit_timezone_minutes)
            .map_err(|_| ConfigError::ImplicitTimezoneOutOfRange(self.implicit_timezone_minutes))
    }
}
