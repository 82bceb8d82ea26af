//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `homeaway.toml` in the working directory. Every field has a
//! default so the file is optional. Environment variables take precedence
//! over file values.

use serde::Deserialize;

use crate::demo::WALKTHROUGH_DEVICES;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Where notifications are delivered.
    pub notifications: NotificationsConfig,
    /// Device construction settings.
    pub devices: DevicesConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Notification delivery.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub sink: SinkKind,
}

/// Available notification sinks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// One plain line per notification on stdout.
    #[default]
    Console,
    /// Structured `tracing` events.
    Log,
}

impl std::str::FromStr for SinkKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "console" => Ok(Self::Console),
            "log" => Ok(Self::Log),
            other => Err(ConfigError::Validation(format!(
                "unknown notification sink `{other}`"
            ))),
        }
    }
}

/// Device construction settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DevicesConfig {
    /// Reject blind lift levels outside `0..=100`.
    pub strict_lift_range: bool,
    /// First id handed out by the allocator.
    pub first_id: u64,
}

impl Config {
    /// Load configuration from `homeaway.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or an
    /// override carries an invalid value.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("homeaway.toml")?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("HOMEAWAY_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("HOMEAWAY_SINK") {
            self.notifications.sink = val.parse()?;
        }
        if let Ok(val) = std::env::var("HOMEAWAY_STRICT_BLINDS") {
            self.devices.strict_lift_range = val.parse().map_err(|_| {
                ConfigError::Validation(format!("HOMEAWAY_STRICT_BLINDS must be a bool, got `{val}`"))
            })?;
        }
        if let Ok(val) = std::env::var("HOMEAWAY_FIRST_ID") {
            self.devices.first_id = val.parse().map_err(|_| {
                ConfigError::Validation(format!("HOMEAWAY_FIRST_ID must be an integer, got `{val}`"))
            })?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging filter must not be empty".to_string(),
            ));
        }
        if self
            .devices
            .first_id
            .checked_add(WALKTHROUGH_DEVICES - 1)
            .is_none()
        {
            return Err(ConfigError::Validation(format!(
                "first_id must leave room for {WALKTHROUGH_DEVICES} device ids"
            )));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "homeaway=info,homeaway_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
