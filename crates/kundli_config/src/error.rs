//! Error types for configuration loading.

use thiserror::Error;

/// Errors from reading or validating a [`crate::KundliConfig`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File could not be read.
    #[error("cannot read config {path}: {message}")]
    Io { path: String, message: String },
    /// Text is not valid TOML for the config schema.
    #[error("invalid config TOML: {0}")]
    Parse(String),
    /// A clock-time key is not `HH:MM[:SS]`.
    #[error("{key} = '{value}' is not a clock time (HH:MM or HH:MM:SS)")]
    InvalidClockTime { key: &'static str, value: String },
    /// Default sunrise is not before default sunset.
    #[error("default_sunrise {sunrise} must be before default_sunset {sunset}")]
    DaylightOrder { sunrise: String, sunset: String },
    /// Cycle count outside the supported range.
    #[error("dasha_cycles must be between {min} and {max}, got {got}")]
    DashaCycles { got: u32, min: u32, max: u32 },
    /// Report would contain no mahadashas.
    #[error("mahadasha_report_limit must be at least 1")]
    EmptyReport,
    /// Static offset is non-finite or outside [-14, 14] hours.
    #[error("timezone_offsets.\"{tz_id}\" = {hours} is not a valid UTC offset")]
    InvalidOffset { tz_id: String, hours: f64 },
}
