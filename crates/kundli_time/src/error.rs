//! Error types for birth-time parsing and conversion.

use thiserror::Error;

/// Errors from parsing birth inputs or converting instants.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Date is not `YYYY-MM-DD` or is not a real calendar date.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    /// Time is not `HH:MM` or `HH:MM:SS`.
    #[error("invalid time '{0}': expected HH:MM or HH:MM:SS")]
    InvalidTime(String),
    /// Latitude or longitude outside its range, or not finite.
    #[error("invalid {axis} {value}")]
    InvalidCoordinate { axis: &'static str, value: f64 },
    /// Julian day cannot be represented as a calendar instant.
    #[error("Julian day {0} is not representable")]
    UnrepresentableJd(f64),
}
