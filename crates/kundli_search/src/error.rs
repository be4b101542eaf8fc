//! Error types for chart and panchang assembly.

use kundli_core::EphemerisError;
use kundli_time::TimeError;
use kundli_vedic_base::VedicError;
use thiserror::Error;

/// Errors from orchestration over the gateway.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Gateway query failed.
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    /// Input parsing or instant conversion failed.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Pure Vedic calculation rejected its input.
    #[error(transparent)]
    Vedic(#[from] VedicError),
}
