//! Error types for Vedic calculations.

use thiserror::Error;

/// Errors from pure Vedic calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Division factor is not one of the supported vargas.
    #[error("unsupported divisional chart D{0}; supported: 1,2,3,4,7,9,10,12,16,20,24,27,30,40,45,60")]
    UnsupportedDivision(u16),
    /// Longitude or other angle is NaN or infinite.
    #[error("non-finite {0}")]
    NonFinite(&'static str),
    /// Period bounds are reversed or empty.
    #[error("invalid period: start {start_jd} >= end {end_jd}")]
    InvalidPeriod { start_jd: f64, end_jd: f64 },
    /// More 120-year cycles requested than a timeline may hold.
    #[error("dasha cycles {got} exceeds the maximum of {max}")]
    TooManyCycles { got: u32, max: u32 },
}
