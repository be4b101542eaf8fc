//! Facade error type and its serializable `{error, detail}` form.

use kundli_core::EphemerisError;
use kundli_search::SearchError;
use kundli_time::TimeError;
use kundli_vedic_base::VedicError;
use serde::Serialize;
use thiserror::Error;

/// Any failure of a top-level operation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum KundliError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error(transparent)]
    Vedic(#[from] VedicError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl From<EphemerisError> for KundliError {
    fn from(e: EphemerisError) -> Self {
        Self::Search(SearchError::Ephemeris(e))
    }
}

/// Coarse failure class reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Malformed date, time, coordinate or division factor.
    InputParse,
    /// The ephemeris gateway failed.
    Ephemeris,
    /// A calculation rejected intermediate values.
    Calculation,
}

impl ErrorKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::InputParse => "input_parse",
            Self::Ephemeris => "ephemeris",
            Self::Calculation => "calculation",
        }
    }
}

fn time_kind(e: &TimeError) -> ErrorKind {
    match e {
        TimeError::InvalidDate(_) | TimeError::InvalidTime(_) | TimeError::InvalidCoordinate { .. } => {
            ErrorKind::InputParse
        }
        _ => ErrorKind::Calculation,
    }
}

fn vedic_kind(e: &VedicError) -> ErrorKind {
    match e {
        VedicError::UnsupportedDivision(_) => ErrorKind::InputParse,
        _ => ErrorKind::Calculation,
    }
}

impl KundliError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Time(e) | Self::Search(SearchError::Time(e)) => time_kind(e),
            Self::Vedic(e) | Self::Search(SearchError::Vedic(e)) => vedic_kind(e),
            Self::Search(SearchError::Ephemeris(_)) => ErrorKind::Ephemeris,
            Self::Search(_) => ErrorKind::Calculation,
        }
    }
}

/// Structured failure payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: ErrorKind,
    pub detail: String,
}

impl From<&KundliError> for ErrorBody {
    fn from(e: &KundliError) -> Self {
        Self {
            error: e.kind(),
            detail: e.to_string(),
        }
    }
}

/// Result of a top-level operation: the payload or an [`ErrorBody`].
///
/// Serializes untagged, so a failure is exactly `{"error": ..., "detail": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Outcome<T> {
    Success(T),
    Failure(ErrorBody),
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(v) => Some(v),
            Self::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ErrorBody> {
        match self {
            Self::Success(_) => None,
            Self::Failure(e) => Some(e),
        }
    }

    pub fn into_result(self) -> Result<T, ErrorBody> {
        match self {
            Self::Success(v) => Ok(v),
            Self::Failure(e) => Err(e),
        }
    }
}

impl<T> From<Result<T, KundliError>> for Outcome<T> {
    fn from(r: Result<T, KundliError>) -> Self {
        match r {
            Ok(v) => Self::Success(v),
            Err(e) => Self::Failure(ErrorBody::from(&e)),
        }
    }
}
