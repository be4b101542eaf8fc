//! Gateway error type.

use thiserror::Error;

use crate::{Body, RiseSetKind};

/// Failure reported by an [`EphemerisGateway`](crate::EphemerisGateway).
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The back end has no data for this body.
    #[error("no ephemeris data for {0}")]
    BodyUnavailable(Body),
    /// The instant is outside the back end's coverage.
    #[error("instant JD {jd_ut} outside ephemeris coverage")]
    OutOfCoverage { jd_ut: f64 },
    /// The back end holds no rise/set data for this body and event.
    #[error("no {kind:?} event data for {body}")]
    EventUnavailable { body: Body, kind: RiseSetKind },
    /// House computation failed (e.g. undefined at polar latitudes).
    #[error("house computation failed: {0}")]
    Houses(String),
    /// Any other back-end failure.
    #[error("ephemeris back end: {0}")]
    Backend(String),
}
