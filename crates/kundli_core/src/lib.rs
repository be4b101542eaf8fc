//! Ephemeris gateway contract for the kundli engine.
//!
//! Everything downstream (charts, dashas, panchang) consumes raw positions
//! through [`EphemerisGateway`]. The crate does not compute positions itself;
//! it only defines the contract, the shared body/location types, and a
//! deterministic in-memory gateway ([`SnapshotEphemeris`]) for replay and tests.

pub mod error;
pub mod snapshot;

pub use error::EphemerisError;
pub use snapshot::SnapshotEphemeris;

/// Bodies the engine asks the gateway for.
///
/// Ketu is deliberately absent: it is always derived from the true node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    /// Ascending lunar node (true, not mean).
    TrueNode,
}

/// All queryable bodies in gateway order.
pub const ALL_BODIES: [Body; 8] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::TrueNode,
];

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::TrueNode => "True Node",
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }
}

/// Ecliptic state of a body as returned by the gateway.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Daily motion in longitude, degrees/day. Negative when retrograde.
    pub speed_deg_per_day: f64,
}

/// House system requested from the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HouseSystem {
    #[default]
    Equal,
    WholeSign,
    Placidus,
}

impl HouseSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equal => "Equal",
            Self::WholeSign => "Whole Sign",
            Self::Placidus => "Placidus",
        }
    }

    /// Single-letter code used by most ephemeris back ends.
    pub const fn code(self) -> char {
        match self {
            Self::Equal => 'E',
            Self::WholeSign => 'W',
            Self::Placidus => 'P',
        }
    }
}

/// Tropical ascendant and house cusps for an instant and location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HouseAngles {
    pub ascendant_tropical_deg: f64,
    pub cusps_deg: [f64; 12],
}

/// Horizon event kind for [`EphemerisGateway::rise_transit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetKind {
    Rise,
    Set,
}

/// Source of raw celestial positions.
///
/// Implementations must be pure for a given input: no hidden per-call state
/// that would make two identical requests disagree.
pub trait EphemerisGateway: Send + Sync {
    /// Longitude, latitude and daily speed of `body` at `jd_ut`.
    ///
    /// With `sidereal == true` the longitude is already ayanamsha-corrected.
    fn position(&self, jd_ut: f64, body: Body, sidereal: bool)
    -> Result<BodyState, EphemerisError>;

    /// Tropical ascendant and cusps.
    fn houses(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseAngles, EphemerisError>;

    /// Ayanamsha in degrees at `jd_ut`.
    fn ayanamsha(&self, jd_ut: f64) -> Result<f64, EphemerisError>;

    /// First `kind` event of `body` after `jd_ut_day_start`.
    ///
    /// `Ok(None)` means the event does not occur (circumpolar); that is a
    /// valid answer, not a failure.
    fn rise_transit(
        &self,
        jd_ut_day_start: f64,
        body: Body,
        kind: RiseSetKind,
        location: &GeoLocation,
    ) -> Result<Option<f64>, EphemerisError>;
}

impl<G: EphemerisGateway + ?Sized> EphemerisGateway for &G {
    fn position(
        &self,
        jd_ut: f64,
        body: Body,
        sidereal: bool,
    ) -> Result<BodyState, EphemerisError> {
        (**self).position(jd_ut, body, sidereal)
    }

    fn houses(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
        system: HouseSystem,
    ) -> Result<HouseAngles, EphemerisError> {
        (**self).houses(jd_ut, location, system)
    }

    fn ayanamsha(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        (**self).ayanamsha(jd_ut)
    }

    fn rise_transit(
        &self,
        jd_ut_day_start: f64,
        body: Body,
        kind: RiseSetKind,
        location: &GeoLocation,
    ) -> Result<Option<f64>, EphemerisError> {
        (**self).rise_transit(jd_ut_day_start, body, kind, location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_indices_match_table() {
        for (i, b) in ALL_BODIES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
        }
    }

    #[test]
    fn default_house_system_is_equal() {
        assert_eq!(HouseSystem::default(), HouseSystem::Equal);
        assert_eq!(HouseSystem::default().code(), 'E');
    }
}
