//! Deterministic in-memory gateway.
//!
//! Positions are fixed at a reference epoch and move linearly with their
//! daily speed. Rise/set events are stored as fractions of a day after the
//! requested day start; an event that was never registered is an error, not
//! a circumpolar day. Used for replaying recorded ephemeris output and for
//! tests and benchmarks.

use std::collections::HashMap;

use crate::{
    Body, BodyState, EphemerisError, EphemerisGateway, GeoLocation, HouseAngles, HouseSystem,
    RiseSetKind,
};

#[derive(Debug, Clone)]
pub struct SnapshotEphemeris {
    epoch_jd: f64,
    ayanamsha_deg: f64,
    ascendant_tropical_deg: f64,
    /// Sidereal states at `epoch_jd`.
    bodies: HashMap<Body, BodyState>,
    /// Day fraction after the day start, `None` = event never happens.
    events: HashMap<(Body, RiseSetKind), Option<f64>>,
    coverage: Option<(f64, f64)>,
}

impl SnapshotEphemeris {
    /// Empty snapshot anchored at `epoch_jd`.
    pub fn new(epoch_jd: f64) -> Self {
        Self {
            epoch_jd,
            ayanamsha_deg: 0.0,
            ascendant_tropical_deg: 0.0,
            bodies: HashMap::new(),
            events: HashMap::new(),
            coverage: None,
        }
    }

    pub fn with_ayanamsha(mut self, deg: f64) -> Self {
        self.ayanamsha_deg = deg;
        self
    }

    pub fn with_ascendant(mut self, tropical_deg: f64) -> Self {
        self.ascendant_tropical_deg = tropical_deg.rem_euclid(360.0);
        self
    }

    /// Set the sidereal state of `body` at the epoch.
    pub fn with_body(mut self, body: Body, sidereal_lon_deg: f64, lat_deg: f64, speed: f64) -> Self {
        self.bodies.insert(
            body,
            BodyState {
                longitude_deg: sidereal_lon_deg.rem_euclid(360.0),
                latitude_deg: lat_deg,
                speed_deg_per_day: speed,
            },
        );
        self
    }

    /// Event `kind` of `body` occurs `day_fraction` days after each day start.
    pub fn with_event(mut self, body: Body, kind: RiseSetKind, day_fraction: f64) -> Self {
        self.events.insert((body, kind), Some(day_fraction));
        self
    }

    /// Event `kind` of `body` never occurs (circumpolar).
    pub fn without_event(mut self, body: Body, kind: RiseSetKind) -> Self {
        self.events.insert((body, kind), None);
        self
    }

    /// Restrict valid instants to `[start_jd, end_jd]`.
    pub fn with_coverage(mut self, start_jd: f64, end_jd: f64) -> Self {
        self.coverage = Some((start_jd, end_jd));
        self
    }

    pub fn epoch_jd(&self) -> f64 {
        self.epoch_jd
    }

    fn check_coverage(&self, jd_ut: f64) -> Result<(), EphemerisError> {
        match self.coverage {
            Some((start, end)) if jd_ut < start || jd_ut > end => {
                Err(EphemerisError::OutOfCoverage { jd_ut })
            }
            _ => Ok(()),
        }
    }
}

impl EphemerisGateway for SnapshotEphemeris {
    fn position(
        &self,
        jd_ut: f64,
        body: Body,
        sidereal: bool,
    ) -> Result<BodyState, EphemerisError> {
        self.check_coverage(jd_ut)?;
        let base = self
            .bodies
            .get(&body)
            .ok_or(EphemerisError::BodyUnavailable(body))?;
        let mut lon = base.longitude_deg + base.speed_deg_per_day * (jd_ut - self.epoch_jd);
        if !sidereal {
            lon += self.ayanamsha_deg;
        }
        Ok(BodyState {
            longitude_deg: lon.rem_euclid(360.0),
            ..*base
        })
    }

    fn houses(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
        _system: HouseSystem,
    ) -> Result<HouseAngles, EphemerisError> {
        self.check_coverage(jd_ut)?;
        if !(-90.0..=90.0).contains(&location.latitude_deg) {
            return Err(EphemerisError::Houses(format!(
                "latitude {} out of range",
                location.latitude_deg
            )));
        }
        let asc = self.ascendant_tropical_deg;
        let mut cusps_deg = [0.0; 12];
        for (i, c) in cusps_deg.iter_mut().enumerate() {
            *c = (asc + 30.0 * i as f64).rem_euclid(360.0);
        }
        Ok(HouseAngles {
            ascendant_tropical_deg: asc,
            cusps_deg,
        })
    }

    fn ayanamsha(&self, jd_ut: f64) -> Result<f64, EphemerisError> {
        self.check_coverage(jd_ut)?;
        Ok(self.ayanamsha_deg)
    }

    fn rise_transit(
        &self,
        jd_ut_day_start: f64,
        body: Body,
        kind: RiseSetKind,
        _location: &GeoLocation,
    ) -> Result<Option<f64>, EphemerisError> {
        self.check_coverage(jd_ut_day_start)?;
        let event = self
            .events
            .get(&(body, kind))
            .ok_or(EphemerisError::EventUnavailable { body, kind })?;
        Ok(event.map(|frac| jd_ut_day_start + frac))
    }
}
