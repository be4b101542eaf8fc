//! Dasha orchestration: bridges the gateway's birth Moon with the pure-math
//! Vimshottari timeline in kundli_vedic_base.
//!
//! Two entry points:
//! - `dasha_for_birth`: resolve the birth instant, query the Moon, build the report
//! - `dasha_from_moon`: same report from a known birth JD and Moon longitude

use kundli_config::KundliConfig;
use kundli_core::{Body, EphemerisGateway};
use kundli_time::{BirthInput, TimeResolver};
use kundli_vedic_base::dasha::{
    ActiveDashas, DashaLevel, DashaPeriod, active_dashas, children_of, vimshottari_config,
    vimshottari_mahadashas,
};
use kundli_vedic_base::{NakshatraInfo, nakshatra_from_longitude, normalize_360};
use tracing::debug;

use crate::error::SearchError;

/// Timeline plus the periods active at a reference instant.
#[derive(Debug, Clone, PartialEq)]
pub struct DashaReport {
    pub birth_jd: f64,
    /// Sidereal birth Moon, [0, 360).
    pub moon_longitude_deg: f64,
    pub moon: NakshatraInfo,
    /// Partial birth period followed by the full cycles.
    pub mahadashas: Vec<DashaPeriod>,
    pub reference_jd: f64,
    pub active: ActiveDashas,
}

impl DashaReport {
    /// The first `limit` mahadashas.
    pub fn reported_mahadashas(&self, limit: usize) -> &[DashaPeriod] {
        &self.mahadashas[..limit.min(self.mahadashas.len())]
    }

    /// Sub-periods of any period in the timeline; empty below Sookshma.
    pub fn children(&self, period: &DashaPeriod) -> Vec<DashaPeriod> {
        children_of(period, vimshottari_config())
    }
}

pub fn dasha_from_moon(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    cycles: u32,
    reference_jd: f64,
) -> Result<DashaReport, SearchError> {
    let cfg = vimshottari_config();
    let mahadashas = vimshottari_mahadashas(birth_jd, moon_sidereal_lon, cfg, cycles)?;
    let active = active_dashas(&mahadashas, cfg, reference_jd, DashaLevel::Sookshma);
    let moon_longitude_deg = normalize_360(moon_sidereal_lon);

    debug!(
        birth_jd,
        reference_jd,
        periods = mahadashas.len(),
        active_levels = active.chain().count(),
        "dasha timeline built"
    );

    Ok(DashaReport {
        birth_jd,
        moon_longitude_deg,
        moon: nakshatra_from_longitude(moon_longitude_deg),
        mahadashas,
        reference_jd,
        active,
    })
}

pub fn dasha_for_birth<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    resolver: &TimeResolver,
    config: &KundliConfig,
    input: &BirthInput,
    reference_jd: f64,
) -> Result<DashaReport, SearchError> {
    let instant = resolver.resolve(input.local_datetime(), &input.timezone, input.longitude_deg)?;
    let moon = gateway.position(instant.jd_ut, Body::Moon, true)?;
    dasha_from_moon(
        instant.jd_ut,
        moon.longitude_deg,
        config.dasha_cycles,
        reference_jd,
    )
}
