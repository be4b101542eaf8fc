//! Ashtakoota compatibility between two birth charts.

use kundli_core::EphemerisGateway;
use kundli_time::{BirthInput, TimeResolver};
use kundli_vedic_base::{
    AshtakootaScore, Graha, NakshatraInfo, RashiInfo, ashtakoota, has_mangal_dosha,
};

use crate::chart::{BirthChart, birth_chart};
use crate::error::SearchError;

/// Per-partner facts used by the match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartnerSummary {
    pub moon_rashi: RashiInfo,
    pub moon_nakshatra: NakshatraInfo,
    pub mars_house: u8,
    pub mangal_dosha: bool,
}

impl PartnerSummary {
    pub fn from_chart(chart: &BirthChart) -> Self {
        let moon = chart.moon();
        let mars_house = chart.graha(Graha::Mangal).house;
        Self {
            moon_rashi: moon.rashi,
            moon_nakshatra: moon.nakshatra,
            mars_house,
            mangal_dosha: has_mangal_dosha(mars_house),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompatibilityReport {
    pub score: AshtakootaScore,
    pub first: PartnerSummary,
    pub second: PartnerSummary,
}

impl CompatibilityReport {
    /// Both partners have Mangal Dosha, or neither does.
    pub fn mangal_dosha_compatible(&self) -> bool {
        self.first.mangal_dosha == self.second.mangal_dosha
    }
}

pub fn compatibility_from_charts(first: &BirthChart, second: &BirthChart) -> CompatibilityReport {
    CompatibilityReport {
        score: ashtakoota(first.moon_placement(), second.moon_placement()),
        first: PartnerSummary::from_chart(first),
        second: PartnerSummary::from_chart(second),
    }
}

/// Build both charts, each in its own timezone, and match them.
pub fn compatibility<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    resolver: &TimeResolver,
    first: &BirthInput,
    second: &BirthInput,
) -> Result<CompatibilityReport, SearchError> {
    let a = birth_chart(gateway, resolver, first)?;
    let b = birth_chart(gateway, resolver, second)?;
    Ok(compatibility_from_charts(&a, &b))
}
