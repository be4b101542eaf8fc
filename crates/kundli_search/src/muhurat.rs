//! Muhurat for a date: the day's panchang plus eight graded daylight windows.

use chrono::NaiveDate;
use kundli_config::KundliConfig;
use kundli_core::{EphemerisGateway, GeoLocation};
use kundli_time::TimeResolver;
use kundli_vedic_base::{ClockWindow, EventType, MuhuratScore, score_muhurat};
use tracing::debug;

use crate::error::SearchError;
use crate::panchang::{PanchangDay, clock_minutes, panchang_for_date};

/// Where the daylight bounds came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Daylight {
    /// Observed sunrise and sunset.
    Observed,
    /// Configured defaults; the Sun did not rise or set that day.
    Default,
}

impl Daylight {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Observed => "observed",
            Self::Default => "default",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MuhuratDay {
    pub panchang: PanchangDay,
    pub event: EventType,
    pub daylight: Daylight,
    pub daylight_window: ClockWindow,
    pub score: MuhuratScore,
}

/// Sunrise to sunset, or the configured defaults when either is missing
/// or they do not form a forward interval.
pub fn daylight_window(panchang: &PanchangDay, config: &KundliConfig) -> (ClockWindow, Daylight) {
    match (panchang.sunrise.minutes(), panchang.sunset.minutes()) {
        (Some(rise), Some(set)) if set > rise => (ClockWindow::new(rise, set), Daylight::Observed),
        _ => (
            ClockWindow::new(
                clock_minutes(config.default_sunrise),
                clock_minutes(config.default_sunset),
            ),
            Daylight::Default,
        ),
    }
}

pub fn muhurat_for_date<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    resolver: &TimeResolver,
    config: &KundliConfig,
    date: NaiveDate,
    location: &GeoLocation,
    tz_id: &str,
    event: EventType,
) -> Result<MuhuratDay, SearchError> {
    let panchang = panchang_for_date(gateway, resolver, config, date, location, tz_id)?;
    let (daylight_window, daylight) = daylight_window(&panchang, config);
    let score = score_muhurat(
        daylight_window,
        panchang.nakshatra.nakshatra,
        event,
        panchang.rahu_kaal,
    );

    debug!(
        %date,
        event = event.name(),
        daylight = daylight.name(),
        excellent = score.counts.excellent,
        "muhurat scored"
    );

    Ok(MuhuratDay {
        panchang,
        event,
        daylight,
        daylight_window,
        score,
    })
}
