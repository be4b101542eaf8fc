//! Daily panchang for a date and place.
//!
//! Sun and Moon are sampled at the configured local reference time. Rise and
//! set events are searched from local midnight and reported on the wall
//! clock of the reference time's offset.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use kundli_config::KundliConfig;
use kundli_core::{Body, EphemerisGateway, GeoLocation, RiseSetKind};
use kundli_time::{ResolvedInstant, TimeResolver, local_clock_time};
use kundli_vedic_base::{
    ClockWindow, Kaal, KaranaInfo, NakshatraInfo, RashiInfo, TithiInfo, Vaar, YogaInfo,
    kaal_window, karana_from_longitudes, nakshatra_from_longitude, rashi_from_longitude,
    tithi_from_longitudes, yoga_from_longitudes,
};
use tracing::debug;

use crate::error::SearchError;

/// Local time of a horizon event, or its absence (circumpolar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiseSetTime {
    At(NaiveTime),
    Unavailable,
}

impl RiseSetTime {
    pub fn time(self) -> Option<NaiveTime> {
        match self {
            Self::At(t) => Some(t),
            Self::Unavailable => None,
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, Self::At(_))
    }

    /// Minutes after local midnight.
    pub fn minutes(self) -> Option<f64> {
        self.time().map(clock_minutes)
    }
}

/// Minutes after midnight of a wall-clock time.
pub fn clock_minutes(t: NaiveTime) -> f64 {
    f64::from(t.num_seconds_from_midnight()) / 60.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanchangDay {
    pub date: NaiveDate,
    /// Sampling instant.
    pub reference: ResolvedInstant,
    pub sun_longitude_deg: f64,
    pub moon_longitude_deg: f64,
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaInfo,
    pub vaar: Vaar,
    pub sun_sign: RashiInfo,
    pub moon_sign: RashiInfo,
    pub sunrise: RiseSetTime,
    pub sunset: RiseSetTime,
    pub moonrise: RiseSetTime,
    pub rahu_kaal: ClockWindow,
    pub gulika_kaal: ClockWindow,
    pub yamaghanda: ClockWindow,
}

pub fn panchang_for_date<G: EphemerisGateway + ?Sized>(
    gateway: &G,
    resolver: &TimeResolver,
    config: &KundliConfig,
    date: NaiveDate,
    location: &GeoLocation,
    tz_id: &str,
) -> Result<PanchangDay, SearchError> {
    let reference = resolver.resolve(
        date.and_time(config.panchang_reference_time),
        tz_id,
        location.longitude_deg,
    )?;
    let jd = reference.jd_ut;
    let sun = gateway.position(jd, Body::Sun, true)?.longitude_deg;
    let moon = gateway.position(jd, Body::Moon, true)?.longitude_deg;

    let vaar = Vaar::from_days_from_sunday(date.weekday().num_days_from_sunday());

    let midnight = resolver.resolve(date.and_time(NaiveTime::MIN), tz_id, location.longitude_deg)?;
    let offset = reference.utc_offset_hours;
    let event = |body: Body, kind: RiseSetKind| -> Result<RiseSetTime, SearchError> {
        match gateway.rise_transit(midnight.jd_ut, body, kind, location)? {
            Some(event_jd) => Ok(RiseSetTime::At(local_clock_time(event_jd, offset)?)),
            None => Ok(RiseSetTime::Unavailable),
        }
    };
    let sunrise = event(Body::Sun, RiseSetKind::Rise)?;
    let sunset = event(Body::Sun, RiseSetKind::Set)?;
    let moonrise = event(Body::Moon, RiseSetKind::Rise)?;

    debug!(%date, tz_id, jd_ut = jd, "panchang sampled");

    Ok(PanchangDay {
        date,
        reference,
        sun_longitude_deg: sun,
        moon_longitude_deg: moon,
        tithi: tithi_from_longitudes(sun, moon),
        nakshatra: nakshatra_from_longitude(moon),
        yoga: yoga_from_longitudes(sun, moon),
        karana: karana_from_longitudes(sun, moon),
        vaar,
        sun_sign: rashi_from_longitude(sun),
        moon_sign: rashi_from_longitude(moon),
        sunrise,
        sunset,
        moonrise,
        rahu_kaal: kaal_window(Kaal::RahuKaal, vaar),
        gulika_kaal: kaal_window(Kaal::GulikaKaal, vaar),
        yamaghanda: kaal_window(Kaal::Yamaghanda, vaar),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rise_set_time_accessors() {
        let t = NaiveTime::from_hms_opt(6, 12, 30).unwrap();
        let at = RiseSetTime::At(t);
        assert!(at.is_available());
        assert_eq!(at.time(), Some(t));
        assert!((at.minutes().unwrap() - 372.5).abs() < 1e-12);
        assert_eq!(RiseSetTime::Unavailable.minutes(), None);
    }
}
