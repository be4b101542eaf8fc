//! Serializable report types.
//!
//! Presentation rounding happens only here. The chart, dasha and panchang
//! values these are built from stay at full precision.

use chrono::{NaiveDate, NaiveDateTime};
use kundli_search::{
    BirthChart, CompatibilityReport, DashaReport, DivisionalChart, GrahaPlacement, MuhuratDay,
    PanchangDay, PartnerSummary, RiseSetTime,
};
use kundli_time::{BirthInput, ResolvedInstant, jd_to_utc};
use kundli_vedic_base::{
    ASHTAKOOTA_MAX, ClockWindow, DashaLevel, DashaPeriod, MuhuratWindow, Rashi, RashiInfo,
};
use serde::Serialize;

use crate::error::KundliError;

pub const LONGITUDE_DECIMALS: i32 = 4;
pub const DEGREES_DECIMALS: i32 = 2;
pub const YEARS_DECIMALS: i32 = 2;
pub const ANTARDASHA_DAYS_DECIMALS: i32 = 1;
pub const DAYS_DECIMALS: i32 = 2;
const JD_DECIMALS: i32 = 6;
const SCORE_DECIMALS: i32 = 1;

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

fn lon(v: f64) -> f64 {
    round_to(v, LONGITUDE_DECIMALS)
}

fn deg(v: f64) -> f64 {
    round_to(v, DEGREES_DECIMALS)
}

/// `HH:MM` for minutes after midnight, truncated to the minute.
pub fn format_clock_minutes(minutes: f64) -> String {
    let m = minutes.max(0.0).floor() as u32;
    format!("{:02}:{:02}", (m / 60) % 24, m % 60)
}

fn format_window(w: ClockWindow) -> String {
    format!(
        "{}-{}",
        format_clock_minutes(w.start_min),
        format_clock_minutes(w.end_min)
    )
}

fn format_rise_set(t: RiseSetTime) -> Option<String> {
    t.time().map(|t| t.format("%H:%M").to_string())
}

// ---------------------------------------------------------------------------
// Shared pieces
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputDto {
    pub date: NaiveDate,
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

impl From<&BirthInput> for InputDto {
    fn from(b: &BirthInput) -> Self {
        Self {
            date: b.date,
            time: b.time.format("%H:%M:%S").to_string(),
            latitude: b.latitude_deg,
            longitude: b.longitude_deg,
            timezone: b.timezone.clone(),
        }
    }
}

/// How the local time was pinned to UT.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstantDto {
    pub julian_day_ut: f64,
    pub utc: NaiveDateTime,
    pub timezone_offset: f64,
    pub dst_active: bool,
    /// `timezone_database`, `static_table` or `longitude_estimate`.
    pub offset_source: &'static str,
}

impl From<&ResolvedInstant> for InstantDto {
    fn from(i: &ResolvedInstant) -> Self {
        Self {
            julian_day_ut: round_to(i.jd_ut, JD_DECIMALS),
            utc: i.utc,
            timezone_offset: i.utc_offset_hours,
            dst_active: i.dst_active,
            offset_source: i.source.name(),
        }
    }
}

// ---------------------------------------------------------------------------
// Birth chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetDto {
    pub name: &'static str,
    pub graha: &'static str,
    pub longitude: f64,
    /// Sidereal longitude plus ayanamsha.
    pub longitude_tropical: f64,
    pub latitude: f64,
    pub speed: f64,
    pub retrograde: bool,
    pub sign: &'static str,
    pub sign_index: u8,
    pub degrees_in_sign: f64,
    pub house: u8,
    pub nakshatra: &'static str,
    pub nakshatra_lord: &'static str,
    pub nakshatra_pada: u8,
}

impl From<&GrahaPlacement> for PlanetDto {
    fn from(p: &GrahaPlacement) -> Self {
        Self {
            name: p.graha.english_name(),
            graha: p.graha.name(),
            longitude: lon(p.sidereal_longitude_deg),
            longitude_tropical: lon(p.tropical_longitude_deg),
            latitude: lon(p.latitude_deg),
            speed: lon(p.speed_deg_per_day),
            retrograde: p.retrograde,
            sign: p.rashi.rashi.name(),
            sign_index: p.rashi.rashi_index,
            degrees_in_sign: deg(p.rashi.degrees_in_rashi),
            house: p.house,
            nakshatra: p.nakshatra.nakshatra.name(),
            nakshatra_lord: p.nakshatra.lord.english_name(),
            nakshatra_pada: p.nakshatra.pada,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseDto {
    pub number: u8,
    pub sign: &'static str,
    pub start_longitude: f64,
    pub lord: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthChartDto {
    pub input: InputDto,
    pub instant: InstantDto,
    pub ayanamsha: f64,
    pub house_system: &'static str,
    pub ascendant: f64,
    pub ascendant_tropical: f64,
    pub ascendant_sign: &'static str,
    pub ascendant_sign_index: u8,
    pub ascendant_degrees: f64,
    pub houses: Vec<HouseDto>,
    /// Sun through Saturn, then Rahu and Ketu.
    pub planets: Vec<PlanetDto>,
    pub moon_nakshatra: &'static str,
    pub moon_nakshatra_lord: &'static str,
    pub moon_nakshatra_pada: u8,
}

impl From<&BirthChart> for BirthChartDto {
    fn from(c: &BirthChart) -> Self {
        let moon = c.moon();
        Self {
            input: InputDto::from(&c.input),
            instant: InstantDto::from(&c.instant),
            ayanamsha: lon(c.ayanamsha_deg),
            house_system: c.house_system.name(),
            ascendant: lon(c.ascendant.sidereal_deg),
            ascendant_tropical: lon(c.ascendant.tropical_deg),
            ascendant_sign: c.ascendant.rashi.rashi.name(),
            ascendant_sign_index: c.ascendant.rashi.rashi_index,
            ascendant_degrees: deg(c.ascendant.rashi.degrees_in_rashi),
            houses: c
                .houses
                .iter()
                .map(|h| HouseDto {
                    number: h.number,
                    sign: h.rashi.name(),
                    start_longitude: lon(h.start_longitude_deg),
                    lord: h.lord.english_name(),
                })
                .collect(),
            planets: c.grahas.iter().map(PlanetDto::from).collect(),
            moon_nakshatra: moon.nakshatra.nakshatra.name(),
            moon_nakshatra_lord: moon.nakshatra.lord.english_name(),
            moon_nakshatra_pada: moon.nakshatra.pada,
        }
    }
}

// ---------------------------------------------------------------------------
// Dasha
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaPeriodDto {
    pub lord: &'static str,
    pub level: &'static str,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub start_jd: f64,
    pub end_jd: f64,
    pub years: f64,
    /// One decimal for antardashas, two otherwise.
    pub days: f64,
}

impl TryFrom<&DashaPeriod> for DashaPeriodDto {
    type Error = KundliError;

    fn try_from(p: &DashaPeriod) -> Result<Self, Self::Error> {
        let day_decimals = match p.level {
            DashaLevel::Antardasha => ANTARDASHA_DAYS_DECIMALS,
            _ => DAYS_DECIMALS,
        };
        Ok(Self {
            lord: p.lord.english_name(),
            level: p.level.name(),
            start: jd_to_utc(p.start_jd)?,
            end: jd_to_utc(p.end_jd)?,
            start_jd: round_to(p.start_jd, JD_DECIMALS),
            end_jd: round_to(p.end_jd, JD_DECIMALS),
            years: round_to(p.duration_years(), YEARS_DECIMALS),
            days: round_to(p.duration_days(), day_decimals),
        })
    }
}

fn period_dto(p: Option<&DashaPeriod>) -> Result<Option<DashaPeriodDto>, KundliError> {
    p.map(DashaPeriodDto::try_from).transpose()
}

/// Periods running at the reference instant; `None` past the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentDashaDto {
    pub mahadasha: Option<DashaPeriodDto>,
    pub antardasha: Option<DashaPeriodDto>,
    pub pratyantardasha: Option<DashaPeriodDto>,
    pub sookshma: Option<DashaPeriodDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaDto {
    pub moon_longitude: f64,
    pub moon_nakshatra: &'static str,
    pub nakshatra_lord: &'static str,
    pub nakshatra_pada: u8,
    pub reference_jd: f64,
    pub mahadashas: Vec<DashaPeriodDto>,
    /// Antardashas of the running mahadasha.
    pub antardashas: Vec<DashaPeriodDto>,
    pub current: CurrentDashaDto,
}

impl DashaDto {
    /// Report at most `limit` mahadashas.
    pub fn from_report(r: &DashaReport, limit: usize) -> Result<Self, KundliError> {
        let mahadashas = r
            .reported_mahadashas(limit)
            .iter()
            .map(DashaPeriodDto::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let antardashas = match r.active.mahadasha() {
            Some(md) => r
                .children(md)
                .iter()
                .map(DashaPeriodDto::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };
        Ok(Self {
            moon_longitude: lon(r.moon_longitude_deg),
            moon_nakshatra: r.moon.nakshatra.name(),
            nakshatra_lord: r.moon.lord.english_name(),
            nakshatra_pada: r.moon.pada,
            reference_jd: round_to(r.reference_jd, JD_DECIMALS),
            mahadashas,
            antardashas,
            current: CurrentDashaDto {
                mahadasha: period_dto(r.active.mahadasha())?,
                antardasha: period_dto(r.active.antardasha())?,
                pratyantardasha: period_dto(r.active.pratyantardasha())?,
                sookshma: period_dto(r.active.sookshma())?,
            },
        })
    }
}

// ---------------------------------------------------------------------------
// Divisional chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionalPlanetDto {
    pub name: &'static str,
    pub longitude: f64,
    pub sign: &'static str,
    pub sign_index: u8,
    pub degrees_in_sign: f64,
    pub house: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivisionalChartDto {
    /// e.g. `D9`.
    pub chart_type: String,
    pub division: u16,
    pub name: &'static str,
    pub scheme: &'static str,
    pub ascendant: f64,
    pub ascendant_sign: &'static str,
    pub ascendant_sign_index: u8,
    /// Sign of each house, house 1 first.
    pub houses: Vec<&'static str>,
    pub planets: Vec<DivisionalPlanetDto>,
}

fn sign_name(info: &RashiInfo) -> &'static str {
    info.rashi.name()
}

impl From<&DivisionalChart> for DivisionalChartDto {
    fn from(d: &DivisionalChart) -> Self {
        Self {
            chart_type: format!("D{}", d.division.factor()),
            division: d.division.factor(),
            name: d.division.name(),
            scheme: d.scheme.name(),
            ascendant: lon(d.ascendant_longitude_deg),
            ascendant_sign: sign_name(&d.ascendant),
            ascendant_sign_index: d.ascendant.rashi_index,
            houses: d
                .house_signs
                .iter()
                .map(|&s| Rashi::from_index(s).name())
                .collect(),
            planets: d
                .placements
                .iter()
                .map(|p| DivisionalPlanetDto {
                    name: p.graha.english_name(),
                    longitude: lon(p.longitude_deg),
                    sign: sign_name(&p.rashi),
                    sign_index: p.rashi.rashi_index,
                    degrees_in_sign: deg(p.rashi.degrees_in_rashi),
                    house: p.house,
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Panchang and muhurat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangDto {
    pub date: NaiveDate,
    pub tithi: &'static str,
    pub tithi_number: u8,
    pub paksha: &'static str,
    pub nakshatra: &'static str,
    pub nakshatra_lord: &'static str,
    pub nakshatra_pada: u8,
    pub yoga: &'static str,
    pub yoga_number: u8,
    pub karana: &'static str,
    pub karana_number: u8,
    pub vara: &'static str,
    pub vara_english: &'static str,
    pub sun_sign: &'static str,
    pub moon_sign: &'static str,
    pub sun_longitude: f64,
    pub moon_longitude: f64,
    /// `HH:MM` local, or `None` when the body does not rise or set.
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    pub moonrise: Option<String>,
    pub rahu_kaal: String,
    pub gulika_kaal: String,
    pub yamaghanda: String,
    pub timezone_offset: f64,
    pub offset_source: &'static str,
}

impl From<&PanchangDay> for PanchangDto {
    fn from(p: &PanchangDay) -> Self {
        Self {
            date: p.date,
            tithi: p.tithi.name,
            tithi_number: p.tithi.number,
            paksha: p.tithi.paksha.name(),
            nakshatra: p.nakshatra.nakshatra.name(),
            nakshatra_lord: p.nakshatra.lord.english_name(),
            nakshatra_pada: p.nakshatra.pada,
            yoga: p.yoga.name,
            yoga_number: p.yoga.number,
            karana: p.karana.karana.name(),
            karana_number: p.karana.number,
            vara: p.vaar.name(),
            vara_english: p.vaar.english_name(),
            sun_sign: p.sun_sign.rashi.name(),
            moon_sign: p.moon_sign.rashi.name(),
            sun_longitude: lon(p.sun_longitude_deg),
            moon_longitude: lon(p.moon_longitude_deg),
            sunrise: format_rise_set(p.sunrise),
            sunset: format_rise_set(p.sunset),
            moonrise: format_rise_set(p.moonrise),
            rahu_kaal: format_window(p.rahu_kaal),
            gulika_kaal: format_window(p.gulika_kaal),
            yamaghanda: format_window(p.yamaghanda),
            timezone_offset: p.reference.utc_offset_hours,
            offset_source: p.reference.source.name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MuhuratWindowDto {
    pub part: u8,
    pub start_time: String,
    pub end_time: String,
    pub quality: &'static str,
    pub description: &'static str,
}

impl From<&MuhuratWindow> for MuhuratWindowDto {
    fn from(w: &MuhuratWindow) -> Self {
        Self {
            part: w.part,
            start_time: format_clock_minutes(w.window.start_min),
            end_time: format_clock_minutes(w.window.end_min),
            quality: w.quality.name(),
            description: w.description,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MuhuratSummaryDto {
    pub total_muhurats: usize,
    pub excellent: u8,
    pub good: u8,
    pub moderate: u8,
    pub poor: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MuhuratDto {
    pub date: NaiveDate,
    pub event_type: &'static str,
    /// `observed` or `default`.
    pub daylight: &'static str,
    pub panchang: PanchangDto,
    pub muhurats: Vec<MuhuratWindowDto>,
    pub best_times: Vec<MuhuratWindowDto>,
    pub summary: MuhuratSummaryDto,
}

impl From<&MuhuratDay> for MuhuratDto {
    fn from(m: &MuhuratDay) -> Self {
        let c = m.score.counts;
        Self {
            date: m.panchang.date,
            event_type: m.event.name(),
            daylight: m.daylight.name(),
            panchang: PanchangDto::from(&m.panchang),
            muhurats: m.score.windows.iter().map(MuhuratWindowDto::from).collect(),
            best_times: m.score.best_times().map(MuhuratWindowDto::from).collect(),
            summary: MuhuratSummaryDto {
                total_muhurats: m.score.windows.len(),
                excellent: c.excellent,
                good: c.good,
                moderate: c.moderate,
                poor: c.poor,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Compatibility
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KootaDto {
    pub name: &'static str,
    pub points: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MangalDoshaDto {
    pub person1: bool,
    pub person2: bool,
    pub compatible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoonDto {
    pub sign: &'static str,
    pub nakshatra: &'static str,
}

impl From<&PartnerSummary> for MoonDto {
    fn from(p: &PartnerSummary) -> Self {
        Self {
            sign: p.moon_rashi.rashi.name(),
            nakshatra: p.moon_nakshatra.nakshatra.name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityDto {
    pub total_points: f64,
    pub max_points: f64,
    pub percentage: f64,
    pub compatibility_level: &'static str,
    pub details: Vec<KootaDto>,
    pub mangal_dosha: MangalDoshaDto,
    pub person1_moon: MoonDto,
    pub person2_moon: MoonDto,
}

impl From<&CompatibilityReport> for CompatibilityDto {
    fn from(r: &CompatibilityReport) -> Self {
        Self {
            total_points: round_to(r.score.total, SCORE_DECIMALS),
            max_points: ASHTAKOOTA_MAX,
            percentage: round_to(r.score.percentage, SCORE_DECIMALS),
            compatibility_level: r.score.level.name(),
            details: r
                .score
                .kootas
                .iter()
                .map(|k| KootaDto {
                    name: k.koota.name(),
                    points: k.points,
                    max: k.koota.max_points(),
                })
                .collect(),
            mangal_dosha: MangalDoshaDto {
                person1: r.first.mangal_dosha,
                person2: r.second.mangal_dosha,
                compatible: r.mangal_dosha_compatible(),
            },
            person1_moon: MoonDto::from(&r.first),
            person2_moon: MoonDto::from(&r.second),
        }
    }
}
