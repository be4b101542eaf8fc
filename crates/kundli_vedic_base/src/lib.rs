//! Pure Vedic calculations over sidereal longitudes.
//!
//! This crate provides:
//! - Graha, rashi and nakshatra classification
//! - Vimshottari dasha timelines and 4-level active-period lookup
//! - Divisional charts D1..D60 under a linear or Parashari scheme
//! - Panchang elements, weekday kaal tables and muhurat scoring
//! - Ashtakoota compatibility and Mangal Dosha
//!
//! Nothing here touches an ephemeris or a clock; longitudes and Julian
//! days come from the caller.

pub mod ashtakoota;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod muhurat;
pub mod nakshatra;
pub mod panchang;
pub mod rashi;
pub mod util;
pub mod varga;

pub use ashtakoota::{
    ALL_KOOTAS, ASHTAKOOTA_MAX, AshtakootaScore, CompatibilityLevel, Koota, KootaScore,
    MANGAL_DOSHA_HOUSES, MoonPlacement, ashtakoota, has_mangal_dosha,
};
pub use dasha::{
    ActiveDashas, BirthBalance, DAYS_PER_YEAR, DashaLevel, DashaPeriod, MAX_DASHA_LEVEL,
    MAX_CYCLES, MIN_CYCLES, VimshottariConfig, active_dashas, children_of, find_active_period,
    nakshatra_birth_balance, vimshottari_config, vimshottari_mahadashas,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use muhurat::{
    EventType, MUHURAT_PARTS, MuhuratScore, MuhuratWindow, Quality, QualityCounts,
    score_muhurat,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use panchang::{
    ALL_VAARS, ClockWindow, Kaal, Karana, KaranaInfo, Paksha, TithiInfo, Vaar, YogaInfo,
    kaal_window, karana_from_longitudes, tithi_from_longitudes, yoga_from_longitudes,
};
pub use rashi::{ALL_RASHIS, Rashi, RashiInfo, equal_house_signs, house_of_sign, rashi_from_longitude};
pub use util::{normalize_360, sign_index};
pub use varga::{
    ALL_DIVISIONS, Division, VargaRule, VargaScheme, varga_longitude, varga_rashi_info,
    varga_sign,
};
