//! Chart and calendar assembly over an ephemeris gateway.
//!
//! This crate provides:
//! - Sidereal birth charts with equal houses and the nine grahas
//! - Vimshottari dasha reports with the active period chain
//! - Divisional charts with remapped ascendant and houses
//! - Daily panchang with rise/set times and kaal windows
//! - Muhurat windows for an event type
//! - Ashtakoota compatibility of two births
//!
//! Positions come from a [`kundli_core::EphemerisGateway`]; local times are
//! pinned to UT by a shared [`kundli_time::TimeResolver`].

pub mod chart;
pub mod dasha;
pub mod divisional;
pub mod error;
pub mod matching;
pub mod muhurat;
pub mod panchang;

pub use chart::{
    Ascendant, BirthChart, CHART_HOUSE_SYSTEM, GrahaPlacement, HouseEntry, birth_chart,
    chart_at_instant, graha_body,
};
pub use dasha::{DashaReport, dasha_for_birth, dasha_from_moon};
pub use divisional::{DivisionalChart, DivisionalPlacement, divisional_chart};
pub use error::SearchError;
pub use matching::{CompatibilityReport, PartnerSummary, compatibility, compatibility_from_charts};
pub use muhurat::{Daylight, MuhuratDay, daylight_window, muhurat_for_date};
pub use panchang::{PanchangDay, RiseSetTime, clock_minutes, panchang_for_date};
