//! Vimshottari dasha: the 120-year, 9-graha planetary period system.
//!
//! Pure math only. The birth Moon longitude and birth JD come from the
//! caller; nothing here touches an ephemeris.

pub mod balance;
pub mod query;
pub mod subperiod;
pub mod timeline;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, nakshatra_birth_balance};
pub use query::{ActiveDashas, active_dashas, find_active_period};
pub use subperiod::{build_cyclic_sequence, children_of, proportional_children, snap_last_child_end};
pub use timeline::{MAX_CYCLES, MIN_CYCLES, vimshottari_mahadashas};
pub use types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod, MAX_DASHA_LEVEL};
pub use vimshottari::{
    VIMSHOTTARI_GRAHAS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, VimshottariConfig,
    vimshottari_config,
};
