//! Birth-time handling for the kundli engine.
//!
//! This crate provides:
//! - `BirthInput` parsing from plain scalars
//! - `TimeResolver`: local time + timezone identifier → UT instant, with an
//!   observable database → static table → longitude fallback chain
//! - Julian day ↔ UTC and local clock conversions

pub mod error;
pub mod input;
pub mod julian;
pub mod resolver;

pub use error::TimeError;
pub use input::{BirthInput, parse_clock_time, parse_date, validate_location};
pub use julian::{
    SECONDS_PER_DAY, UNIX_EPOCH_JD, jd_to_local, jd_to_utc, local_clock_time, utc_to_jd,
};
pub use resolver::{
    BUILTIN_OFFSETS, OffsetSource, ResolvedInstant, StaticOffsetTable, TimeResolver,
    longitude_offset_hours,
};
