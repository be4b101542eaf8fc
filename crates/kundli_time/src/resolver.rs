//! Local birth time → UT instant, with an observable fallback chain.
//!
//! Resolution tiers, first success wins:
//! 1. IANA timezone database (exact offset, historical DST)
//! 2. static table of well-known identifiers (standard offset, no DST)
//! 3. longitude estimate, `round(lon / 15)` hours (no DST)
//!
//! The tier used is carried in [`ResolvedInstant::source`]. Falling back never
//! fails; only a local time at the edge of the calendar range is rejected.

use std::collections::HashMap;

use chrono::{LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};
use chrono_tz::{OffsetComponents, Tz};
use parking_lot::RwLock;
use tracing::warn;

use crate::error::TimeError;
use crate::julian::{offset_delta, utc_to_jd};

/// Which tier produced the UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OffsetSource {
    TimezoneDatabase,
    StaticTable,
    LongitudeEstimate,
}

impl OffsetSource {
    pub const fn name(self) -> &'static str {
        match self {
            Self::TimezoneDatabase => "timezone_database",
            Self::StaticTable => "static_table",
            Self::LongitudeEstimate => "longitude_estimate",
        }
    }

    /// True for the two fallback tiers.
    pub const fn is_degraded(self) -> bool {
        !matches!(self, Self::TimezoneDatabase)
    }
}

/// A local instant pinned to UT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedInstant {
    /// Julian day, UT.
    pub jd_ut: f64,
    pub utc: NaiveDateTime,
    /// Hours east of UTC, DST included.
    pub utc_offset_hours: f64,
    pub dst_active: bool,
    pub source: OffsetSource,
}

/// Standard (non-DST) offsets for identifiers the database may not know.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticOffsetTable {
    offsets: HashMap<String, f64>,
}

impl StaticOffsetTable {
    pub fn from_map(offsets: HashMap<String, f64>) -> Self {
        Self { offsets }
    }

    pub fn get(&self, tz_id: &str) -> Option<f64> {
        self.offsets.get(tz_id).copied()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Built-in well-known identifiers and their standard offsets in hours.
pub const BUILTIN_OFFSETS: [(&str, f64); 15] = [
    ("Asia/Kolkata", 5.5),
    ("IST", 5.5),
    ("Asia/Mumbai", 5.5),
    ("Asia/Delhi", 5.5),
    ("Asia/Calcutta", 5.5),
    ("UTC", 0.0),
    ("GMT", 0.0),
    ("America/New_York", -5.0),
    ("America/Los_Angeles", -8.0),
    ("Europe/London", 0.0),
    ("Europe/Paris", 1.0),
    ("Asia/Tokyo", 9.0),
    ("Asia/Shanghai", 8.0),
    ("Australia/Sydney", 10.0),
    ("Asia/Dubai", 4.0),
];

impl Default for StaticOffsetTable {
    fn default() -> Self {
        Self::from_map(
            BUILTIN_OFFSETS
                .iter()
                .map(|&(k, v)| (k.to_string(), v))
                .collect(),
        )
    }
}

/// Timezone resolver with a write-once cache of parsed database handles.
///
/// Only identifiers the database knows are cached, so the cache is bounded
/// by the size of the IANA database. Safe to share across threads; racing
/// first lookups of the same identifier parse the same value.
#[derive(Debug, Default)]
pub struct TimeResolver {
    handles: RwLock<HashMap<String, Tz>>,
    static_table: StaticOffsetTable,
}

impl TimeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_static_table(static_table: StaticOffsetTable) -> Self {
        Self {
            handles: RwLock::new(HashMap::new()),
            static_table,
        }
    }

    /// Resolve a local wall-clock time at `tz_id` (or `longitude_deg` as last resort).
    ///
    /// Fails only with [`TimeError::InvalidDate`] when `local` is too close to
    /// the calendar limits to shift by the offset.
    pub fn resolve(
        &self,
        local: NaiveDateTime,
        tz_id: &str,
        longitude_deg: f64,
    ) -> Result<ResolvedInstant, TimeError> {
        // ── Tier 1: timezone database ──
        if let Some(tz) = self.database_handle(tz_id) {
            let (offset_secs, dst_active) = database_offset(tz, local)?;
            return finish(
                local,
                offset_secs as f64 / 3600.0,
                dst_active,
                OffsetSource::TimezoneDatabase,
            );
        }

        // ── Tier 2: static table ──
        if let Some(hours) = self.static_table.get(tz_id) {
            warn!(
                tz_id,
                offset_hours = hours,
                "timezone not in database, using static standard offset"
            );
            return finish(local, hours, false, OffsetSource::StaticTable);
        }

        // ── Tier 3: longitude ──
        let hours = longitude_offset_hours(longitude_deg);
        warn!(
            tz_id,
            longitude_deg,
            offset_hours = hours,
            "unknown timezone, estimating offset from longitude"
        );
        finish(local, hours, false, OffsetSource::LongitudeEstimate)
    }

    /// Number of database identifiers with a cached handle.
    pub fn cached_identifiers(&self) -> usize {
        self.handles.read().len()
    }

    fn database_handle(&self, tz_id: &str) -> Option<Tz> {
        if let Some(tz) = self.handles.read().get(tz_id) {
            return Some(*tz);
        }
        let tz = tz_id.parse::<Tz>().ok()?;
        Some(*self.handles.write().entry(tz_id.to_string()).or_insert(tz))
    }
}

/// `round(lon / 15)` with ties to even.
pub fn longitude_offset_hours(longitude_deg: f64) -> f64 {
    (longitude_deg / 15.0).round_ties_even()
}

/// Offset in seconds and DST flag for `local` in `tz`.
///
/// Ambiguous times (fall back) take the earlier instant. Nonexistent times
/// (spring forward gap) use the offset in force before the transition.
fn database_offset(tz: Tz, local: NaiveDateTime) -> Result<(i32, bool), TimeError> {
    let offset = match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => *dt.offset(),
        LocalResult::Ambiguous(earlier, _) => *earlier.offset(),
        LocalResult::None => {
            let before = local
                .checked_sub_signed(TimeDelta::hours(24))
                .ok_or_else(|| out_of_range(local))?;
            tz.offset_from_utc_datetime(&before)
        }
    };
    let dst_active = offset.dst_offset() != TimeDelta::zero();
    Ok((offset.fix().local_minus_utc(), dst_active))
}

fn out_of_range(local: NaiveDateTime) -> TimeError {
    TimeError::InvalidDate(local.to_string())
}

fn finish(
    local: NaiveDateTime,
    offset_hours: f64,
    dst_active: bool,
    source: OffsetSource,
) -> Result<ResolvedInstant, TimeError> {
    let utc = local
        .checked_sub_signed(offset_delta(offset_hours))
        .ok_or_else(|| out_of_range(local))?;
    Ok(ResolvedInstant {
        jd_ut: utc_to_jd(&utc),
        utc,
        utc_offset_hours: offset_hours,
        dst_active,
        source,
    })
}
