//! Julian day ↔ calendar conversions on the UT time scale.
//!
//! The engine only needs UT day numbers for gateway calls, so conversion goes
//! through the Unix epoch rather than a full calendar algorithm.

use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::TimeError;

/// Julian day of 1970-01-01T00:00:00 UT.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian day (UT) of a naive UTC datetime.
pub fn utc_to_jd(utc: &NaiveDateTime) -> f64 {
    let t = utc.and_utc();
    let secs = t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) * 1e-9;
    UNIX_EPOCH_JD + secs / SECONDS_PER_DAY
}

/// Naive UTC datetime of a Julian day (UT), to the nearest millisecond.
pub fn jd_to_utc(jd_ut: f64) -> Result<NaiveDateTime, TimeError> {
    if !jd_ut.is_finite() {
        return Err(TimeError::UnrepresentableJd(jd_ut));
    }
    let millis = ((jd_ut - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    if millis.abs() > i64::MAX as f64 {
        return Err(TimeError::UnrepresentableJd(jd_ut));
    }
    DateTime::from_timestamp_millis(millis as i64)
        .map(|dt| dt.naive_utc())
        .ok_or(TimeError::UnrepresentableJd(jd_ut))
}

/// Wall-clock datetime at `offset_hours` east of UTC.
pub fn jd_to_local(jd_ut: f64, offset_hours: f64) -> Result<NaiveDateTime, TimeError> {
    jd_to_utc(jd_ut)?
        .checked_add_signed(offset_delta(offset_hours))
        .ok_or(TimeError::UnrepresentableJd(jd_ut))
}

/// Wall-clock time of day at `offset_hours` east of UTC.
pub fn local_clock_time(jd_ut: f64, offset_hours: f64) -> Result<NaiveTime, TimeError> {
    jd_to_local(jd_ut, offset_hours).map(|dt| dt.time())
}

pub(crate) fn offset_delta(offset_hours: f64) -> TimeDelta {
    TimeDelta::seconds((offset_hours * 3600.0).round() as i64)
}
