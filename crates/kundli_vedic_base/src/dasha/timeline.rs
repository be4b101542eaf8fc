//! Mahadasha timeline from the birth Moon.

use crate::error::VedicError;

use super::balance::nakshatra_birth_balance;
use super::types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};
use super::vimshottari::VimshottariConfig;

/// Fewest full 120-year cycles generated after the birth period.
pub const MIN_CYCLES: u32 = 2;

/// Most full cycles a timeline may hold (1200 years).
pub const MAX_CYCLES: u32 = 10;

/// Mahadashas from birth: the partial birth period followed by `cycles`
/// full rotations of the sequence (at least [`MIN_CYCLES`], at most
/// [`MAX_CYCLES`]).
pub fn vimshottari_mahadashas(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    config: &VimshottariConfig,
    cycles: u32,
) -> Result<Vec<DashaPeriod>, VedicError> {
    if !birth_jd.is_finite() {
        return Err(VedicError::NonFinite("birth JD"));
    }
    if !moon_sidereal_lon.is_finite() {
        return Err(VedicError::NonFinite("Moon longitude"));
    }
    if cycles > MAX_CYCLES {
        return Err(VedicError::TooManyCycles {
            got: cycles,
            max: MAX_CYCLES,
        });
    }

    let balance = nakshatra_birth_balance(moon_sidereal_lon, config);
    let n = config.grahas.len();
    let start_pos = config.position(balance.lord).unwrap_or(0);
    let count = 1 + cycles.max(MIN_CYCLES) as usize * n;

    let mut periods = Vec::with_capacity(count);
    let mut cursor = birth_jd;
    for i in 0..count {
        let pos = (start_pos + i) % n;
        let years = if i == 0 {
            balance.balance_years
        } else {
            config.years[pos]
        };
        let end = cursor + years * DAYS_PER_YEAR;
        periods.push(DashaPeriod {
            lord: config.grahas[pos],
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            order: (i as u16) + 1,
        });
        cursor = end;
    }
    Ok(periods)
}
