//! Birth balance: how much of the first mahadasha remains at birth.

use crate::graha::Graha;
use crate::nakshatra::nakshatra_from_longitude;

use super::types::DAYS_PER_YEAR;
use super::vimshottari::VimshottariConfig;

/// Moon-derived starting point of the timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthBalance {
    /// 0-based nakshatra of the birth Moon.
    pub nakshatra_index: u8,
    /// Lord of that nakshatra; rules the first mahadasha.
    pub lord: Graha,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    /// Remaining years of the first mahadasha.
    pub balance_years: f64,
}

impl BirthBalance {
    pub fn balance_days(&self) -> f64 {
        self.balance_years * DAYS_PER_YEAR
    }
}

/// Remaining length of a period of `full_years` once `elapsed_fraction` has passed.
pub fn remaining_years(full_years: f64, elapsed_fraction: f64) -> f64 {
    full_years * (1.0 - elapsed_fraction)
}

pub fn nakshatra_birth_balance(moon_sidereal_lon: f64, config: &VimshottariConfig) -> BirthBalance {
    let nak = nakshatra_from_longitude(moon_sidereal_lon);
    let elapsed_fraction = nak.elapsed_fraction();
    BirthBalance {
        nakshatra_index: nak.nakshatra_index,
        lord: nak.lord,
        elapsed_fraction,
        balance_years: remaining_years(config.years_of(nak.lord), elapsed_fraction),
    }
}
