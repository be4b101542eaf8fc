//! Vimshottari sequence and weights.

use crate::graha::Graha;

use super::types::DAYS_PER_YEAR;

/// Vimshottari graha sequence, starting at Ketu.
pub const VIMSHOTTARI_GRAHAS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Full mahadasha lengths in years, parallel to [`VIMSHOTTARI_GRAHAS`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Immutable Vimshottari configuration, shared by reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VimshottariConfig {
    pub grahas: &'static [Graha; 9],
    pub years: &'static [f64; 9],
    pub total_years: f64,
}

static VIMSHOTTARI: VimshottariConfig = VimshottariConfig {
    grahas: &VIMSHOTTARI_GRAHAS,
    years: &VIMSHOTTARI_YEARS,
    total_years: VIMSHOTTARI_TOTAL_YEARS,
};

pub fn vimshottari_config() -> &'static VimshottariConfig {
    &VIMSHOTTARI
}

impl VimshottariConfig {
    /// Position of `graha` in the sequence.
    pub fn position(&self, graha: Graha) -> Option<usize> {
        self.grahas.iter().position(|&g| g == graha)
    }

    /// Full-cycle years of `graha`. Zero for grahas outside the sequence.
    pub fn years_of(&self, graha: Graha) -> f64 {
        self.position(graha).map_or(0.0, |i| self.years[i])
    }

    /// `(graha, full period in days)` pairs in sequence order.
    pub fn entity_sequence(&self) -> [(Graha, f64); 9] {
        let mut seq = [(Graha::Ketu, 0.0); 9];
        for (i, slot) in seq.iter_mut().enumerate() {
            *slot = (self.grahas[i], self.years[i] * DAYS_PER_YEAR);
        }
        seq
    }

    pub fn total_days(&self) -> f64 {
        self.total_years * DAYS_PER_YEAR
    }
}
