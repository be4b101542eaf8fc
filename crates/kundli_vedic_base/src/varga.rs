//! Divisional charts (vargas).
//!
//! A sign of 30 degrees is cut into N equal parts and each part is mapped to
//! a target sign. Two schemes are available:
//!
//! - [`VargaScheme::Linear`]: Navamsa and Hora use their own rules, every
//!   other division uses `(sign + part * step) mod 12` with
//!   `step = 12 / N` when N divides 12, else 1. This is an approximation of
//!   the classical tables and is the default.
//! - [`VargaScheme::Parashari`]: per-division classical starting signs.
//!
//! Dispatch goes through [`Division::rule`], an explicit division → rule table.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::rashi::{RashiInfo, rashi_from_longitude};
use crate::util::{normalize_360, sign_index};

/// Supported divisional charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Division {
    D1,
    D2,
    D3,
    D4,
    D7,
    D9,
    D10,
    D12,
    D16,
    D20,
    D24,
    D27,
    D30,
    D40,
    D45,
    D60,
}

/// The 16 supported divisions in ascending order.
pub const ALL_DIVISIONS: [Division; 16] = [
    Division::D1,
    Division::D2,
    Division::D3,
    Division::D4,
    Division::D7,
    Division::D9,
    Division::D10,
    Division::D12,
    Division::D16,
    Division::D20,
    Division::D24,
    Division::D27,
    Division::D30,
    Division::D40,
    Division::D45,
    Division::D60,
];

/// How a division maps part indices to signs under the linear scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VargaRule {
    /// Natal sign unchanged.
    Identity,
    /// `(sign * 9 + part) mod 12`.
    Navamsa,
    /// Leo / Cancer halves, order set by sign parity.
    Hora,
    /// `(sign + part * step) mod 12`.
    Linear { step: u8 },
}

/// Sign-assignment scheme for divisions other than D1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VargaScheme {
    #[default]
    Linear,
    Parashari,
}

impl VargaScheme {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Parashari => "parashari",
        }
    }
}

impl Division {
    pub const fn factor(self) -> u16 {
        match self {
            Self::D1 => 1,
            Self::D2 => 2,
            Self::D3 => 3,
            Self::D4 => 4,
            Self::D7 => 7,
            Self::D9 => 9,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D16 => 16,
            Self::D20 => 20,
            Self::D24 => 24,
            Self::D27 => 27,
            Self::D30 => 30,
            Self::D40 => 40,
            Self::D45 => 45,
            Self::D60 => 60,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::D1 => "Rashi",
            Self::D2 => "Hora",
            Self::D3 => "Drekkana",
            Self::D4 => "Chaturthamsa",
            Self::D7 => "Saptamsa",
            Self::D9 => "Navamsa",
            Self::D10 => "Dasamsa",
            Self::D12 => "Dwadasamsa",
            Self::D16 => "Shodasamsa",
            Self::D20 => "Vimsamsa",
            Self::D24 => "Chaturvimsamsa",
            Self::D27 => "Saptavimsamsa",
            Self::D30 => "Trimsamsa",
            Self::D40 => "Khavedamsa",
            Self::D45 => "Akshavedamsa",
            Self::D60 => "Shashtiamsa",
        }
    }

    pub fn from_factor(n: u16) -> Result<Self, VedicError> {
        ALL_DIVISIONS
            .iter()
            .copied()
            .find(|d| d.factor() == n)
            .ok_or(VedicError::UnsupportedDivision(n))
    }

    /// Linear-scheme rule for this division.
    pub const fn rule(self) -> VargaRule {
        match self {
            Self::D1 => VargaRule::Identity,
            Self::D2 => VargaRule::Hora,
            Self::D9 => VargaRule::Navamsa,
            Self::D3 => VargaRule::Linear { step: 4 },
            Self::D4 => VargaRule::Linear { step: 3 },
            Self::D7
            | Self::D10
            | Self::D12
            | Self::D16
            | Self::D20
            | Self::D24
            | Self::D27
            | Self::D30
            | Self::D40
            | Self::D45
            | Self::D60 => VargaRule::Linear { step: 1 },
        }
    }

    /// Width of one part in degrees.
    pub fn part_size(self) -> f64 {
        30.0 / f64::from(self.factor())
    }
}

/// Step of the generic linear rule: 12/N when N divides 12, else 1.
pub const fn linear_step(n: u16) -> u8 {
    if n != 0 && 12 % n == 0 {
        (12 / n) as u8
    } else {
        1
    }
}

/// Natal sign and 0-based part index of a longitude within `division`.
fn split(lon: f64, division: Division) -> (u8, u16, f64) {
    let sign = sign_index(lon);
    let in_sign = lon - f64::from(sign) * 30.0;
    let part_size = division.part_size();
    let part = ((in_sign / part_size).floor() as u16).min(division.factor() - 1);
    (sign, part, in_sign - f64::from(part) * part_size)
}

fn linear_target(rule: VargaRule, sign: u8, part: u16) -> u8 {
    let sign16 = u16::from(sign);
    match rule {
        VargaRule::Identity => sign,
        VargaRule::Navamsa => ((sign16 * 9 + part) % 12) as u8,
        VargaRule::Hora => {
            // 0-based even index = odd sign (Aries, Gemini, ...)
            let odd_sign = sign % 2 == 0;
            match (odd_sign, part) {
                (true, 0) | (false, 1) => 4,
                _ => 3,
            }
        }
        VargaRule::Linear { step } => ((sign16 + part * u16::from(step)) % 12) as u8,
    }
}

fn parashari_target(division: Division, sign: u8, part: u16) -> u8 {
    let sign16 = u16::from(sign);
    let odd_sign = sign % 2 == 0;
    let start: u16 = match division {
        Division::D1 => return sign,
        Division::D2 => return if odd_sign == (part == 0) { 4 } else { 3 },
        Division::D30 => return trimsamsa_sign(odd_sign, part),
        Division::D3 => return ((sign16 + part * 4) % 12) as u8,
        Division::D4 => return ((sign16 + part * 3) % 12) as u8,
        Division::D12 | Division::D60 => sign16,
        Division::D7 => even_offset_start(sign16, odd_sign, 6),
        Division::D10 => even_offset_start(sign16, odd_sign, 8),
        Division::D24 => {
            if odd_sign {
                4
            } else {
                3
            }
        }
        Division::D40 => {
            if odd_sign {
                0
            } else {
                6
            }
        }
        Division::D9 => element_start(sign, [0, 9, 6, 3]),
        Division::D27 => element_start(sign, [0, 3, 6, 9]),
        Division::D16 | Division::D45 => modality_start(sign, [0, 4, 8]),
        Division::D20 => modality_start(sign, [0, 8, 4]),
    };
    ((start + part) % 12) as u8
}

fn even_offset_start(sign: u16, odd_sign: bool, even_offset: u16) -> u16 {
    if odd_sign { sign } else { (sign + even_offset) % 12 }
}

/// Start sign by element of `sign`: fire, earth, air, water.
fn element_start(sign: u8, starts: [u16; 4]) -> u16 {
    starts[(sign % 4) as usize]
}

/// Start sign by modality of `sign`: movable, fixed, dual.
fn modality_start(sign: u8, starts: [u16; 3]) -> u16 {
    starts[(sign % 3) as usize]
}

/// Trimsamsa: unequal classical portions over the 30 one-degree parts.
///
/// Odd signs: Mars 5, Saturn 5, Jupiter 8, Mercury 7, Venus 5.
/// Even signs: Venus 5, Mercury 7, Jupiter 8, Saturn 5, Mars 5.
fn trimsamsa_sign(odd_sign: bool, degree: u16) -> u8 {
    if odd_sign {
        match degree {
            0..=4 => 0,   // Mesha (Mars)
            5..=9 => 10,  // Kumbha (Saturn)
            10..=17 => 8, // Dhanu (Jupiter)
            18..=24 => 2, // Mithuna (Mercury)
            _ => 6,       // Tula (Venus)
        }
    } else {
        match degree {
            0..=4 => 1,    // Vrishabha (Venus)
            5..=11 => 5,   // Kanya (Mercury)
            12..=19 => 11, // Meena (Jupiter)
            20..=24 => 9,  // Makara (Saturn)
            _ => 7,        // Vrischika (Mars)
        }
    }
}

/// Target sign index of `sidereal_lon` in `division`.
pub fn varga_sign(sidereal_lon: f64, division: Division, scheme: VargaScheme) -> u8 {
    let lon = normalize_360(sidereal_lon);
    let (sign, part, _) = split(lon, division);
    match scheme {
        VargaScheme::Linear => linear_target(division.rule(), sign, part),
        VargaScheme::Parashari => parashari_target(division, sign, part),
    }
}

/// Divisional longitude: target sign plus the position within the part
/// scaled by N back to a 30-degree sign.
pub fn varga_longitude(sidereal_lon: f64, division: Division, scheme: VargaScheme) -> f64 {
    let lon = normalize_360(sidereal_lon);
    if division == Division::D1 {
        return lon;
    }
    let (_, _, in_part) = split(lon, division);
    let target = varga_sign(lon, division, scheme);
    // keep rounding drift inside the target sign
    let in_sign = (in_part * f64::from(division.factor())).clamp(0.0, 30.0 - 1e-9);
    f64::from(target) * 30.0 + in_sign
}

pub fn varga_rashi_info(sidereal_lon: f64, division: Division, scheme: VargaScheme) -> RashiInfo {
    rashi_from_longitude(varga_longitude(sidereal_lon, division, scheme))
}

#[cfg(test)]
mod tests {
    use super::*;

    const L: VargaScheme = VargaScheme::Linear;
    const P: VargaScheme = VargaScheme::Parashari;

    #[test]
    fn d1_identity() {
        for lon in [0.0, 13.7, 145.25, 359.9] {
            assert_eq!(varga_longitude(lon, Division::D1, L), lon);
            assert_eq!(varga_longitude(lon, Division::D1, P), lon);
        }
    }

    #[test]
    fn navamsa_formula() {
        // Taurus (1), part 4 (13.33..16.67): (9 + 4) % 12 = 1
        assert_eq!(varga_sign(30.0 + 14.0, Division::D9, L), 1);
        // Aries first part -> Aries
        assert_eq!(varga_sign(1.0, Division::D9, L), 0);
        // Cancer (3), part 0: 27 % 12 = 3
        assert_eq!(varga_sign(91.0, Division::D9, L), 3);
    }

    #[test]
    fn hora_alternates_by_parity() {
        // Aries (index 0): first half Leo, second half Cancer
        assert_eq!(varga_sign(5.0, Division::D2, L), 4);
        assert_eq!(varga_sign(20.0, Division::D2, L), 3);
        // Taurus (index 1): first half Cancer, second half Leo
        assert_eq!(varga_sign(35.0, Division::D2, L), 3);
        assert_eq!(varga_sign(50.0, Division::D2, L), 4);
    }

    #[test]
    fn generic_step_when_dividing_twelve() {
        assert_eq!(linear_step(3), 4);
        assert_eq!(linear_step(4), 3);
        assert_eq!(linear_step(12), 1);
        assert_eq!(linear_step(7), 1);
        assert_eq!(linear_step(60), 1);
        // D3 second part of Aries -> Leo
        assert_eq!(varga_sign(12.0, Division::D3, L), 4);
        // D4 third part of Aries -> Libra
        assert_eq!(varga_sign(16.0, Division::D4, L), 6);
    }

    #[test]
    fn rule_steps_agree_with_linear_step() {
        for d in ALL_DIVISIONS {
            if let VargaRule::Linear { step } = d.rule() {
                assert_eq!(step, linear_step(d.factor()), "{:?}", d);
            }
        }
    }

    #[test]
    fn longitude_scales_within_part() {
        // Aries 2.0 deg, D9 part 0 (0..3.333), in_part 2.0 -> 18.0 deg of Aries
        let lon = varga_longitude(2.0, Division::D9, L);
        assert!((lon - 18.0).abs() < 1e-9);
    }

    #[test]
    fn unsupported_factor() {
        assert_eq!(
            Division::from_factor(5),
            Err(VedicError::UnsupportedDivision(5))
        );
        assert_eq!(Division::from_factor(60), Ok(Division::D60));
    }

    #[test]
    fn parashari_navamsa_matches_linear() {
        // The element-start navamsa and the (sign*9 + part) rule coincide.
        for i in 0..360 {
            let lon = i as f64 + 0.5;
            assert_eq!(
                varga_sign(lon, Division::D9, P),
                varga_sign(lon, Division::D9, L),
                "lon {lon}"
            );
        }
    }

    #[test]
    fn parashari_d10_even_sign_starts_ninth() {
        // Taurus (even sign) first dasamsa -> Capricorn
        assert_eq!(varga_sign(31.0, Division::D10, P), 9);
        // Aries first dasamsa -> Aries
        assert_eq!(varga_sign(1.0, Division::D10, P), 0);
    }

    #[test]
    fn parashari_shodasamsa_by_modality() {
        // Leo is fixed: first part -> Leo
        assert_eq!(varga_sign(120.5, Division::D16, P), 4);
        // Pisces is dual: first part -> Sagittarius
        assert_eq!(varga_sign(330.5, Division::D16, P), 8);
    }

    #[test]
    fn parashari_trimsamsa_portions() {
        assert_eq!(varga_sign(3.0, Division::D30, P), 0);
        assert_eq!(varga_sign(12.0, Division::D30, P), 8);
        assert_eq!(varga_sign(30.0 + 3.0, Division::D30, P), 1);
        assert_eq!(varga_sign(30.0 + 28.0, Division::D30, P), 7);
    }

    #[test]
    fn all_outputs_in_range() {
        for d in ALL_DIVISIONS {
            for scheme in [L, P] {
                for i in 0..720 {
                    let lon = i as f64 * 0.5;
                    let v = varga_longitude(lon, d, scheme);
                    assert!((0.0..360.0).contains(&v), "{d:?} {scheme:?} {lon} -> {v}");
                }
            }
        }
    }
}
