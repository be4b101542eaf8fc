//! Ashtakoota (8-koota, 36-point) compatibility and Mangal Dosha.
//!
//! Every koota is a fixed formula over the two Moon sign indices and the two
//! Moon nakshatra indices.

/// Maximum total score.
pub const ASHTAKOOTA_MAX: f64 = 36.0;

/// Houses from the ascendant that give Mangal Dosha when Mars occupies them.
pub const MANGAL_DOSHA_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

/// Raw sign distances that earn Bhakoot points.
const BHAKOOT_ALLOWED: [u8; 8] = [0, 1, 3, 4, 5, 7, 9, 11];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Koota {
    Varna,
    Vashya,
    Tara,
    Yoni,
    GrahaMaitri,
    Gana,
    Bhakoot,
    Nadi,
}

pub const ALL_KOOTAS: [Koota; 8] = [
    Koota::Varna,
    Koota::Vashya,
    Koota::Tara,
    Koota::Yoni,
    Koota::GrahaMaitri,
    Koota::Gana,
    Koota::Bhakoot,
    Koota::Nadi,
];

impl Koota {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Varna => "Varna",
            Self::Vashya => "Vashya",
            Self::Tara => "Tara",
            Self::Yoni => "Yoni",
            Self::GrahaMaitri => "Graha Maitri",
            Self::Gana => "Gana",
            Self::Bhakoot => "Bhakoot",
            Self::Nadi => "Nadi",
        }
    }

    /// Maximum points: 1 for Varna up to 8 for Nadi.
    pub const fn max_points(self) -> f64 {
        (self as u8 + 1) as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompatibilityLevel {
    Excellent,
    Good,
    Average,
    BelowAverage,
}

impl CompatibilityLevel {
    pub fn from_total(total: f64) -> Self {
        if total >= 28.0 {
            Self::Excellent
        } else if total >= 20.0 {
            Self::Good
        } else if total >= 14.0 {
            Self::Average
        } else {
            Self::BelowAverage
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::BelowAverage => "Below Average",
        }
    }
}

/// Moon placement of one partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoonPlacement {
    /// 0-11.
    pub sign_index: u8,
    /// 0-26.
    pub nakshatra_index: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KootaScore {
    pub koota: Koota,
    pub points: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AshtakootaScore {
    pub kootas: [KootaScore; 8],
    pub total: f64,
    /// total / 36 * 100.
    pub percentage: f64,
    pub level: CompatibilityLevel,
}

impl AshtakootaScore {
    pub fn points(&self, koota: Koota) -> f64 {
        self.kootas[koota as usize].points
    }
}

fn koota_points(koota: Koota, a: MoonPlacement, b: MoonPlacement) -> f64 {
    let ds = a.sign_index.abs_diff(b.sign_index);
    let dn = a.nakshatra_index.abs_diff(b.nakshatra_index);
    match koota {
        Koota::Varna => {
            if matches!(ds % 4, 0 | 1) {
                1.0
            } else {
                0.0
            }
        }
        Koota::Vashya => {
            if matches!(ds % 6, 0 | 1 | 5) {
                2.0
            } else {
                0.0
            }
        }
        Koota::Tara => {
            if (dn % 9) % 2 == 0 {
                3.0
            } else {
                1.5
            }
        }
        Koota::Yoni => {
            if (a.sign_index + b.sign_index) % 2 == 0 {
                4.0
            } else {
                2.0
            }
        }
        Koota::GrahaMaitri => {
            if ds % 3 == 0 {
                5.0
            } else {
                2.5
            }
        }
        Koota::Gana => {
            if dn % 9 < 3 {
                6.0
            } else {
                3.0
            }
        }
        Koota::Bhakoot => {
            if BHAKOOT_ALLOWED.contains(&ds) {
                7.0
            } else {
                0.0
            }
        }
        Koota::Nadi => {
            if a.nakshatra_index % 3 != b.nakshatra_index % 3 {
                8.0
            } else {
                0.0
            }
        }
    }
}

pub fn ashtakoota(a: MoonPlacement, b: MoonPlacement) -> AshtakootaScore {
    let kootas = ALL_KOOTAS.map(|koota| KootaScore {
        koota,
        points: koota_points(koota, a, b),
    });
    let total: f64 = kootas.iter().map(|k| k.points).sum();
    AshtakootaScore {
        kootas,
        total,
        percentage: total / ASHTAKOOTA_MAX * 100.0,
        level: CompatibilityLevel::from_total(total),
    }
}

/// Mars in one of [`MANGAL_DOSHA_HOUSES`].
pub fn has_mangal_dosha(mars_house: u8) -> bool {
    MANGAL_DOSHA_HOUSES.contains(&mars_house)
}
