//! Muhurat scoring: eight equal daylight windows graded for an event type.

use serde::{Deserialize, Serialize};

use crate::nakshatra::Nakshatra;
use crate::panchang::ClockWindow;

/// Number of daylight windows.
pub const MUHURAT_PARTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    #[default]
    General,
    Marriage,
    Business,
    Travel,
    HouseWarming,
}

const GENERAL_LUCKY: [Nakshatra; 11] = [
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Pushya,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Swati,
    Nakshatra::Anuradha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

const BUSINESS_LUCKY: [Nakshatra; 6] = [
    Nakshatra::Pushya,
    Nakshatra::Hasta,
    Nakshatra::Swati,
    Nakshatra::Anuradha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
];

const TRAVEL_LUCKY: [Nakshatra; 6] = [
    Nakshatra::Mrigashira,
    Nakshatra::Pushya,
    Nakshatra::Hasta,
    Nakshatra::Swati,
    Nakshatra::Anuradha,
    Nakshatra::Shravana,
];

const HOUSE_WARMING_LUCKY: [Nakshatra; 8] = [
    Nakshatra::Rohini,
    Nakshatra::Pushya,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Swati,
    Nakshatra::Anuradha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
];

impl EventType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Marriage => "marriage",
            Self::Business => "business",
            Self::Travel => "travel",
            Self::HouseWarming => "house_warming",
        }
    }

    /// Parse an event name; unknown names fall back to `General`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "marriage" => Self::Marriage,
            "business" => Self::Business,
            "travel" => Self::Travel,
            "house_warming" | "housewarming" => Self::HouseWarming,
            _ => Self::General,
        }
    }

    pub const fn lucky_nakshatras(self) -> &'static [Nakshatra] {
        match self {
            Self::General | Self::Marriage => &GENERAL_LUCKY,
            Self::Business => &BUSINESS_LUCKY,
            Self::Travel => &TRAVEL_LUCKY,
            Self::HouseWarming => &HOUSE_WARMING_LUCKY,
        }
    }

    pub fn is_lucky(self, nakshatra: Nakshatra) -> bool {
        self.lucky_nakshatras().contains(&nakshatra)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quality {
    Poor,
    Moderate,
    Good,
    Excellent,
}

impl Quality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Moderate => "moderate",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MuhuratWindow {
    /// 1-8.
    pub part: u8,
    pub window: ClockWindow,
    pub quality: Quality,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QualityCounts {
    pub excellent: u8,
    pub good: u8,
    pub moderate: u8,
    pub poor: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MuhuratScore {
    pub windows: Vec<MuhuratWindow>,
    pub counts: QualityCounts,
}

impl MuhuratScore {
    /// Windows graded excellent.
    pub fn best_times(&self) -> impl Iterator<Item = &MuhuratWindow> {
        self.windows
            .iter()
            .filter(|w| w.quality == Quality::Excellent)
    }
}

/// Default grade of 0-based part `i` before the Rahu Kaal check.
fn base_grade(i: usize, lucky: bool) -> (Quality, &'static str) {
    match i {
        0 | 7 => (
            Quality::Moderate,
            "Early morning or evening - moderate auspiciousness",
        ),
        2..=5 if lucky => (Quality::Excellent, "Mid-day period - highly auspicious"),
        2..=5 => (Quality::Good, "Mid-day period - good time"),
        _ => (Quality::Good, "Good auspicious time"),
    }
}

/// Grade the eight windows between `daylight.start_min` and `daylight.end_min`.
///
/// Any window overlapping `rahu_kaal` is forced to poor.
pub fn score_muhurat(
    daylight: ClockWindow,
    nakshatra: Nakshatra,
    event: EventType,
    rahu_kaal: ClockWindow,
) -> MuhuratScore {
    let part_len = daylight.duration_min() / MUHURAT_PARTS as f64;
    let lucky = event.is_lucky(nakshatra);
    let mut counts = QualityCounts::default();
    let mut windows = Vec::with_capacity(MUHURAT_PARTS);

    for i in 0..MUHURAT_PARTS {
        let window = ClockWindow::new(
            daylight.start_min + i as f64 * part_len,
            daylight.start_min + (i + 1) as f64 * part_len,
        );
        let (mut quality, mut description) = base_grade(i, lucky);
        if window.overlaps(&rahu_kaal) {
            quality = Quality::Poor;
            description = "Overlaps with Rahu Kaal - not auspicious";
        }
        match quality {
            Quality::Excellent => counts.excellent += 1,
            Quality::Good => counts.good += 1,
            Quality::Moderate => counts.moderate += 1,
            Quality::Poor => counts.poor += 1,
        }
        windows.push(MuhuratWindow {
            part: (i + 1) as u8,
            window,
            quality,
            description,
        });
    }

    MuhuratScore { windows, counts }
}
