//! Panchang elements from Sun/Moon longitudes, and weekday kaal tables.
//!
//! All functions take sidereal longitudes in degrees and are pure. Sampling
//! time, rise/set and timezone handling live with the caller.

use crate::nakshatra::NAKSHATRA_SPAN_27;
use crate::util::normalize_360;

/// Moon-Sun elongation per tithi.
pub const TITHI_SPAN: f64 = 12.0;

/// Moon-Sun elongation per karana (half tithi).
pub const KARANA_SPAN: f64 = 6.0;

// ---------------------------------------------------------------------------
// Tithi
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Bright (waxing) fortnight, tithis 1-15.
    Shukla,
    /// Dark (waning) fortnight, tithis 16-30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Tithi names within a paksha. The 15th is Purnima in Shukla and
/// Amavasya in Krishna.
pub const TITHI_NAMES: [&str; 15] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    /// 1-30.
    pub number: u8,
    pub paksha: Paksha,
    /// 1-15.
    pub number_in_paksha: u8,
    pub name: &'static str,
}

impl TithiInfo {
    /// e.g. "Shukla Ekadashi".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.paksha.name(), self.name)
    }
}

/// Tithi name for a number 1-30.
///
/// Both pakshas share the 15-name table, except that tithi 30 is the new
/// moon "Amavasya" rather than the table's full-moon "Purnima".
pub fn tithi_name(number: u8) -> &'static str {
    if number == 30 {
        return "Amavasya";
    }
    TITHI_NAMES[((number.max(1) - 1) % 15) as usize]
}

pub fn tithi_from_longitudes(sun_lon: f64, moon_lon: f64) -> TithiInfo {
    let elongation = normalize_360(moon_lon - sun_lon);
    let number = ((elongation / TITHI_SPAN).floor() as u8).min(29) + 1;
    let paksha = if number <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    TithiInfo {
        number,
        paksha,
        number_in_paksha: (number - 1) % 15 + 1,
        name: tithi_name(number),
    }
}

// ---------------------------------------------------------------------------
// Yoga
// ---------------------------------------------------------------------------

pub const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Preeti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarma",
    "Dhriti",
    "Shoola",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyan",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaInfo {
    /// 1-27.
    pub number: u8,
    pub name: &'static str,
}

pub fn yoga_from_longitudes(sun_lon: f64, moon_lon: f64) -> YogaInfo {
    let sum = normalize_360(sun_lon + moon_lon);
    let number = ((sum / NAKSHATRA_SPAN_27).floor() as u8).min(26) + 1;
    YogaInfo {
        number,
        name: YOGA_NAMES[(number - 1) as usize],
    }
}

// ---------------------------------------------------------------------------
// Karana
// ---------------------------------------------------------------------------

/// The 11 karanas: 7 movable (repeating) and 4 fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Karana for a sequence number 1-60 in the synodic month.
    ///
    /// 1 is Kimstughna, 2-57 cycle the 7 movable karanas, 58-60 are
    /// Shakuni, Chatushpada, Naga.
    pub const fn from_number(number: u8) -> Self {
        match number {
            0 | 1 => Self::Kimstughna,
            58 => Self::Shakuni,
            59 => Self::Chatushpada,
            60.. => Self::Naga,
            n => MOVABLE_KARANAS[((n - 2) % 7) as usize],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaInfo {
    /// 1-60.
    pub number: u8,
    pub karana: Karana,
}

pub fn karana_from_longitudes(sun_lon: f64, moon_lon: f64) -> KaranaInfo {
    let elongation = normalize_360(moon_lon - sun_lon);
    let number = ((elongation / KARANA_SPAN).floor() as u8).min(59) + 1;
    KaranaInfo {
        number,
        karana: Karana::from_number(number),
    }
}

// ---------------------------------------------------------------------------
// Vaar and kaal windows
// ---------------------------------------------------------------------------

/// Weekday, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// 0 = Sunday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Vaar for days since Sunday; wraps modulo 7.
    pub const fn from_days_from_sunday(days: u32) -> Self {
        ALL_VAARS[(days % 7) as usize]
    }
}

/// Local clock interval in minutes after midnight, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockWindow {
    pub start_min: f64,
    pub end_min: f64,
}

impl ClockWindow {
    pub const fn new(start_min: f64, end_min: f64) -> Self {
        Self { start_min, end_min }
    }

    /// Any shared time; touching endpoints do not count.
    pub fn overlaps(&self, other: &ClockWindow) -> bool {
        !(self.end_min <= other.start_min || self.start_min >= other.end_min)
    }

    pub fn duration_min(&self) -> f64 {
        self.end_min - self.start_min
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kaal {
    RahuKaal,
    GulikaKaal,
    Yamaghanda,
}

impl Kaal {
    pub const fn name(self) -> &'static str {
        match self {
            Self::RahuKaal => "Rahu Kaal",
            Self::GulikaKaal => "Gulika Kaal",
            Self::Yamaghanda => "Yamaghanda",
        }
    }
}

/// `(start, end)` in minutes after midnight, indexed Sunday first.
pub const RAHU_KAAL_TABLE: [(u16, u16); 7] = [
    (990, 1080), // Sun 16:30-18:00
    (450, 540),  // Mon 07:30-09:00
    (900, 990),  // Tue 15:00-16:30
    (720, 810),  // Wed 12:00-13:30
    (810, 900),  // Thu 13:30-15:00
    (630, 720),  // Fri 10:30-12:00
    (540, 630),  // Sat 09:00-10:30
];

pub const GULIKA_KAAL_TABLE: [(u16, u16); 7] = [
    (900, 990), // Sun 15:00-16:30
    (810, 900), // Mon 13:30-15:00
    (720, 810), // Tue 12:00-13:30
    (630, 720), // Wed 10:30-12:00
    (540, 630), // Thu 09:00-10:30
    (450, 540), // Fri 07:30-09:00
    (360, 450), // Sat 06:00-07:30
];

pub const YAMAGHANDA_TABLE: [(u16, u16); 7] = [
    (720, 810), // Sun 12:00-13:30
    (630, 720), // Mon 10:30-12:00
    (540, 630), // Tue 09:00-10:30
    (450, 540), // Wed 07:30-09:00
    (360, 450), // Thu 06:00-07:30
    (900, 990), // Fri 15:00-16:30
    (810, 900), // Sat 13:30-15:00
];

pub fn kaal_window(kaal: Kaal, vaar: Vaar) -> ClockWindow {
    let table = match kaal {
        Kaal::RahuKaal => &RAHU_KAAL_TABLE,
        Kaal::GulikaKaal => &GULIKA_KAAL_TABLE,
        Kaal::Yamaghanda => &YAMAGHANDA_TABLE,
    };
    let (start, end) = table[vaar.index() as usize];
    ClockWindow::new(f64::from(start), f64::from(end))
}
