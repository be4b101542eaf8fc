//! Engine configuration.
//!
//! [`KundliConfig::default`] reproduces the stock behaviour. A TOML file may
//! override any subset of keys:
//!
//! ```toml
//! panchang_reference_time = "06:00"
//! default_sunrise = "06:00"
//! default_sunset = "18:00"
//! dasha_cycles = 2
//! mahadasha_report_limit = 18
//! varga_scheme = "linear"        # or "parashari"
//!
//! [timezone_offsets]
//! "Asia/Kathmandu" = 5.75
//! ```
//!
//! Entries under `timezone_offsets` are added to the built-in static table,
//! replacing built-in entries with the same identifier.

pub mod error;

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use chrono::NaiveTime;
use kundli_time::{BUILTIN_OFFSETS, StaticOffsetTable, TimeResolver, parse_clock_time};
use kundli_vedic_base::{MAX_CYCLES, MIN_CYCLES, VargaScheme};
use serde::Deserialize;

pub use error::ConfigError;

/// Largest accepted static offset magnitude, in hours.
const MAX_OFFSET_HOURS: f64 = 14.0;

/// Validated engine settings.
#[derive(Debug, Clone, PartialEq)]
pub struct KundliConfig {
    /// Local clock time at which panchang longitudes are sampled.
    pub panchang_reference_time: NaiveTime,
    /// Muhurat daylight start when the Sun has no rise event.
    pub default_sunrise: NaiveTime,
    /// Muhurat daylight end when the Sun has no set event.
    pub default_sunset: NaiveTime,
    /// Full 120-year cycles generated after the birth period, 2 to 10.
    pub dasha_cycles: u32,
    /// Mahadashas included in dasha reports.
    pub mahadasha_report_limit: usize,
    pub varga_scheme: VargaScheme,
    pub timezone_offsets: StaticOffsetTable,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct KundliConfigToml {
    panchang_reference_time: String,
    default_sunrise: String,
    default_sunset: String,
    dasha_cycles: u32,
    mahadasha_report_limit: usize,
    varga_scheme: VargaScheme,
    timezone_offsets: BTreeMap<String, f64>,
}

impl Default for KundliConfigToml {
    fn default() -> Self {
        Self {
            panchang_reference_time: "06:00".into(),
            default_sunrise: "06:00".into(),
            default_sunset: "18:00".into(),
            dasha_cycles: MIN_CYCLES,
            mahadasha_report_limit: 18,
            varga_scheme: VargaScheme::Linear,
            timezone_offsets: BTreeMap::new(),
        }
    }
}

impl Default for KundliConfig {
    fn default() -> Self {
        Self {
            panchang_reference_time: hm(6, 0),
            default_sunrise: hm(6, 0),
            default_sunset: hm(18, 0),
            dasha_cycles: MIN_CYCLES,
            mahadasha_report_limit: 18,
            varga_scheme: VargaScheme::Linear,
            timezone_offsets: StaticOffsetTable::default(),
        }
    }
}

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or_default()
}

impl KundliConfig {
    /// Parse and validate TOML text; absent keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let raw: KundliConfigToml =
            toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::try_from(raw)
    }

    /// Read and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// A fresh resolver over this config's static offset table.
    pub fn time_resolver(&self) -> TimeResolver {
        TimeResolver::with_static_table(self.timezone_offsets.clone())
    }
}

impl TryFrom<KundliConfigToml> for KundliConfig {
    type Error = ConfigError;

    fn try_from(raw: KundliConfigToml) -> Result<Self, ConfigError> {
        let panchang_reference_time =
            clock_time("panchang_reference_time", &raw.panchang_reference_time)?;
        let default_sunrise = clock_time("default_sunrise", &raw.default_sunrise)?;
        let default_sunset = clock_time("default_sunset", &raw.default_sunset)?;
        if default_sunrise >= default_sunset {
            return Err(ConfigError::DaylightOrder {
                sunrise: raw.default_sunrise,
                sunset: raw.default_sunset,
            });
        }
        if !(MIN_CYCLES..=MAX_CYCLES).contains(&raw.dasha_cycles) {
            return Err(ConfigError::DashaCycles {
                got: raw.dasha_cycles,
                min: MIN_CYCLES,
                max: MAX_CYCLES,
            });
        }
        if raw.mahadasha_report_limit == 0 {
            return Err(ConfigError::EmptyReport);
        }

        let mut offsets: HashMap<String, f64> = BUILTIN_OFFSETS
            .iter()
            .map(|&(k, v)| (k.to_string(), v))
            .collect();
        for (tz_id, hours) in raw.timezone_offsets {
            if !hours.is_finite() || hours.abs() > MAX_OFFSET_HOURS {
                return Err(ConfigError::InvalidOffset { tz_id, hours });
            }
            offsets.insert(tz_id, hours);
        }

        Ok(Self {
            panchang_reference_time,
            default_sunrise,
            default_sunset,
            dasha_cycles: raw.dasha_cycles,
            mahadasha_report_limit: raw.mahadasha_report_limit,
            varga_scheme: raw.varga_scheme,
            timezone_offsets: StaticOffsetTable::from_map(offsets),
        })
    }
}

fn clock_time(key: &'static str, value: &str) -> Result<NaiveTime, ConfigError> {
    parse_clock_time(value).map_err(|_| ConfigError::InvalidClockTime {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_equals_default() {
        let cfg = KundliConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, KundliConfig::default());
        assert_eq!(cfg.panchang_reference_time, hm(6, 0));
        assert_eq!(cfg.dasha_cycles, 2);
        assert_eq!(cfg.mahadasha_report_limit, 18);
        assert_eq!(cfg.varga_scheme, VargaScheme::Linear);
        assert_eq!(cfg.timezone_offsets.get("IST"), Some(5.5));
    }

    #[test]
    fn overrides_and_offsets_merge() {
        let cfg = KundliConfig::from_toml_str(
            r#"
            panchang_reference_time = "05:30:15"
            varga_scheme = "parashari"
            dasha_cycles = 3

            [timezone_offsets]
            "Asia/Kathmandu" = 5.75
            "UTC" = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(
            cfg.panchang_reference_time,
            NaiveTime::from_hms_opt(5, 30, 15).unwrap()
        );
        assert_eq!(cfg.varga_scheme, VargaScheme::Parashari);
        assert_eq!(cfg.dasha_cycles, 3);
        assert_eq!(cfg.timezone_offsets.get("Asia/Kathmandu"), Some(5.75));
        assert_eq!(cfg.timezone_offsets.get("UTC"), Some(0.5));
        assert_eq!(cfg.timezone_offsets.get("Asia/Tokyo"), Some(9.0));
        assert_eq!(cfg.timezone_offsets.len(), BUILTIN_OFFSETS.len() + 1);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            KundliConfig::from_toml_str("default_sunrise = \"6am\""),
            Err(ConfigError::InvalidClockTime { key: "default_sunrise", .. })
        ));
        assert!(matches!(
            KundliConfig::from_toml_str("dasha_cycles = 1"),
            Err(ConfigError::DashaCycles { got: 1, min: 2, .. })
        ));
        assert!(matches!(
            KundliConfig::from_toml_str("default_sunset = \"05:00\""),
            Err(ConfigError::DaylightOrder { .. })
        ));
        assert!(matches!(
            KundliConfig::from_toml_str("mahadasha_report_limit = 0"),
            Err(ConfigError::EmptyReport)
        ));
        assert!(matches!(
            KundliConfig::from_toml_str("[timezone_offsets]\n\"Mars/Olympus\" = 30.0"),
            Err(ConfigError::InvalidOffset { .. })
        ));
    }

    #[test]
    fn dasha_cycles_are_bounded_above() {
        assert_eq!(KundliConfig::from_toml_str("dasha_cycles = 10").unwrap().dasha_cycles, 10);
        assert_eq!(
            KundliConfig::from_toml_str("dasha_cycles = 11"),
            Err(ConfigError::DashaCycles { got: 11, min: 2, max: 10 })
        );
        assert!(matches!(
            KundliConfig::from_toml_str("dasha_cycles = 4294967295"),
            Err(ConfigError::DashaCycles { got: u32::MAX, .. })
        ));
    }

    #[test]
    fn rejects_unknown_keys_and_schemes() {
        assert!(matches!(
            KundliConfig::from_toml_str("ayanamsa = \"raman\""),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            KundliConfig::from_toml_str("varga_scheme = \"kp\""),
            Err(ConfigError::Parse(_))
        ));
    }
}
