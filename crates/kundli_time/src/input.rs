//! Birth input parsing.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::TimeError;

/// Local birth date/time and place, as entered.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthInput {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Degrees, north positive.
    pub latitude_deg: f64,
    /// Degrees, east positive.
    pub longitude_deg: f64,
    /// IANA identifier or a well-known alias (e.g. "IST").
    pub timezone: String,
}

impl BirthInput {
    /// Parse from plain scalars: `YYYY-MM-DD`, `HH:MM[:SS]`.
    pub fn parse(
        date: &str,
        time: &str,
        latitude_deg: f64,
        longitude_deg: f64,
        timezone: &str,
    ) -> Result<Self, TimeError> {
        let date = parse_date(date)?;
        let time = parse_clock_time(time)?;
        validate_location(latitude_deg, longitude_deg)?;
        Ok(Self {
            date,
            time,
            latitude_deg,
            longitude_deg,
            timezone: timezone.trim().to_string(),
        })
    }

    pub fn local_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate, TimeError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| TimeError::InvalidDate(s.into()))
}

/// `HH:MM:SS` or `HH:MM`.
pub fn parse_clock_time(s: &str) -> Result<NaiveTime, TimeError> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| TimeError::InvalidTime(s.into()))
}

/// Latitude within ±90 and longitude within ±180, both finite.
pub fn validate_location(latitude_deg: f64, longitude_deg: f64) -> Result<(), TimeError> {
    check_coordinate("latitude", latitude_deg, 90.0)?;
    check_coordinate("longitude", longitude_deg, 180.0)
}

fn check_coordinate(axis: &'static str, value: f64, limit: f64) -> Result<(), TimeError> {
    if value.is_finite() && value.abs() <= limit {
        Ok(())
    } else {
        Err(TimeError::InvalidCoordinate { axis, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_without_seconds() {
        let t = parse_clock_time("14:30").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
    }

    #[test]
    fn time_with_seconds() {
        let t = parse_clock_time("06:05:09").unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(6, 5, 9).unwrap());
    }

    #[test]
    fn bad_time() {
        assert!(matches!(
            parse_clock_time("25:00"),
            Err(TimeError::InvalidTime(_))
        ));
        assert!(parse_clock_time("noon").is_err());
    }

    #[test]
    fn bad_date() {
        assert!(matches!(parse_date("1990-02-30"), Err(TimeError::InvalidDate(_))));
        assert!(parse_date("15/08/1990").is_err());
    }

    #[test]
    fn coordinates_checked() {
        let err = BirthInput::parse("1990-08-15", "10:00", 91.0, 0.0, "UTC").unwrap_err();
        assert!(matches!(
            err,
            TimeError::InvalidCoordinate {
                axis: "latitude",
                ..
            }
        ));
        assert!(BirthInput::parse("1990-08-15", "10:00", 0.0, f64::NAN, "UTC").is_err());
    }

    #[test]
    fn parse_full_input() {
        let b = BirthInput::parse("1990-08-15", "10:30", 28.61, 77.21, " Asia/Kolkata ").unwrap();
        assert_eq!(b.timezone, "Asia/Kolkata");
        assert_eq!(b.local_datetime().to_string(), "1990-08-15 10:30:00");
    }
}
