//! Plain-scalar birth request.

use kundli_time::{BirthInput, TimeError};
use serde::{Deserialize, Serialize};

fn default_time() -> String {
    "12:00:00".into()
}

fn default_timezone() -> String {
    "Asia/Kolkata".into()
}

/// Birth data as it arrives from a caller: strings and decimal degrees.
///
/// `time` defaults to noon and `timezone` to `Asia/Kolkata` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthRequest {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`.
    #[serde(default = "default_time")]
    pub time: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

impl BirthRequest {
    pub fn new(date: &str, time: &str, latitude: f64, longitude: f64, timezone: &str) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            latitude,
            longitude,
            timezone: timezone.into(),
        }
    }

    pub fn to_input(&self) -> Result<BirthInput, TimeError> {
        BirthInput::parse(
            &self.date,
            &self.time,
            self.latitude,
            self.longitude,
            &self.timezone,
        )
    }
}
