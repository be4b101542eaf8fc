//! Shared utility functions for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// 0-based sign index of a longitude, [0, 12).
pub fn sign_index(lon_deg: f64) -> u8 {
    ((normalize_360(lon_deg) / 30.0).floor() as u8).min(11)
}
