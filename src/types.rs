//! Physical and unit constants shared by the impact and mitigation models.

// Physical constants (SI units)

/// Seconds per day
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Days per Julian year
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Seconds per Julian year
pub const SECONDS_PER_YEAR: f64 = DAYS_PER_YEAR * SECONDS_PER_DAY;

/// Meters per kilometer
pub const METERS_PER_KM: f64 = 1000.0;

/// Kilograms per metric ton
pub const KG_PER_TONNE: f64 = 1000.0;

/// Standard gravity (m/s²) used by the crater scaling law.
pub const SURFACE_GRAVITY: f64 = 9.81;

/// Convert km/s to m/s
#[inline]
pub fn km_s_to_m_s(velocity_km_s: f64) -> f64 {
    velocity_km_s * METERS_PER_KM
}

/// Convert meters to kilometers
#[inline]
pub fn meters_to_km(meters: f64) -> f64 {
    meters / METERS_PER_KM
}

/// Convert a duration in Julian years to seconds
#[inline]
pub fn years_to_seconds(years: f64) -> f64 {
    years * SECONDS_PER_YEAR
}
