//! Impact scenario records and the quantities derived from them.
//!
//! A scenario describes an incoming asteroid by four physical inputs
//! (diameter, bulk density, approach speed and entry angle). Both the
//! impact calculator and the mitigation evaluator start from the same
//! [`DerivedBody`], so mass and SI velocity are computed in one place.

pub mod presets;

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::impact::kinetic_energy;
use crate::types::km_s_to_m_s;

pub use presets::SCENARIOS;

/// A scenario record as held by the scenario store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Store identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Asteroid diameter (m).
    pub diameter_meters: f64,
    /// Bulk density (kg/m³).
    pub density_kg_m3: f64,
    /// Approach speed relative to Earth (km/s).
    pub velocity_km_s: f64,
    /// Entry angle from horizontal (degrees). Not used by any formula yet.
    #[serde(default = "default_impact_angle")]
    pub impact_angle_deg: f64,
    /// Warning time before impact (years), when known.
    #[serde(default)]
    pub time_to_impact_years: Option<f64>,
}

fn default_impact_angle() -> f64 {
    45.0
}

/// Mass and velocity of the impactor in SI units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedBody {
    /// Mass in kilograms
    pub mass_kg: f64,
    /// Velocity in meters per second
    pub velocity_m_s: f64,
}

impl Scenario {
    /// Check that every physical input is positive and finite.
    pub fn validate(&self) -> Result<(), EngineError> {
        let fields = [
            ("diameter_meters", self.diameter_meters),
            ("density_kg_m3", self.density_kg_m3),
            ("velocity_km_s", self.velocity_km_s),
        ];
        for (field, value) in fields {
            check_positive(field, value)?;
        }
        Ok(())
    }

    /// Validate the scenario and derive mass and SI velocity.
    ///
    /// The asteroid is treated as a uniform-density sphere. Inputs that are
    /// individually valid can still overflow or underflow the derived mass
    /// or kinetic energy; those are rejected too.
    pub fn derive(&self) -> Result<DerivedBody, EngineError> {
        self.validate()?;
        let body = DerivedBody {
            mass_kg: sphere_mass(self.diameter_meters, self.density_kg_m3),
            velocity_m_s: km_s_to_m_s(self.velocity_km_s),
        };
        check_positive("mass_kg", body.mass_kg)?;
        check_positive("velocity_m_s", body.velocity_m_s)?;
        check_positive(
            "kinetic_energy_joules",
            kinetic_energy(body.mass_kg, body.velocity_m_s),
        )?;
        Ok(body)
    }
}

/// Accept `value` only if it is finite and strictly positive.
pub(crate) fn check_positive(field: &'static str, value: f64) -> Result<f64, EngineError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EngineError::InvalidScenarioData { field, value })
    }
}

/// Mass of a uniform sphere: (4/3)·π·r³·ρ
#[inline]
pub fn sphere_mass(diameter_m: f64, density_kg_m3: f64) -> f64 {
    let radius = diameter_m / 2.0;
    (4.0 / 3.0) * PI * radius.powi(3) * density_kg_m3
}
