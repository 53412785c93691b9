//! Gravity tractor model.
//!
//! The spacecraft station-keeps beside the asteroid and its own gravity
//! tows the body. Here the tow force is a fixed conservative constant
//! rather than G·M·m/r², so delta-v is linear in mission duration.

use serde::{Deserialize, Serialize};

use super::payload::{
    MitigationOption, StrategyDetails, check_non_negative, check_probability,
};
use crate::error::ConfigError;
use crate::scenarios::DerivedBody;
use crate::types::years_to_seconds;

/// Gravity tractor delta-v: Δv = F × t / M
///
/// # Arguments
/// * `thrust_n` - Tow force in Newtons
/// * `duration_s` - Station-keeping time in seconds
/// * `asteroid_mass_kg` - Mass of the asteroid in kg
///
/// # Returns
/// Accumulated delta-v in m/s
#[inline]
pub fn tractor_delta_v(thrust_n: f64, duration_s: f64, asteroid_mass_kg: f64) -> f64 {
    debug_assert!(asteroid_mass_kg > 0.0, "asteroid mass must be positive");
    (thrust_n * duration_s) / asteroid_mass_kg
}

/// Gravity tractor sweep configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityTractorParams {
    /// Tow force (N).
    pub thrust_n: f64,
    /// Candidate mission durations (years), in sweep order.
    pub durations_years: Vec<f64>,
    pub spacecraft_mass_kg: f64,
    pub success_probability: f64,
    pub base_cost_billions: f64,
    /// Cost added per `cost_step_years` of mission time.
    pub cost_per_step_billions: f64,
    pub cost_step_years: f64,
    pub readiness: String,
}

impl Default for GravityTractorParams {
    fn default() -> Self {
        Self {
            thrust_n: 1e-4,
            durations_years: vec![5.0, 10.0, 15.0, 20.0],
            spacecraft_mass_kg: 1000.0,
            success_probability: 0.75,
            base_cost_billions: 1.5,
            cost_per_step_billions: 0.5,
            cost_step_years: 5.0,
            readiness: "Requires development".to_string(),
        }
    }
}

impl GravityTractorParams {
    /// Evaluate one mission duration against the body.
    pub fn option(&self, duration_years: f64, body: &DerivedBody) -> MitigationOption {
        let delta_v_m_s =
            tractor_delta_v(self.thrust_n, years_to_seconds(duration_years), body.mass_kg);
        let cost_billions = self.base_cost_billions
            + (duration_years / self.cost_step_years) * self.cost_per_step_billions;

        MitigationOption::new(
            StrategyDetails::GravityTractor {
                duration_years,
                spacecraft_mass_kg: self.spacecraft_mass_kg,
            },
            delta_v_m_s,
            self.success_probability,
            cost_billions,
            &self.readiness,
        )
    }

    /// Evaluate every configured duration, in sweep order.
    pub fn sweep(&self, body: &DerivedBody) -> Vec<MitigationOption> {
        self.durations_years
            .iter()
            .map(|&years| self.option(years, body))
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.thrust_n.is_finite() && self.thrust_n > 0.0) {
            return Err(ConfigError::InvalidConstant {
                name: "tractor.thrust_n",
                value: self.thrust_n,
                reason: "must be positive and finite",
            });
        }
        if !(self.cost_step_years.is_finite() && self.cost_step_years > 0.0) {
            return Err(ConfigError::InvalidConstant {
                name: "tractor.cost_step_years",
                value: self.cost_step_years,
                reason: "must be positive and finite",
            });
        }
        if self.durations_years.is_empty() {
            return Err(ConfigError::EmptySweep("gravity tractor duration"));
        }
        for &years in &self.durations_years {
            check_non_negative("tractor.durations_years", years)?;
        }
        check_probability("tractor.success_probability", self.success_probability)?;
        check_non_negative("tractor.base_cost_billions", self.base_cost_billions)?;
        check_non_negative("tractor.cost_per_step_billions", self.cost_per_step_billions)
    }
}
