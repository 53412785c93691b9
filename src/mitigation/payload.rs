//! Mitigation option types and impulsive deflection models.
//!
//! Implements physics for:
//! - Kinetic impactor (DART-style): momentum transfer with ejecta amplification
//! - Nuclear deflection: fixed policy-level estimate

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scenarios::DerivedBody;
use crate::types::KG_PER_TONNE;

/// Deflection strategy family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    KineticImpactor,
    GravityTractor,
    NuclearDeflection,
}

impl Strategy {
    /// Get a short name for this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::KineticImpactor => "Kinetic Impactor",
            Strategy::GravityTractor => "Gravity Tractor",
            Strategy::NuclearDeflection => "Nuclear Deflection",
        }
    }
}

/// Strategy-specific parameters of a mitigation option.
///
/// Serialized inline with the option; the `strategy` tag names the variant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum StrategyDetails {
    KineticImpactor {
        impactor_mass_kg: f64,
        min_lead_time_years: f64,
    },
    GravityTractor {
        duration_years: f64,
        spacecraft_mass_kg: f64,
    },
    NuclearDeflection {
        /// Carried for reporting; delta-v does not depend on it.
        yield_megatons: f64,
        min_lead_time_years: f64,
        risks: String,
    },
}

impl StrategyDetails {
    pub fn strategy(&self) -> Strategy {
        match self {
            StrategyDetails::KineticImpactor { .. } => Strategy::KineticImpactor,
            StrategyDetails::GravityTractor { .. } => Strategy::GravityTractor,
            StrategyDetails::NuclearDeflection { .. } => Strategy::NuclearDeflection,
        }
    }
}

/// One candidate deflection mission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MitigationOption {
    #[serde(flatten)]
    pub details: StrategyDetails,
    pub delta_v_m_s: f64,
    pub success_probability: f64,
    pub cost_billions: f64,
    pub readiness: String,
    /// delta_v_m_s × success_probability
    pub effectiveness_score: f64,
}

impl MitigationOption {
    /// Create an option; the effectiveness score is fixed at construction.
    pub fn new(
        details: StrategyDetails,
        delta_v_m_s: f64,
        success_probability: f64,
        cost_billions: f64,
        readiness: &str,
    ) -> Self {
        Self {
            details,
            delta_v_m_s,
            success_probability,
            cost_billions,
            readiness: readiness.to_string(),
            effectiveness_score: delta_v_m_s * success_probability,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.details.strategy()
    }

    /// Get a human-readable description of the option.
    pub fn label(&self) -> String {
        match &self.details {
            StrategyDetails::KineticImpactor {
                impactor_mass_kg, ..
            } => format!("Kinetic Impactor ({:.0} kg)", impactor_mass_kg),
            StrategyDetails::GravityTractor { duration_years, .. } => {
                format!("Gravity Tractor ({:.0} yr)", duration_years)
            }
            StrategyDetails::NuclearDeflection { yield_megatons, .. } => {
                format!("Nuclear Deflection ({:.1} Mt)", yield_megatons)
            }
        }
    }
}

/// Kinetic impactor delta-v: Δv = β × (m / M) × v_rel
///
/// # Arguments
/// * `beta` - Momentum enhancement factor from ejecta (DART measured ≈ 3.6)
/// * `impactor_mass_kg` - Spacecraft mass at impact
/// * `asteroid_mass_kg` - Target mass
/// * `relative_velocity` - Closing speed (m/s)
#[inline]
pub fn kinetic_delta_v(
    beta: f64,
    impactor_mass_kg: f64,
    asteroid_mass_kg: f64,
    relative_velocity: f64,
) -> f64 {
    debug_assert!(asteroid_mass_kg > 0.0, "asteroid mass must be positive");
    beta * (impactor_mass_kg / asteroid_mass_kg) * relative_velocity
}

/// Kinetic impactor sweep configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KineticImpactorParams {
    /// Momentum enhancement factor (dimensionless).
    pub beta: f64,
    /// Candidate impactor masses (kg), in sweep order.
    pub impactor_masses_kg: Vec<f64>,
    pub base_cost_billions: f64,
    pub cost_per_tonne_billions: f64,
    /// Lead time heuristic: years per m/s of delta-v.
    pub lead_time_years_per_m_s: f64,
    pub min_lead_time_years: f64,
    /// Delta-v above which the higher success probability applies (m/s).
    pub success_threshold_m_s: f64,
    pub success_probability_above: f64,
    pub success_probability_below: f64,
    pub readiness: String,
}

impl Default for KineticImpactorParams {
    fn default() -> Self {
        Self {
            beta: 3.6,
            impactor_masses_kg: vec![500.0, 1000.0, 5000.0, 10_000.0],
            base_cost_billions: 0.5,
            cost_per_tonne_billions: 0.2,
            lead_time_years_per_m_s: 100.0,
            min_lead_time_years: 1.0,
            success_threshold_m_s: 0.01,
            success_probability_above: 0.95,
            success_probability_below: 0.85,
            readiness: "Proven technology".to_string(),
        }
    }
}

impl KineticImpactorParams {
    /// Evaluate one impactor mass against the body.
    pub fn option(&self, impactor_mass_kg: f64, body: &DerivedBody) -> MitigationOption {
        let delta_v_m_s = kinetic_delta_v(
            self.beta,
            impactor_mass_kg,
            body.mass_kg,
            body.velocity_m_s,
        );

        // Rule of thumb, not derived from orbital geometry
        let min_lead_time_years = (delta_v_m_s * self.lead_time_years_per_m_s)
            .ceil()
            .max(self.min_lead_time_years);

        let success_probability = if delta_v_m_s > self.success_threshold_m_s {
            self.success_probability_above
        } else {
            self.success_probability_below
        };

        let cost_billions = self.base_cost_billions
            + (impactor_mass_kg / KG_PER_TONNE) * self.cost_per_tonne_billions;

        MitigationOption::new(
            StrategyDetails::KineticImpactor {
                impactor_mass_kg,
                min_lead_time_years,
            },
            delta_v_m_s,
            success_probability,
            cost_billions,
            &self.readiness,
        )
    }

    /// Evaluate every configured impactor mass, in sweep order.
    pub fn sweep(&self, body: &DerivedBody) -> Vec<MitigationOption> {
        self.impactor_masses_kg
            .iter()
            .map(|&mass| self.option(mass, body))
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.beta.is_finite() && self.beta > 0.0) {
            return Err(ConfigError::InvalidConstant {
                name: "kinetic.beta",
                value: self.beta,
                reason: "must be positive and finite",
            });
        }
        if self.impactor_masses_kg.is_empty() {
            return Err(ConfigError::EmptySweep("kinetic impactor mass"));
        }
        for &mass in &self.impactor_masses_kg {
            if !(mass.is_finite() && mass > 0.0) {
                return Err(ConfigError::InvalidConstant {
                    name: "kinetic.impactor_masses_kg",
                    value: mass,
                    reason: "must be positive and finite",
                });
            }
        }
        check_probability("kinetic.success_probability_above", self.success_probability_above)?;
        check_probability("kinetic.success_probability_below", self.success_probability_below)?;
        check_non_negative("kinetic.base_cost_billions", self.base_cost_billions)?;
        check_non_negative("kinetic.cost_per_tonne_billions", self.cost_per_tonne_billions)?;
        check_non_negative("kinetic.min_lead_time_years", self.min_lead_time_years)?;
        check_non_negative("kinetic.lead_time_years_per_m_s", self.lead_time_years_per_m_s)?;
        check_non_negative("kinetic.success_threshold_m_s", self.success_threshold_m_s)
    }
}

/// Nuclear deflection configuration.
///
/// A policy-level placeholder: delta-v is fixed and does not scale with
/// yield or asteroid mass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NuclearParams {
    pub yield_megatons: f64,
    pub delta_v_m_s: f64,
    pub min_lead_time_years: f64,
    pub success_probability: f64,
    pub cost_billions: f64,
    pub readiness: String,
    pub risks: String,
}

impl Default for NuclearParams {
    fn default() -> Self {
        Self {
            yield_megatons: 1.0,
            delta_v_m_s: 0.1,
            min_lead_time_years: 5.0,
            success_probability: 0.70,
            cost_billions: 3.0,
            readiness: "Requires international approval".to_string(),
            risks: "Fragmentation risk".to_string(),
        }
    }
}

impl NuclearParams {
    pub fn option(&self) -> MitigationOption {
        MitigationOption::new(
            StrategyDetails::NuclearDeflection {
                yield_megatons: self.yield_megatons,
                min_lead_time_years: self.min_lead_time_years,
                risks: self.risks.clone(),
            },
            self.delta_v_m_s,
            self.success_probability,
            self.cost_billions,
            &self.readiness,
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("nuclear.delta_v_m_s", self.delta_v_m_s)?;
        check_non_negative("nuclear.yield_megatons", self.yield_megatons)?;
        check_non_negative("nuclear.cost_billions", self.cost_billions)?;
        check_probability("nuclear.success_probability", self.success_probability)
    }
}

pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidConstant {
            name,
            value,
            reason: "must be within [0, 1]",
        })
    }
}

pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidConstant {
            name,
            value,
            reason: "must be non-negative and finite",
        })
    }
}
