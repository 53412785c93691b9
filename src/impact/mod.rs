//! Impact effects calculator.
//!
//! Turns a scenario into kinetic energy, TNT-equivalent yield, final
//! crater diameter and a set of ground damage rings. Every output is a
//! closed-form function of diameter, density and velocity.

pub mod blast;

#[cfg(test)]
mod proptest_impact;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, EngineError};
use crate::scenarios::{DerivedBody, Scenario, check_positive};
use crate::types::SURFACE_GRAVITY;

pub use blast::{BlastRing, BlastRingKind, BlastRingTable, BlastZone, CraterRing};

/// Energy divisor used for the TNT-equivalent yield.
///
/// 4.184e9 J is one *ton* of TNT, although stored yields are labelled
/// megatons. Kept as-is so stored `tnt_megatons` values stay comparable.
pub const TNT_ENERGY_JOULES_PER_MEGATON: f64 = 4.184e9;

/// Pi-scaling constant for competent rock targets.
pub const PI_SCALING_K: f64 = 0.074;

/// Pi-scaling exponent.
pub const PI_SCALING_N: f64 = 0.34;

/// Target rock density (kg/m³).
pub const TARGET_DENSITY: f64 = 2600.0;

/// Constant table for the impact calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactConstants {
    pub tnt_joules_per_megaton: f64,
    pub crater_scaling_k: f64,
    pub crater_scaling_n: f64,
    pub target_density_kg_m3: f64,
    pub gravity_m_s2: f64,
    pub blast: BlastRingTable,
}

impl Default for ImpactConstants {
    fn default() -> Self {
        Self {
            tnt_joules_per_megaton: TNT_ENERGY_JOULES_PER_MEGATON,
            crater_scaling_k: PI_SCALING_K,
            crater_scaling_n: PI_SCALING_N,
            target_density_kg_m3: TARGET_DENSITY,
            gravity_m_s2: SURFACE_GRAVITY,
            blast: BlastRingTable::default(),
        }
    }
}

impl ImpactConstants {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("impact.tnt_joules_per_megaton", self.tnt_joules_per_megaton),
            ("impact.crater_scaling_k", self.crater_scaling_k),
            ("impact.crater_scaling_n", self.crater_scaling_n),
            ("impact.target_density_kg_m3", self.target_density_kg_m3),
            ("impact.gravity_m_s2", self.gravity_m_s2),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidConstant {
                    name,
                    value,
                    reason: "must be positive and finite",
                });
            }
        }
        self.blast.validate()
    }

    /// Final crater diameter (m): D = K × (E / (ρ_target × g))^n
    pub fn crater_diameter(&self, kinetic_energy_joules: f64) -> f64 {
        let energy_per_gravity =
            kinetic_energy_joules / (self.target_density_kg_m3 * self.gravity_m_s2);
        self.crater_scaling_k * energy_per_gravity.powf(self.crater_scaling_n)
    }

    /// Yield in (nominal) megatons of TNT.
    #[inline]
    pub fn tnt_megatons(&self, kinetic_energy_joules: f64) -> f64 {
        kinetic_energy_joules / self.tnt_joules_per_megaton
    }
}

/// Output of the impact calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub mass_kg: f64,
    pub kinetic_energy_joules: f64,
    pub tnt_megatons: f64,
    pub crater_diameter_meters: f64,
    /// Ordered by increasing radius.
    pub blast_rings: Vec<BlastRing>,
}

/// Kinetic energy: KE = ½mv²
#[inline]
pub fn kinetic_energy(mass_kg: f64, velocity_m_s: f64) -> f64 {
    0.5 * mass_kg * velocity_m_s * velocity_m_s
}

/// Compute impact effects for a scenario.
///
/// Fails with [`EngineError::InvalidScenarioData`] when diameter, density
/// or velocity is not positive, or when a derived quantity leaves the
/// finite positive range. The impact angle is ignored.
pub fn compute_impact(
    scenario: &Scenario,
    constants: &ImpactConstants,
) -> Result<ImpactResult, EngineError> {
    let body = scenario.derive()?;
    impact_for_body(body, constants)
}

/// Impact effects for an already-validated body.
pub fn impact_for_body(
    body: DerivedBody,
    constants: &ImpactConstants,
) -> Result<ImpactResult, EngineError> {
    let kinetic_energy_joules = check_positive(
        "kinetic_energy_joules",
        kinetic_energy(body.mass_kg, body.velocity_m_s),
    )?;
    let tnt_megatons =
        check_positive("tnt_megatons", constants.tnt_megatons(kinetic_energy_joules))?;
    let crater_diameter_meters = check_positive(
        "crater_diameter_meters",
        constants.crater_diameter(kinetic_energy_joules),
    )?;
    let blast_rings = constants.blast.rings(tnt_megatons, crater_diameter_meters);

    debug!(
        mass_kg = body.mass_kg,
        kinetic_energy_joules, tnt_megatons, crater_diameter_meters, "impact computed"
    );

    Ok(ImpactResult {
        mass_kg: body.mass_kg,
        kinetic_energy_joules,
        tnt_megatons,
        crater_diameter_meters,
        blast_rings,
    })
}
