//! Mitigation evaluator.
//!
//! Sweeps three deflection strategies against the scenario body and ranks
//! every candidate by effectiveness (delta-v × success probability):
//! - Kinetic impactor over a set of spacecraft masses
//! - Gravity tractor over a set of mission durations
//! - A single fixed nuclear deflection option
//!
//! Separately from the ranking, the report keeps the *last* entry of each
//! sweep as that strategy's summary pick. That positional rule is what the
//! persisted `mitigation_run` rows record, and it is intentionally not the
//! same as the top-ranked option.

pub mod payload;
pub mod tractor;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, EngineError};
use crate::scenarios::{DerivedBody, Scenario};

pub use payload::{
    KineticImpactorParams, MitigationOption, NuclearParams, Strategy, StrategyDetails,
    kinetic_delta_v,
};
pub use tractor::{GravityTractorParams, tractor_delta_v};

/// Constant tables for every mitigation strategy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MitigationConstants {
    pub kinetic: KineticImpactorParams,
    pub tractor: GravityTractorParams,
    pub nuclear: NuclearParams,
}

impl MitigationConstants {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.kinetic.validate()?;
        self.tractor.validate()?;
        self.nuclear.validate()
    }
}

/// Output of the mitigation evaluator.
#[derive(Clone, Debug, PartialEq)]
pub struct MitigationReport {
    pub asteroid_mass_kg: f64,
    /// Every candidate, highest effectiveness first.
    pub recommendations: Vec<MitigationOption>,
    /// Kinetic impactor options in sweep order.
    pub kinetic_sweep: Vec<MitigationOption>,
    /// Gravity tractor options in sweep order.
    pub tractor_sweep: Vec<MitigationOption>,
}

impl MitigationReport {
    /// Summary pick for the kinetic impactor: the last sweep entry.
    pub fn best_kinetic(&self) -> Option<&MitigationOption> {
        self.kinetic_sweep.last()
    }

    /// Summary pick for the gravity tractor: the last sweep entry.
    pub fn best_tractor(&self) -> Option<&MitigationOption> {
        self.tractor_sweep.last()
    }

    /// Highest-scoring option overall.
    pub fn top_ranked(&self) -> Option<&MitigationOption> {
        self.recommendations.first()
    }
}

/// Sort options by descending effectiveness score.
///
/// The sort is stable, so exactly equal scores keep generation order.
pub fn rank_options(mut options: Vec<MitigationOption>) -> Vec<MitigationOption> {
    options.sort_by(|a, b| b.effectiveness_score.total_cmp(&a.effectiveness_score));
    options
}

/// Evaluate and rank all mitigation strategies for a scenario.
///
/// Fails with [`EngineError::InvalidScenarioData`] under the same
/// preconditions as the impact calculator.
pub fn evaluate_mitigations(
    scenario: &Scenario,
    constants: &MitigationConstants,
) -> Result<MitigationReport, EngineError> {
    let body = scenario.derive()?;
    mitigations_for_body(body, constants)
}

/// Mitigation report for an already-validated body.
pub fn mitigations_for_body(
    body: DerivedBody,
    constants: &MitigationConstants,
) -> Result<MitigationReport, EngineError> {
    let kinetic_sweep = constants.kinetic.sweep(&body);
    let tractor_sweep = constants.tractor.sweep(&body);
    let nuclear = constants.nuclear.option();

    for option in kinetic_sweep.iter().chain(tractor_sweep.iter()) {
        check_finite(option)?;
    }

    let candidates: Vec<MitigationOption> = kinetic_sweep
        .iter()
        .chain(tractor_sweep.iter())
        .cloned()
        .chain(std::iter::once(nuclear))
        .collect();
    let recommendations = rank_options(candidates);

    if let Some(top) = recommendations.first() {
        debug!(
            asteroid_mass_kg = body.mass_kg,
            candidates = recommendations.len(),
            top = %top.label(),
            top_score = top.effectiveness_score,
            "mitigations ranked"
        );
    }

    Ok(MitigationReport {
        asteroid_mass_kg: body.mass_kg,
        recommendations,
        kinetic_sweep,
        tractor_sweep,
    })
}

/// A body light enough to overflow delta-v cannot be scored.
fn check_finite(option: &MitigationOption) -> Result<(), EngineError> {
    let min_lead_time_years = match option.details {
        StrategyDetails::KineticImpactor {
            min_lead_time_years,
            ..
        } => min_lead_time_years,
        _ => 0.0,
    };
    let fields = [
        ("delta_v_m_s", option.delta_v_m_s),
        ("effectiveness_score", option.effectiveness_score),
        ("min_lead_time_years", min_lead_time_years),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(EngineError::InvalidScenarioData { field, value });
        }
    }
    Ok(())
}
