//! Scenario store boundary and persisted record types.
//!
//! The engine reads one scenario before computing and writes result rows
//! after. [`ScenarioStore`] is the seam to whatever database backs it;
//! [`MemoryStore`] keeps everything in process and is what the CLI and
//! the tests use.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::impact::{BlastRing, ImpactResult};
use crate::mitigation::{MitigationOption, Strategy};
use crate::scenarios::{SCENARIOS, Scenario};

/// A `sim_results` row before insertion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewSimResult {
    pub scenario_id: String,
    pub mass_kg: f64,
    pub kinetic_energy_joules: f64,
    pub tnt_megatons: f64,
    pub crater_diameter_meters: f64,
    pub blast_rings: Vec<BlastRing>,
}

impl NewSimResult {
    pub fn from_result(scenario_id: &str, result: &ImpactResult) -> Self {
        Self {
            scenario_id: scenario_id.to_string(),
            mass_kg: result.mass_kg,
            kinetic_energy_joules: result.kinetic_energy_joules,
            tnt_megatons: result.tnt_megatons,
            crater_diameter_meters: result.crater_diameter_meters,
            blast_rings: result.blast_rings.clone(),
        }
    }
}

/// A stored `sim_results` row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimResultRecord {
    pub id: String,
    #[serde(flatten)]
    pub row: NewSimResult,
}

/// A `mitigation_run` row: one strategy's summary pick plus its full sweep.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MitigationRunRecord {
    pub scenario_id: String,
    pub strategy_type: Strategy,
    pub delta_v_m_s: f64,
    pub impactor_mass_kg: Option<f64>,
    pub duration_years: Option<f64>,
    /// Full sweep, stored opaquely for audit.
    pub recommendations: serde_json::Value,
}

impl MitigationRunRecord {
    /// Build a run row from a summary pick and the sweep it came from.
    pub fn from_sweep(
        scenario_id: &str,
        best: &MitigationOption,
        sweep: &[MitigationOption],
    ) -> Result<Self, StoreError> {
        use crate::mitigation::StrategyDetails;

        let (impactor_mass_kg, duration_years) = match best.details {
            StrategyDetails::KineticImpactor {
                impactor_mass_kg, ..
            } => (Some(impactor_mass_kg), None),
            StrategyDetails::GravityTractor { duration_years, .. } => (None, Some(duration_years)),
            StrategyDetails::NuclearDeflection { .. } => (None, None),
        };

        Ok(Self {
            scenario_id: scenario_id.to_string(),
            strategy_type: best.strategy(),
            delta_v_m_s: best.delta_v_m_s,
            impactor_mass_kg,
            duration_years,
            recommendations: serde_json::to_value(sweep)?,
        })
    }
}

/// Record store collaborator.
pub trait ScenarioStore {
    /// Look up a scenario. `Ok(None)` means no such row.
    fn fetch_scenario(&self, id: &str) -> Result<Option<Scenario>, StoreError>;

    /// Insert a `sim_results` row and return it with its generated id.
    fn insert_sim_result(&mut self, row: NewSimResult) -> Result<SimResultRecord, StoreError>;

    /// Insert a `mitigation_run` row.
    fn insert_mitigation_run(&mut self, row: MitigationRunRecord) -> Result<(), StoreError>;
}

/// In-process store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    scenarios: BTreeMap<String, Scenario>,
    sim_results: Vec<SimResultRecord>,
    mitigation_runs: Vec<MitigationRunRecord>,
    next_result_id: u64,
}

/// Everything a [`MemoryStore`] has persisted, for dumping to disk.
#[derive(Serialize)]
pub struct PersistedRows<'a> {
    pub sim_results: &'a [SimResultRecord],
    pub mitigation_run: &'a [MitigationRunRecord],
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with every built-in preset.
    pub fn with_presets() -> Self {
        let mut store = Self::new();
        for preset in SCENARIOS {
            store
                .scenarios
                .insert(preset.id.to_string(), preset.to_scenario());
        }
        store
    }

    /// Store seeded from a JSON array of scenario records.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let scenarios: Vec<Scenario> = serde_json::from_str(json)?;
        let mut store = Self::new();
        for scenario in scenarios {
            store.add_scenario(scenario)?;
        }
        Ok(store)
    }

    /// Store seeded from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn add_scenario(&mut self, scenario: Scenario) -> Result<(), StoreError> {
        if self.scenarios.contains_key(&scenario.id) {
            return Err(StoreError::DuplicateScenario(scenario.id));
        }
        self.scenarios.insert(scenario.id.clone(), scenario);
        Ok(())
    }

    pub fn scenarios(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.values()
    }

    pub fn sim_results(&self) -> &[SimResultRecord] {
        &self.sim_results
    }

    pub fn mitigation_runs(&self) -> &[MitigationRunRecord] {
        &self.mitigation_runs
    }

    pub fn persisted(&self) -> PersistedRows<'_> {
        PersistedRows {
            sim_results: &self.sim_results,
            mitigation_run: &self.mitigation_runs,
        }
    }

    /// Write all persisted rows as pretty JSON.
    pub fn dump(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.persisted())?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl ScenarioStore for MemoryStore {
    fn fetch_scenario(&self, id: &str) -> Result<Option<Scenario>, StoreError> {
        Ok(self.scenarios.get(id).cloned())
    }

    fn insert_sim_result(&mut self, row: NewSimResult) -> Result<SimResultRecord, StoreError> {
        self.next_result_id += 1;
        let record = SimResultRecord {
            id: format!("sim-{:06}", self.next_result_id),
            row,
        };
        self.sim_results.push(record.clone());
        Ok(record)
    }

    fn insert_mitigation_run(&mut self, row: MitigationRunRecord) -> Result<(), StoreError> {
        self.mitigation_runs.push(row);
        Ok(())
    }
}
