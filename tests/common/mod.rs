//! Common test utilities for integration tests.

#![allow(dead_code)]

use impact_deflect::StoreError;
use impact_deflect::scenarios::Scenario;
use impact_deflect::store::{
    MemoryStore, MitigationRunRecord, NewSimResult, ScenarioStore, SimResultRecord,
};
use impact_deflect::mitigation::Strategy;

/// Build a scenario with the given physical inputs.
pub fn scenario(id: &str, diameter_meters: f64, density_kg_m3: f64, velocity_km_s: f64) -> Scenario {
    Scenario {
        id: id.to_string(),
        name: format!("Scenario {id}"),
        diameter_meters,
        density_kg_m3,
        velocity_km_s,
        impact_angle_deg: 45.0,
        time_to_impact_years: None,
    }
}

/// 100 m, 3000 kg/m³, 20 km/s.
pub fn reference(id: &str) -> Scenario {
    scenario(id, 100.0, 3000.0, 20.0)
}

/// Store wrapper that rejects selected writes.
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub reject_sim_results: bool,
    pub reject_strategy: Option<Strategy>,
    pub attempted_runs: Vec<Strategy>,
}

impl FlakyStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            reject_sim_results: false,
            reject_strategy: None,
            attempted_runs: Vec::new(),
        }
    }
}

impl ScenarioStore for FlakyStore {
    fn fetch_scenario(&self, id: &str) -> Result<Option<Scenario>, StoreError> {
        self.inner.fetch_scenario(id)
    }

    fn insert_sim_result(&mut self, row: NewSimResult) -> Result<SimResultRecord, StoreError> {
        if self.reject_sim_results {
            return Err(StoreError::WriteRejected {
                table: "sim_results",
                reason: "connection reset".to_string(),
            });
        }
        self.inner.insert_sim_result(row)
    }

    fn insert_mitigation_run(&mut self, row: MitigationRunRecord) -> Result<(), StoreError> {
        self.attempted_runs.push(row.strategy_type);
        if self.reject_strategy == Some(row.strategy_type) {
            return Err(StoreError::WriteRejected {
                table: "mitigation_run",
                reason: "connection reset".to_string(),
            });
        }
        self.inner.insert_mitigation_run(row)
    }
}
