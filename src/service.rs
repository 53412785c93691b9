//! Request/response boundary around the calculators.
//!
//! A transport wrapper hands over the raw request body (`{"scenarioId": ...}`)
//! and gets back a status code plus a JSON body. The service fetches the
//! scenario from the store, runs the calculator, persists the result rows
//! and only then reports success.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::impact::{ImpactResult, compute_impact};
use crate::mitigation::{MitigationOption, MitigationReport, evaluate_mitigations};
use crate::scenarios::Scenario;
use crate::store::{MitigationRunRecord, NewSimResult, ScenarioStore};

/// Request body accepted by both operations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRequest {
    #[serde(rename = "scenarioId", default)]
    pub scenario_id: Option<String>,
}

impl ScenarioRequest {
    pub fn new(scenario_id: impl Into<String>) -> Self {
        Self {
            scenario_id: Some(scenario_id.into()),
        }
    }

    /// The scenario id, if present and non-empty.
    pub fn id(&self) -> Result<&str, EngineError> {
        match self.scenario_id.as_deref() {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(EngineError::InvalidScenarioId),
        }
    }
}

/// Impact result with the id of its stored row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StoredImpact {
    pub id: String,
    #[serde(flatten)]
    pub result: ImpactResult,
}

/// Success body of the impact operation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactResponse {
    pub success: bool,
    pub result: StoredImpact,
}

/// Scenario summary echoed by the mitigation operation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub asteroid_mass_kg: f64,
    pub time_to_impact_years: Option<f64>,
}

/// Success body of the mitigation operation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MitigationResponse {
    pub success: bool,
    pub scenario: ScenarioSummary,
    /// Highest effectiveness first.
    pub recommendations: Vec<MitigationOption>,
}

/// What the transport layer sends back.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: serde_json::Value,
}

impl Response {
    fn from_result<T: Serialize>(result: Result<T, EngineError>) -> Self {
        match result {
            Ok(body) => match serde_json::to_value(body) {
                Ok(body) => Self { status: 200, body },
                Err(e) => Self::error(500, format!("failed to encode response: {e}")),
            },
            Err(e) => Self::error(e.status(), e.to_string()),
        }
    }

    fn error(status: u16, message: String) -> Self {
        Self {
            status,
            body: serde_json::json!({ "error": message }),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Impact and mitigation service over a scenario store.
pub struct ImpactService<S> {
    store: S,
    config: EngineConfig,
}

impl<S: ScenarioStore> ImpactService<S> {
    pub fn new(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn fetch(&self, id: &str) -> Result<Scenario, EngineError> {
        match self.store.fetch_scenario(id) {
            Ok(Some(scenario)) => Ok(scenario),
            Ok(None) => Err(EngineError::ScenarioNotFound {
                id: id.to_string(),
                reason: "no matching row".to_string(),
            }),
            Err(e) => Err(EngineError::ScenarioNotFound {
                id: id.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Compute impact effects and store one `sim_results` row.
    pub fn compute_impact(
        &mut self,
        request: &ScenarioRequest,
    ) -> Result<ImpactResponse, EngineError> {
        let id = request.id()?;
        info!(scenario_id = id, "Computing impact for scenario");

        let scenario = self.fetch(id)?;
        let result = compute_impact(&scenario, &self.config.impact)?;
        let stored = self
            .store
            .insert_sim_result(NewSimResult::from_result(id, &result))?;

        info!(
            scenario_id = id,
            result_id = %stored.id,
            tnt_megatons = result.tnt_megatons,
            "Successfully computed impact"
        );

        Ok(ImpactResponse {
            success: true,
            result: StoredImpact {
                id: stored.id,
                result,
            },
        })
    }

    /// Evaluate mitigations and store one `mitigation_run` row per swept strategy.
    ///
    /// Both rows are attempted even if the first write fails; any failure
    /// is then reported as a persistence error.
    pub fn compare_mitigation(
        &mut self,
        request: &ScenarioRequest,
    ) -> Result<MitigationResponse, EngineError> {
        let id = request.id()?;
        info!(scenario_id = id, "Computing mitigation strategies for scenario");

        let scenario = self.fetch(id)?;
        let report = evaluate_mitigations(&scenario, &self.config.mitigation)?;
        self.persist_runs(id, &report)?;

        info!(
            scenario_id = id,
            candidates = report.recommendations.len(),
            "Successfully computed mitigation strategies"
        );

        Ok(MitigationResponse {
            success: true,
            scenario: ScenarioSummary {
                name: scenario.name,
                asteroid_mass_kg: report.asteroid_mass_kg,
                time_to_impact_years: scenario.time_to_impact_years,
            },
            recommendations: report.recommendations,
        })
    }

    fn persist_runs(&mut self, id: &str, report: &MitigationReport) -> Result<(), EngineError> {
        let picks = [
            (report.best_kinetic(), report.kinetic_sweep.as_slice()),
            (report.best_tractor(), report.tractor_sweep.as_slice()),
        ];

        let mut first_error = None;
        for (best, sweep) in picks {
            let Some(best) = best else {
                warn!(scenario_id = id, "Empty sweep; no mitigation_run row written");
                continue;
            };
            let outcome = MitigationRunRecord::from_sweep(id, best, sweep)
                .and_then(|row| self.store.insert_mitigation_run(row));
            if let Err(e) = outcome {
                error!(
                    scenario_id = id,
                    strategy = best.strategy().name(),
                    "Failed to insert mitigation_run: {e}"
                );
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }

    /// Transport entry point for the impact operation.
    pub fn handle_compute_impact(&mut self, body: &str) -> Response {
        let result = parse_request(body).and_then(|request| self.compute_impact(&request));
        log_failure("computeImpact", &result);
        Response::from_result(result)
    }

    /// Transport entry point for the mitigation operation.
    pub fn handle_compare_mitigation(&mut self, body: &str) -> Response {
        let result = parse_request(body).and_then(|request| self.compare_mitigation(&request));
        log_failure("compareMitigation", &result);
        Response::from_result(result)
    }
}

fn parse_request(body: &str) -> Result<ScenarioRequest, EngineError> {
    serde_json::from_str(body).map_err(|e| EngineError::MalformedRequest(e.to_string()))
}

fn log_failure<T>(operation: &str, result: &Result<T, EngineError>) {
    if let Err(e) = result {
        error!(operation, status = e.status(), "Error in {operation}: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn service() -> ImpactService<MemoryStore> {
        ImpactService::new(MemoryStore::with_presets(), EngineConfig::default())
    }

    #[test]
    fn test_request_id() {
        assert_eq!(ScenarioRequest::new("x").id().unwrap(), "x");
        assert!(ScenarioRequest::new("").id().is_err());
        assert!(ScenarioRequest::default().id().is_err());
    }

    #[test]
    fn test_impact_round_trip() {
        let mut service = service();
        let response = service.handle_compute_impact(r#"{"scenarioId":"reference"}"#);

        assert_eq!(response.status, 200);
        assert_eq!(response.body["success"], true);
        assert!(response.body["result"]["id"].is_string());
        assert_eq!(
            response.body["result"]["blast_rings"].as_array().map(Vec::len),
            Some(5)
        );
        assert_eq!(service.store().sim_results().len(), 1);
    }

    #[test]
    fn test_missing_id() {
        let response = service().handle_compute_impact("{}");
        assert_eq!(response.status, 400);
        assert_eq!(response.body["error"], "scenarioId is required");
    }

    #[test]
    fn test_malformed_body() {
        let response = service().handle_compare_mitigation("not json");
        assert_eq!(response.status, 400);
        assert!(response.body["error"].is_string());
    }

    #[test]
    fn test_unknown_scenario() {
        let mut service = service();
        let response = service.handle_compare_mitigation(r#"{"scenarioId":"atlantis"}"#);
        assert_eq!(response.status, 404);
        assert!(service.store().mitigation_runs().is_empty());
    }

    #[test]
    fn test_mitigation_writes_two_runs() {
        let mut service = service();
        let response = service
            .compare_mitigation(&ScenarioRequest::new("reference"))
            .unwrap();

        assert_eq!(response.scenario.name, "Reference Impactor");
        assert_eq!(response.scenario.time_to_impact_years, Some(10.0));
        assert_eq!(response.recommendations.len(), 9);
        assert_eq!(service.store().mitigation_runs().len(), 2);
    }
}
