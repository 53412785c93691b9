//! Error types for the engine, the scenario store and configuration loading.

/// Failure of a single engine invocation.
///
/// Every variant is terminal for the request that produced it; nothing
/// inside the engine retries.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("scenarioId is required")]
    InvalidScenarioId,

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    #[error("failed to fetch scenario {id}: {reason}")]
    ScenarioNotFound { id: String, reason: String },

    #[error("invalid scenario data: {field} = {value} (must be positive and finite)")]
    InvalidScenarioData { field: &'static str, value: f64 },

    #[error("failed to persist results: {0}")]
    Persistence(#[from] StoreError),
}

impl EngineError {
    /// Status code reported to the transport layer for this failure.
    pub fn status(&self) -> u16 {
        match self {
            EngineError::InvalidScenarioId | EngineError::MalformedRequest(_) => 400,
            EngineError::ScenarioNotFound { .. } => 404,
            EngineError::InvalidScenarioData { .. } => 422,
            EngineError::Persistence(_) => 500,
        }
    }
}

/// Failure reported by a [`crate::store::ScenarioStore`] implementation.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate scenario id {0}")]
    DuplicateScenario(String),

    #[error("{table} write rejected: {reason}")]
    WriteRejected { table: &'static str, reason: String },
}

/// Failure while loading or validating an [`crate::config::EngineConfig`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid constant {name} = {value}: {reason}")]
    InvalidConstant {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("blast coefficients must strictly increase (entry {index} is {value} km)")]
    UnorderedBlastZones { index: usize, value: f64 },

    #[error("blast zone {index} ({kind}) is not further out than the zone before it")]
    UnorderedBlastKinds { index: usize, kind: &'static str },

    #[error("{0} sweep is empty")]
    EmptySweep(&'static str),
}
