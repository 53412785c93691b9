//! Impact Deflect - Asteroid Impact Effects and Deflection Assessment
//!
//! A library crate that turns an impact scenario (diameter, density,
//! speed) into impact effects (energy, TNT-equivalent yield, crater size,
//! blast rings) and a ranked set of deflection options (kinetic impactor,
//! gravity tractor, nuclear deflection).

pub mod config;
pub mod error;
pub mod impact;
pub mod mitigation;
pub mod scenarios;
pub mod service;
pub mod store;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use config::EngineConfig;
pub use error::{ConfigError, EngineError, StoreError};
pub use impact::{ImpactResult, compute_impact};
pub use mitigation::{MitigationOption, MitigationReport, evaluate_mitigations};
pub use scenarios::Scenario;
pub use service::ImpactService;
pub use store::{MemoryStore, ScenarioStore};
