//! Engine configuration loaded from a TOML file.
//!
//! [`EngineConfig`] bundles the constant tables the calculators take as
//! arguments. Every field defaults to the compiled-in value, so a TOML
//! file only needs the keys it overrides:
//!
//! ```toml
//! [impact]
//! tnt_joules_per_megaton = 4.184e15
//!
//! [mitigation.kinetic]
//! impactor_masses_kg = [500.0, 2000.0, 20000.0]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ConfigError;
use crate::impact::ImpactConstants;
use crate::mitigation::MitigationConstants;

/// All tunable constants of the engine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub impact: ImpactConstants,
    pub mitigation: MitigationConstants,
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load a TOML file, falling back to defaults on any failure.
    ///
    /// A missing file is not an error; parse and validation errors are
    /// logged.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No {} found; using compiled defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                info!("Loaded engine config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.impact.validate()?;
        self.mitigation.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = EngineConfig::from_toml_str(
            r#"
            [impact]
            tnt_joules_per_megaton = 4.184e15

            [mitigation.kinetic]
            impactor_masses_kg = [250.0, 750.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.impact.tnt_joules_per_megaton, 4.184e15);
        assert_eq!(config.impact.crater_scaling_k, 0.074);
        assert_eq!(config.mitigation.kinetic.impactor_masses_kg, vec![250.0, 750.0]);
        assert_eq!(config.mitigation.kinetic.beta, 3.6);
        assert_eq!(config.mitigation.tractor.durations_years.len(), 4);
    }

    #[test]
    fn test_blast_zones_override() {
        let config = EngineConfig::from_toml_str(
            r#"
            [impact.blast.crater]
            enabled = false

            [[impact.blast.zones]]
            kind = "severe_damage"
            coefficient_km = 1.0
            overpressure_psi = 20.0
            description = "Severe"

            [[impact.blast.zones]]
            kind = "light_damage"
            coefficient_km = 5.0
            overpressure_psi = 1.0
            description = "Light"
            "#,
        )
        .unwrap();

        assert!(!config.impact.blast.crater.enabled);
        assert_eq!(config.impact.blast.zones.len(), 2);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = EngineConfig::from_toml_str(
            r#"
            [mitigation.tractor]
            durations_years = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::EmptySweep(_)));

        let err = EngineConfig::from_toml_str("[impact]\ngravity_m_s2 = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConstant { .. }));
    }

    #[test]
    fn test_syntax_error() {
        assert!(matches!(
            EngineConfig::from_toml_str("[impact"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = EngineConfig::load_or_default("does/not/exist.toml");
        assert_eq!(config, EngineConfig::default());
    }
}
