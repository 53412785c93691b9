//! Preset scenario definitions.
//!
//! Reference bodies spanning airburst-class objects up to a
//! Chicxulub-class impactor. Values are representative published
//! estimates, rounded.

use super::Scenario;

/// A built-in scenario with static storage.
#[derive(Clone, Copy, Debug)]
pub struct ScenarioPreset {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    /// Diameter (m).
    pub diameter_meters: f64,
    /// Bulk density (kg/m³).
    pub density_kg_m3: f64,
    /// Approach speed (km/s).
    pub velocity_km_s: f64,
    /// Entry angle (degrees).
    pub impact_angle_deg: f64,
    /// Warning time (years).
    pub time_to_impact_years: Option<f64>,
}

impl ScenarioPreset {
    /// Build an owned scenario record from this preset.
    pub fn to_scenario(&self) -> Scenario {
        Scenario {
            id: self.id.to_string(),
            name: self.name.to_string(),
            diameter_meters: self.diameter_meters,
            density_kg_m3: self.density_kg_m3,
            velocity_km_s: self.velocity_km_s,
            impact_angle_deg: self.impact_angle_deg,
            time_to_impact_years: self.time_to_impact_years,
        }
    }
}

/// All available preset scenarios.
pub static SCENARIOS: &[ScenarioPreset] = &[
    REFERENCE,
    CHELYABINSK,
    TUNGUSKA,
    DIMORPHOS,
    APOPHIS,
    BENNU,
    CHICXULUB,
];

/// Look up a preset by id.
pub fn find(id: &str) -> Option<&'static ScenarioPreset> {
    SCENARIOS.iter().find(|preset| preset.id == id)
}

/// Stony 100 m body at 20 km/s. Used as the worked example throughout the tests.
pub static REFERENCE: ScenarioPreset = ScenarioPreset {
    id: "reference",
    name: "Reference Impactor",
    description: "100 m stony body at 20 km/s.",
    diameter_meters: 100.0,
    density_kg_m3: 3000.0,
    velocity_km_s: 20.0,
    impact_angle_deg: 45.0,
    time_to_impact_years: Some(10.0),
};

/// 2013 Chelyabinsk superbolide.
pub static CHELYABINSK: ScenarioPreset = ScenarioPreset {
    id: "chelyabinsk",
    name: "Chelyabinsk",
    description: "~19 m ordinary chondrite, shallow entry. No warning.",
    diameter_meters: 19.0,
    density_kg_m3: 3300.0,
    velocity_km_s: 19.0,
    impact_angle_deg: 18.0,
    time_to_impact_years: None,
};

/// 1908 Tunguska event.
pub static TUNGUSKA: ScenarioPreset = ScenarioPreset {
    id: "tunguska",
    name: "Tunguska",
    description: "~50 m stony body, ~2000 km² of forest flattened.",
    diameter_meters: 50.0,
    density_kg_m3: 2200.0,
    velocity_km_s: 27.0,
    impact_angle_deg: 35.0,
    time_to_impact_years: None,
};

/// DART target moonlet.
pub static DIMORPHOS: ScenarioPreset = ScenarioPreset {
    id: "dimorphos",
    name: "Dimorphos",
    description: "~160 m rubble pile, the DART kinetic impact test target.",
    diameter_meters: 160.0,
    density_kg_m3: 2400.0,
    velocity_km_s: 6.1,
    impact_angle_deg: 45.0,
    time_to_impact_years: Some(5.0),
};

/// 99942 Apophis on a hypothetical collision course.
pub static APOPHIS: ScenarioPreset = ScenarioPreset {
    id: "apophis",
    name: "Apophis",
    description: "~340 m S-type. Hypothetical impact after the 2029 flyby.",
    diameter_meters: 340.0,
    density_kg_m3: 3200.0,
    velocity_km_s: 12.6,
    impact_angle_deg: 45.0,
    time_to_impact_years: Some(7.0),
};

/// 101955 Bennu, low-density carbonaceous rubble pile.
pub static BENNU: ScenarioPreset = ScenarioPreset {
    id: "bennu",
    name: "Bennu",
    description: "~490 m carbonaceous rubble pile with decades of warning.",
    diameter_meters: 490.0,
    density_kg_m3: 1190.0,
    velocity_km_s: 12.7,
    impact_angle_deg: 45.0,
    time_to_impact_years: Some(157.0),
};

/// K-Pg extinction-class impactor.
pub static CHICXULUB: ScenarioPreset = ScenarioPreset {
    id: "chicxulub",
    name: "Chicxulub",
    description: "~10 km extinction-class impactor.",
    diameter_meters: 10_000.0,
    density_kg_m3: 3000.0,
    velocity_km_s: 20.0,
    impact_angle_deg: 60.0,
    time_to_impact_years: None,
};
