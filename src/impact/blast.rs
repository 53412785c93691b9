//! Ground-level damage rings around the impact point.
//!
//! Radii follow cube-root yield scaling from nuclear blast data:
//! R = C × Y^(1/3), with Y in (nominal) megatons and R in km. The
//! coefficients are empirical and are treated as configuration, never
//! derived.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::meters_to_km;

/// Damage zone classification, innermost first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlastRingKind {
    Crater,
    SevereDamage,
    ModerateDamage,
    LightDamage,
    ThermalRadiation,
}

impl BlastRingKind {
    /// Short human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            BlastRingKind::Crater => "Crater",
            BlastRingKind::SevereDamage => "Severe damage",
            BlastRingKind::ModerateDamage => "Moderate damage",
            BlastRingKind::LightDamage => "Light damage",
            BlastRingKind::ThermalRadiation => "Thermal radiation",
        }
    }
}

/// One computed damage ring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlastRing {
    #[serde(rename = "type")]
    pub kind: BlastRingKind,
    /// Peak overpressure at the ring edge (psi). Zero for thermal-only zones.
    pub overpressure_psi: f64,
    pub radius_km: f64,
    pub description: String,
}

/// Scaling entry for one overpressure zone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlastZone {
    pub kind: BlastRingKind,
    /// Radius in km for a 1 Mt (nominal) yield.
    pub coefficient_km: f64,
    pub overpressure_psi: f64,
    pub description: String,
}

impl BlastZone {
    fn new(kind: BlastRingKind, coefficient_km: f64, overpressure_psi: f64, description: &str) -> Self {
        Self {
            kind,
            coefficient_km,
            overpressure_psi,
            description: description.to_string(),
        }
    }

    /// Ring radius (km) for the given yield.
    #[inline]
    pub fn radius_km(&self, tnt_megatons: f64) -> f64 {
        self.coefficient_km * tnt_megatons.cbrt()
    }
}

/// The crater drawn as the innermost ring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CraterRing {
    pub enabled: bool,
    pub overpressure_psi: f64,
    pub description: String,
}

impl Default for CraterRing {
    fn default() -> Self {
        Self {
            enabled: true,
            overpressure_psi: 100.0,
            description: "Impact crater - total destruction".to_string(),
        }
    }
}

/// Blast ring scaling table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlastRingTable {
    pub crater: CraterRing,
    /// Overpressure zones ordered from most to least severe.
    pub zones: Vec<BlastZone>,
}

impl Default for BlastRingTable {
    fn default() -> Self {
        Self {
            crater: CraterRing::default(),
            zones: vec![
                BlastZone::new(
                    BlastRingKind::SevereDamage,
                    0.8,
                    20.0,
                    "Severe structural damage, near-total casualties",
                ),
                BlastZone::new(
                    BlastRingKind::ModerateDamage,
                    2.2,
                    5.0,
                    "Moderate structural damage, significant casualties",
                ),
                BlastZone::new(
                    BlastRingKind::LightDamage,
                    6.0,
                    1.0,
                    "Light damage, broken windows, minor injuries",
                ),
                BlastZone::new(
                    BlastRingKind::ThermalRadiation,
                    8.5,
                    0.0,
                    "3rd degree burns from thermal radiation",
                ),
            ],
        }
    }
}

impl BlastRingTable {
    /// Compute rings for a given yield and crater size, smallest radius first.
    pub fn rings(&self, tnt_megatons: f64, crater_diameter_meters: f64) -> Vec<BlastRing> {
        let mut rings = Vec::with_capacity(self.zones.len() + 1);

        if self.crater.enabled {
            rings.push(BlastRing {
                kind: BlastRingKind::Crater,
                overpressure_psi: self.crater.overpressure_psi,
                radius_km: meters_to_km(crater_diameter_meters / 2.0),
                description: self.crater.description.clone(),
            });
        }

        rings.extend(self.zones.iter().map(|zone| BlastRing {
            kind: zone.kind,
            overpressure_psi: zone.overpressure_psi,
            radius_km: zone.radius_km(tnt_megatons),
            description: zone.description.clone(),
        }));

        rings
    }

    /// Reject tables whose rings could come out of order or negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.crater.overpressure_psi < 0.0 {
            return Err(ConfigError::InvalidConstant {
                name: "crater.overpressure_psi",
                value: self.crater.overpressure_psi,
                reason: "must be non-negative",
            });
        }

        let mut previous = 0.0;
        let mut previous_kind = BlastRingKind::Crater;
        for (index, zone) in self.zones.iter().enumerate() {
            if zone.kind <= previous_kind {
                return Err(ConfigError::UnorderedBlastKinds {
                    index,
                    kind: zone.kind.label(),
                });
            }
            if !(zone.coefficient_km.is_finite() && zone.coefficient_km > previous) {
                return Err(ConfigError::UnorderedBlastZones {
                    index,
                    value: zone.coefficient_km,
                });
            }
            if zone.overpressure_psi < 0.0 {
                return Err(ConfigError::InvalidConstant {
                    name: "zones.overpressure_psi",
                    value: zone.overpressure_psi,
                    reason: "must be non-negative",
                });
            }
            previous = zone.coefficient_km;
            previous_kind = zone.kind;
        }
        Ok(())
    }
}
