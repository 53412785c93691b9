//! Test utilities for impact and mitigation tests.
//!
//! Provides scenario fixtures and assertions for the ordering invariants
//! the calculators must uphold.

use crate::impact::BlastRing;
use crate::mitigation::MitigationOption;
use crate::scenarios::Scenario;

/// Fixtures for creating test scenarios.
pub mod fixtures {
    use super::*;

    /// Build a scenario with the given physical inputs.
    pub fn scenario(diameter_meters: f64, density_kg_m3: f64, velocity_km_s: f64) -> Scenario {
        Scenario {
            id: "test".to_string(),
            name: "Test Scenario".to_string(),
            diameter_meters,
            density_kg_m3,
            velocity_km_s,
            impact_angle_deg: 45.0,
            time_to_impact_years: Some(10.0),
        }
    }

    /// 100 m, 3000 kg/m³, 20 km/s.
    ///
    /// mass ≈ 1.571e9 kg, KE ≈ 3.1416e17 J, yield ≈ 7.51e7 (nominal) Mt.
    pub fn reference_scenario() -> Scenario {
        scenario(100.0, 3000.0, 20.0)
    }
}

/// Assertions for ordering invariants.
pub mod assertions {
    use super::*;

    /// Assert ring radii strictly increase and are finite and non-negative.
    ///
    /// # Panics
    /// Panics on the first ring that breaks the ordering.
    pub fn assert_rings_strictly_ordered(rings: &[BlastRing]) {
        for ring in rings {
            assert!(
                ring.radius_km.is_finite() && ring.radius_km >= 0.0,
                "{:?} radius is {}",
                ring.kind,
                ring.radius_km
            );
        }
        for pair in rings.windows(2) {
            assert!(
                pair[0].radius_km < pair[1].radius_km,
                "{:?} ({} km) should be inside {:?} ({} km)",
                pair[0].kind,
                pair[0].radius_km,
                pair[1].kind,
                pair[1].radius_km
            );
        }
    }

    /// Assert options are sorted by descending effectiveness score.
    pub fn assert_ranked(options: &[MitigationOption]) {
        for pair in options.windows(2) {
            assert!(
                pair[0].effectiveness_score >= pair[1].effectiveness_score,
                "{} ({}) ranked above {} ({})",
                pair[0].label(),
                pair[0].effectiveness_score,
                pair[1].label(),
                pair[1].effectiveness_score
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact::BlastRingKind;

    #[test]
    fn test_reference_scenario_is_valid() {
        assert!(fixtures::reference_scenario().validate().is_ok());
    }

    #[test]
    #[should_panic(expected = "should be inside")]
    fn test_ordering_assertion_catches_inversion() {
        let ring = |kind, radius_km| BlastRing {
            kind,
            overpressure_psi: 0.0,
            radius_km,
            description: String::new(),
        };
        assertions::assert_rings_strictly_ordered(&[
            ring(BlastRingKind::SevereDamage, 2.0),
            ring(BlastRingKind::ModerateDamage, 1.0),
        ]);
    }
}
