//! Property-based tests for the impact calculator using proptest.
//!
//! These tests verify scaling laws and ring ordering across a wide range
//! of impactor sizes, densities and speeds.

use proptest::prelude::*;

use super::{ImpactConstants, compute_impact, kinetic_energy};
use crate::scenarios::sphere_mass;
use crate::test_utils::{assertions, fixtures};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Doubling the diameter multiplies mass by eight.
    #[test]
    fn prop_mass_cubic_in_diameter(
        diameter in 0.1f64..20_000.0,
        density in 500.0f64..8000.0,
    ) {
        let ratio = sphere_mass(2.0 * diameter, density) / sphere_mass(diameter, density);
        prop_assert!((ratio - 8.0).abs() < 1e-9, "ratio = {ratio}");
    }

    /// Mass is linear in density.
    #[test]
    fn prop_mass_linear_in_density(
        diameter in 0.1f64..20_000.0,
        density in 500.0f64..8000.0,
        factor in 1.1f64..4.0,
    ) {
        let ratio = sphere_mass(diameter, density * factor) / sphere_mass(diameter, density);
        prop_assert!((ratio - factor).abs() / factor < 1e-12);
    }

    /// Quadrupling velocity gives sixteen times the energy.
    #[test]
    fn prop_energy_quadratic_in_velocity(
        mass in 1.0f64..1e16,
        velocity in 1_000.0f64..70_000.0,
    ) {
        let ratio = kinetic_energy(mass, 4.0 * velocity) / kinetic_energy(mass, velocity);
        prop_assert!((ratio - 16.0).abs() < 1e-9, "ratio = {ratio}");
    }

    /// Rings stay strictly ordered and finite for any valid scenario.
    #[test]
    fn prop_rings_strictly_ordered(
        diameter in 1.0f64..20_000.0,
        density in 500.0f64..8000.0,
        velocity in 1.0f64..72.0,
    ) {
        let scenario = fixtures::scenario(diameter, density, velocity);
        let result = compute_impact(&scenario, &ImpactConstants::default()).unwrap();

        prop_assert!(result.tnt_megatons.is_finite() && result.tnt_megatons > 0.0);
        prop_assert!(result.crater_diameter_meters.is_finite());
        assertions::assert_rings_strictly_ordered(&result.blast_rings);
    }

    /// Non-positive diameters never produce a result.
    #[test]
    fn prop_non_positive_diameter_rejected(diameter in -1e4f64..=0.0) {
        let scenario = fixtures::scenario(diameter, 3000.0, 20.0);
        prop_assert!(compute_impact(&scenario, &ImpactConstants::default()).is_err());
    }
}
