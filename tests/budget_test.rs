use assert_float_eq::assert_float_absolute_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mission_rations_rs::budget::compute_life_support;
use mission_rations_rs::models::{
    ActivityLevel, CrewMember, MissionConfig, RecyclerConfig, ScrubberConfig, WaterRecyclerConfig,
};

fn config_without_reclaim() -> MissionConfig {
    MissionConfig {
        duration_days: 1,
        activity: ActivityLevel::Moderate,
        base_weight_limit_kg: 850.0,
        oxygen_tank_weight_per_kg: 1.2,
        nitrogen_tank_weight_per_kg: 1.2,
        hygiene_water_per_day_g: 1500.0,
        scrubber: ScrubberConfig {
            enabled: false,
            efficiency: 0.0,
            weight_per_kg: 0.0,
        },
        recycler: RecyclerConfig {
            enabled: false,
            efficiency: 0.0,
            weight_kg: 0.0,
        },
        water_recycler: WaterRecyclerConfig {
            enabled: false,
            efficiency: 0.0,
            weight_kg: 0.0,
        },
        crew: vec![CrewMember::new("Alexis", 70.0)],
    }
}

#[test]
fn test_reference_scenario_single_moderate_day() {
    let result = compute_life_support(&config_without_reclaim(), 0.0).unwrap();

    assert_float_absolute_eq!(result.o2_required_kg, 1.125, 0.01);
    assert_float_absolute_eq!(result.o2_tank_mass_kg, 2.475, 0.01);
    assert_eq!(result.o2_reclaimed_kg, 0.0);
}

#[test]
fn test_tank_mass_formula_holds_without_reclaim() {
    // Across a sweep of generated configurations with scrubber and
    // recycler disabled, the tank carries the full requirement.
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..50 {
        let mut config = config_without_reclaim();
        config.duration_days = rng.gen_range(1..=120);
        config.activity = match rng.gen_range(0..3) {
            0 => ActivityLevel::Low,
            1 => ActivityLevel::Moderate,
            _ => ActivityLevel::Daily,
        };
        config.oxygen_tank_weight_per_kg = rng.gen_range(0.1..3.0);
        config.crew = (0..rng.gen_range(1..=6))
            .map(|i| CrewMember::new(format!("crew{}", i), rng.gen_range(45.0..110.0)))
            .collect();

        let result = compute_life_support(&config, 0.0).unwrap();
        assert_eq!(result.o2_reclaimed_kg, 0.0);
        assert_float_absolute_eq!(
            result.o2_tank_mass_kg,
            result.o2_required_kg * (1.0 + config.oxygen_tank_weight_per_kg),
            0.05
        );
    }
}

#[test]
fn test_verdict_matches_totals_over_generated_configs() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let mut config = config_without_reclaim();
        config.duration_days = rng.gen_range(1..=90);
        config.base_weight_limit_kg = rng.gen_range(1.0..2000.0);
        config.hygiene_water_per_day_g = rng.gen_range(0.0..3000.0);
        config.scrubber = ScrubberConfig {
            enabled: rng.gen_bool(0.5),
            efficiency: rng.gen_range(0.0..100.0),
            weight_per_kg: rng.gen_range(0.0..2.0),
        };
        config.recycler = RecyclerConfig {
            enabled: rng.gen_bool(0.5),
            efficiency: rng.gen_range(0.0..100.0),
            weight_kg: rng.gen_range(0.0..100.0),
        };
        config.water_recycler = WaterRecyclerConfig {
            enabled: rng.gen_bool(0.5),
            efficiency: rng.gen_range(0.0..100.0),
            weight_kg: rng.gen_range(0.0..500.0),
        };
        config.crew = (0..rng.gen_range(1..=8))
            .map(|i| CrewMember::new(format!("crew{}", i), rng.gen_range(45.0..110.0)))
            .collect();
        let meal_mass = rng.gen_range(0.0..50.0);

        let result = compute_life_support(&config, meal_mass).unwrap();

        // The verdict is taken on unrounded totals; only check it where
        // the reported (rounded) fields are clear of the boundary.
        let margin = result.total_life_support_mass_kg - result.weight_limit_kg;
        if margin.abs() > 0.02 {
            assert_eq!(
                result.within_limit,
                margin < 0.0,
                "verdict disagrees with totals for {:?}",
                config
            );
        }
        // Reclaim never exceeds demand.
        assert!(result.o2_reclaimed_kg <= result.o2_required_kg + 0.005);
        assert!(result.o2_tank_mass_kg >= 0.0);
    }
}

#[test]
fn test_scrubber_recycler_stack_sequentially() {
    let mut config = config_without_reclaim();
    config.duration_days = 10;
    config.scrubber = ScrubberConfig {
        enabled: true,
        efficiency: 60.0,
        weight_per_kg: 0.5,
    };
    config.recycler = RecyclerConfig {
        enabled: true,
        efficiency: 50.0,
        weight_kg: 40.0,
    };

    let result = compute_life_support(&config, 0.0).unwrap();

    // CO2: 10 x 1.4 x 1 = 14 kg. Scrubber removes 8.4 kg, recycler gets
    // the 5.6 kg remainder at 50%.
    assert_float_absolute_eq!(result.co2_generated_kg, 14.0, 0.01);
    assert_float_absolute_eq!(result.scrubber_mass_kg, 4.2, 0.01);
    assert_eq!(result.recycler_mass_kg, 40.0);
    let expected_reclaim = (8.4_f64 * 0.8 + 5.6 * 0.5).min(result.o2_required_kg);
    assert_float_absolute_eq!(result.o2_reclaimed_kg, expected_reclaim, 0.01);
}

#[test]
fn test_input_validation_fails_fast() {
    let mut no_crew = config_without_reclaim();
    no_crew.crew.clear();
    let err = compute_life_support(&no_crew, 0.0).unwrap_err();
    assert!(err.to_string().contains("crew"));

    let mut zero_duration = config_without_reclaim();
    zero_duration.duration_days = 0;
    let err = compute_life_support(&zero_duration, 0.0).unwrap_err();
    assert!(err.to_string().contains("duration"));

    assert!("vigorous".parse::<ActivityLevel>().is_err());
}
