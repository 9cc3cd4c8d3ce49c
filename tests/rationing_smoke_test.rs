use std::collections::HashMap;

use mission_rations_rs::models::{PlanRequest, ProvisionItem, Sufficiency};
use mission_rations_rs::planner::{
    eligible_items, plan_at_fraction, plan_within_mass_budget, RationSearchConfig,
};

fn item(name: &str, cpg: f64) -> ProvisionItem {
    ProvisionItem {
        name: name.to_string(),
        calories_per_gram: cpg,
        fat_per_gram: 0.0,
        sugar_per_gram: 0.0,
        protein_per_gram: 0.0,
    }
}

fn food_catalog() -> Vec<ProvisionItem> {
    vec![
        item("Oat Bar", 4.2),
        item("Protein Stew", 1.8),
        item("Rice Pack", 3.6),
        item("Lentil Curry", 1.5),
        item("Dried Fruit", 3.2),
        item("Crackers", 4.5),
        item("Egg Scramble", 1.6),
        item("Noodle Bowl", 2.1),
    ]
}

fn beverage_catalog() -> Vec<ProvisionItem> {
    vec![
        item("Tea", 0.1),
        item("Coffee", 0.05),
        item("Cocoa", 0.8),
        item("Orange Drink", 0.45),
        item("Protein Shake", 0.9),
        item("Electrolyte Mix", 0.25),
        item("Lemonade", 0.4),
        item("Milk", 0.6),
    ]
}

fn ratings_for(catalog: &[ProvisionItem], rating: i64) -> HashMap<String, i64> {
    catalog
        .iter()
        .map(|item| (item.name.clone(), rating))
        .collect()
}

fn request(seed: u64) -> PlanRequest {
    PlanRequest {
        crew_name: "Dana".to_string(),
        daily_kcal_target: 2400.0,
        duration_days: 5,
        start_day: 1,
        water_per_meal_g: 250.0,
        seed,
    }
}

#[test]
fn test_full_run_fills_schedule_and_respects_repetition_rules() {
    let foods = eligible_items(&food_catalog(), &ratings_for(&food_catalog(), 4));
    let beverages = eligible_items(&beverage_catalog(), &ratings_for(&beverage_catalog(), 3));

    let plan = plan_within_mass_budget(
        &request(21),
        &foods,
        &beverages,
        1000.0,
        &RationSearchConfig::default(),
    )
    .unwrap();

    assert!(plan.complete);
    assert_eq!(plan.schedule.len(), 15);

    // No immediate repeats.
    for pair in plan.schedule.windows(2) {
        assert_ne!(pair[0].food_name, pair[1].food_name);
        assert_ne!(pair[0].beverage_name, pair[1].beverage_name);
    }

    // No same-slot repeat on consecutive days.
    for meal in &plan.schedule {
        if let Some(prev) = plan
            .schedule
            .iter()
            .find(|m| m.day + 1 == meal.day && m.meal == meal.meal)
        {
            assert_ne!(prev.food_name, meal.food_name);
            assert_ne!(prev.beverage_name, meal.beverage_name);
        }
    }

    // No food repeated within the trailing six-meal window.
    for (i, meal) in plan.schedule.iter().enumerate() {
        let window_start = i.saturating_sub(6);
        for earlier in &plan.schedule[window_start..i] {
            assert_ne!(earlier.food_name, meal.food_name);
        }
    }
}

#[test]
fn test_same_seed_same_schedule() {
    let foods = eligible_items(&food_catalog(), &ratings_for(&food_catalog(), 4));
    let beverages = eligible_items(&beverage_catalog(), &ratings_for(&beverage_catalog(), 3));

    let a = plan_within_mass_budget(
        &request(5),
        &foods,
        &beverages,
        1000.0,
        &RationSearchConfig::default(),
    )
    .unwrap();
    let b = plan_within_mass_budget(
        &request(5),
        &foods,
        &beverages,
        1000.0,
        &RationSearchConfig::default(),
    )
    .unwrap();

    assert_eq!(a.schedule, b.schedule);
    assert_eq!(a.ration_fraction, b.ration_fraction);
    assert_eq!(a.verdict.intake_ratio, b.verdict.intake_ratio);
}

#[test]
fn test_different_seeds_usually_differ() {
    let foods = eligible_items(&food_catalog(), &ratings_for(&food_catalog(), 4));
    let beverages = eligible_items(&beverage_catalog(), &ratings_for(&beverage_catalog(), 3));

    let a = plan_at_fraction(&request(1), &foods, &beverages, 1.0);
    let b = plan_at_fraction(&request(2), &foods, &beverages, 1.0);
    assert_ne!(a.schedule, b.schedule);
}

#[test]
fn test_intake_ratio_monotone_over_fraction_sweep() {
    let foods = eligible_items(&food_catalog(), &ratings_for(&food_catalog(), 4));
    let beverages = eligible_items(&beverage_catalog(), &ratings_for(&beverage_catalog(), 3));

    let mut previous = f64::NEG_INFINITY;
    for step in 0..=8 {
        let fraction = 0.6 + step as f64 * 0.05;
        let plan = plan_at_fraction(&request(13), &foods, &beverages, fraction);
        assert!(
            plan.verdict.intake_ratio > previous,
            "intake ratio did not increase at fraction {}",
            fraction
        );
        previous = plan.verdict.intake_ratio;
    }
}

#[test]
fn test_near_zero_budget_degrades_to_minimum_rations() {
    let foods = eligible_items(&food_catalog(), &ratings_for(&food_catalog(), 4));
    let beverages = eligible_items(&beverage_catalog(), &ratings_for(&beverage_catalog(), 3));

    let plan = plan_within_mass_budget(
        &request(3),
        &foods,
        &beverages,
        0.001,
        &RationSearchConfig::default(),
    )
    .unwrap();

    assert_eq!(plan.ration_fraction, 0.6);
    assert!(plan
        .warnings
        .iter()
        .any(|w| w.contains("Unable to meet mass budget")));
    // Degraded, not empty: the smallest-fraction schedule is returned.
    assert!(!plan.schedule.is_empty());
}

#[test]
fn test_rationing_lowers_sufficiency() {
    let foods = eligible_items(&food_catalog(), &ratings_for(&food_catalog(), 4));
    let beverages = eligible_items(&beverage_catalog(), &ratings_for(&beverage_catalog(), 3));

    let full = plan_at_fraction(&request(17), &foods, &beverages, 1.0);
    let starved = plan_at_fraction(&request(17), &foods, &beverages, 0.6);

    assert!(full.verdict.intake_ratio > starved.verdict.intake_ratio);
    assert_eq!(starved.verdict.status, Sufficiency::Insufficient);
}

#[test]
fn test_small_catalog_reports_partial_schedule() {
    let foods = eligible_items(
        &[item("Paste", 4.0)],
        &HashMap::from([("paste".to_string(), 5)]),
    );
    let beverages = eligible_items(&beverage_catalog(), &ratings_for(&beverage_catalog(), 3));

    let plan = plan_within_mass_budget(
        &request(3),
        &foods,
        &beverages,
        1000.0,
        &RationSearchConfig::default(),
    )
    .unwrap();

    assert!(!plan.complete);
    assert!(plan.warnings.iter().any(|w| w.contains("Partial schedule")));
    assert!(plan
        .warnings
        .iter()
        .any(|w| w.contains("repetition rules")));
}

#[test]
fn test_ineligible_items_never_scheduled() {
    let mut food_ratings = ratings_for(&food_catalog(), 4);
    food_ratings.insert("Oat Bar".to_string(), 1);
    food_ratings.insert("Crackers".to_string(), 0);

    let foods = eligible_items(&food_catalog(), &food_ratings);
    let beverages = eligible_items(&beverage_catalog(), &ratings_for(&beverage_catalog(), 3));

    let plan = plan_within_mass_budget(
        &request(29),
        &foods,
        &beverages,
        1000.0,
        &RationSearchConfig::default(),
    )
    .unwrap();

    for meal in &plan.schedule {
        assert_ne!(meal.food_name, "Oat Bar");
        assert_ne!(meal.food_name, "Crackers");
    }
}
