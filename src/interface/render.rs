use crate::models::{CrewPlan, LifeSupportResult};

/// Display a life-support budget result as a formatted block.
pub fn display_life_support(result: &LifeSupportResult) {
    println!();
    println!("=== Life-Support Budget ===");
    println!();
    println!("  O2 required:        {:>10.2} kg", result.o2_required_kg);
    println!("  O2 reclaimed:       {:>10.2} kg", result.o2_reclaimed_kg);
    println!("  O2 tank mass:       {:>10.2} kg", result.o2_tank_mass_kg);
    println!("  CO2 generated:      {:>10.2} kg", result.co2_generated_kg);
    println!("  Scrubber mass:      {:>10.2} kg", result.scrubber_mass_kg);
    println!("  Recycler mass:      {:>10.2} kg", result.recycler_mass_kg);
    println!("  N2 required:        {:>10.2} kg", result.n2_required_kg);
    println!("  N2 tank mass:       {:>10.2} kg", result.n2_tank_mass_kg);
    println!("  Water hygiene:      {:>10.2} g", result.water_hygiene_g);
    println!("  Water excretion:    {:>10.2} g", result.water_excretion_g);
    println!("  Water recovered:    {:>10.2} g", result.water_recovered_g);
    println!("  Water net:          {:>10.2} g", result.water_net_g);
    println!(
        "  Water recycler:     {:>10.2} kg",
        result.water_recycler_mass_kg
    );
    println!();
    println!(
        "  Total life-support mass: {:.2} kg (limit {:.2} kg)",
        result.total_life_support_mass_kg, result.weight_limit_kg
    );
    println!(
        "  Verdict: {}",
        if result.within_limit {
            "within limit"
        } else {
            "OVER LIMIT"
        }
    );
    println!();
}

/// Display one crew member's rationed meal schedule.
pub fn display_crew_plan(plan: &CrewPlan) {
    println!();
    println!(
        "=== Schedule for {} (ration fraction {:.3}) ===",
        plan.crew_name, plan.ration_fraction
    );
    println!();

    if plan.schedule.is_empty() {
        println!("  (no meals assigned)");
    }

    let name_width = plan
        .schedule
        .iter()
        .map(|m| m.food_name.len())
        .max()
        .unwrap_or(10);

    for meal in &plan.schedule {
        println!(
            "  Day {:>2} meal {}: {:<width$} {:>7.1} g  +  {} {:>6.1} g",
            meal.day,
            meal.meal,
            meal.food_name,
            meal.food_grams,
            meal.beverage_name,
            meal.beverage_grams,
            width = name_width
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Total mass: {:.2} kg", plan.total_mass_kg);
    println!(
        "Delivered: {:.0} kcal (daily target {:.0} kcal)",
        plan.delivered_kcal, plan.calorie_target_kcal
    );
    println!(
        "Sufficiency: {} (intake ratio {:.3})",
        plan.verdict.status, plan.verdict.intake_ratio
    );

    for warning in &plan.warnings {
        println!("Warning: {}", warning);
    }
    println!();
}

/// Display the current remaining mass budget.
pub fn display_remaining_budget(remaining_kg: f64) {
    println!("Remaining mass budget: {:.2} kg", remaining_kg);
}
