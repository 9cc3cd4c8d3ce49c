//! Staged life-support mass budget pipeline.
//!
//! Each stage consumes the ledger produced by its predecessor and returns
//! an augmented ledger; the chain is strictly ordered. `compute_life_support`
//! validates inputs, runs the chain, and renders the final verdict.

use crate::error::{MissionError, Result};
use crate::models::{round2, LifeSupportResult, MissionConfig};

/// Oxygen consumed per day by a 70 kg crew member at the low activity
/// baseline, kg.
const BASE_O2_PER_DAY_KG: f64 = 0.75;

/// Reference body mass the oxygen baseline is normalized to, kg.
const REFERENCE_BODY_MASS_KG: f64 = 70.0;

/// Share of scrubbed CO2 mass that converts back to breathable O2.
const SCRUBBER_O2_YIELD: f64 = 0.8;

/// Nitrogen-to-oxygen mass ratio for a 78/21 atmosphere.
const N2_TO_O2_RATIO: f64 = 3.71;

/// Excretion water allowance per meal, grams.
const EXCRETION_WATER_PER_MEAL_G: f64 = 250.0;

/// Meals assumed per day for the excretion allowance.
const MEALS_PER_DAY: f64 = 3.0;

/// Running record threaded through the pipeline stages.
#[derive(Debug, Default)]
struct BudgetLedger {
    o2_required_kg: f64,
    co2_generated_kg: f64,
    co2_removed_by_scrubber_kg: f64,
    scrubber_mass_kg: f64,
    recycler_mass_kg: f64,
    o2_reclaimed_kg: f64,
    o2_tank_mass_kg: f64,
    n2_required_kg: f64,
    n2_tank_mass_kg: f64,
    water_hygiene_g: f64,
    water_excretion_g: f64,
    water_recovered_g: f64,
    water_net_g: f64,
    water_recycler_mass_kg: f64,
    total_mass_kg: f64,
}

/// Normalize an efficiency to the 0-100 scale. Values below 1.0 are read
/// as fractions.
fn percent_scale(efficiency: f64) -> f64 {
    if efficiency < 1.0 {
        efficiency * 100.0
    } else {
        efficiency
    }
}

fn validate(config: &MissionConfig) -> Result<()> {
    if config.duration_days == 0 {
        return Err(MissionError::InvalidInput(
            "mission duration must be at least 1 day".to_string(),
        ));
    }
    if config.crew.is_empty() {
        return Err(MissionError::InvalidInput(
            "crew roster is empty".to_string(),
        ));
    }
    for member in &config.crew {
        if member.body_mass_kg <= 0.0 {
            return Err(MissionError::InvalidInput(format!(
                "crew member {} has non-positive body mass ({} kg)",
                member.name, member.body_mass_kg
            )));
        }
    }
    Ok(())
}

fn stage_oxygen_requirement(config: &MissionConfig, mut ledger: BudgetLedger) -> BudgetLedger {
    let mass_factor: f64 = config
        .crew
        .iter()
        .map(|m| m.body_mass_kg / REFERENCE_BODY_MASS_KG)
        .sum();
    ledger.o2_required_kg =
        config.duration_days as f64 * BASE_O2_PER_DAY_KG * config.activity.o2_factor() * mass_factor;
    ledger
}

fn stage_co2_generation(config: &MissionConfig, mut ledger: BudgetLedger) -> BudgetLedger {
    ledger.co2_generated_kg = config.duration_days as f64
        * config.activity.co2_per_day_kg()
        * config.crew_count() as f64;
    ledger
}

fn stage_scrubber(config: &MissionConfig, mut ledger: BudgetLedger) -> BudgetLedger {
    if config.scrubber.enabled {
        let efficiency = percent_scale(config.scrubber.efficiency);
        ledger.co2_removed_by_scrubber_kg = ledger.co2_generated_kg * (efficiency / 100.0);
        ledger.scrubber_mass_kg = ledger.co2_removed_by_scrubber_kg * config.scrubber.weight_per_kg;
        ledger.o2_reclaimed_kg += ledger.co2_removed_by_scrubber_kg * SCRUBBER_O2_YIELD;
    }
    ledger
}

fn stage_recycler(config: &MissionConfig, mut ledger: BudgetLedger) -> BudgetLedger {
    if config.recycler.enabled {
        let efficiency = percent_scale(config.recycler.efficiency);
        let remaining_co2 =
            (ledger.co2_generated_kg - ledger.co2_removed_by_scrubber_kg).max(0.0);
        ledger.o2_reclaimed_kg += remaining_co2 * (efficiency / 100.0);
        ledger.recycler_mass_kg = config.recycler.weight_kg;
    }
    // Reclaim can never exceed demand, else the tank stage would go negative.
    ledger.o2_reclaimed_kg = ledger.o2_reclaimed_kg.min(ledger.o2_required_kg);
    ledger
}

fn stage_oxygen_tank(config: &MissionConfig, mut ledger: BudgetLedger) -> BudgetLedger {
    let o2_from_tanks = (ledger.o2_required_kg - ledger.o2_reclaimed_kg).max(0.0);
    ledger.o2_tank_mass_kg = o2_from_tanks * (1.0 + config.oxygen_tank_weight_per_kg);
    ledger
}

fn stage_nitrogen(config: &MissionConfig, mut ledger: BudgetLedger) -> BudgetLedger {
    ledger.n2_required_kg = ledger.o2_required_kg * N2_TO_O2_RATIO;
    ledger.n2_tank_mass_kg = ledger.n2_required_kg * config.nitrogen_tank_weight_per_kg;
    ledger
}

fn stage_water(config: &MissionConfig, mut ledger: BudgetLedger) -> BudgetLedger {
    let crew = config.crew_count() as f64;
    let days = config.duration_days as f64;
    ledger.water_hygiene_g = crew * days * config.hygiene_water_per_day_g;
    ledger.water_excretion_g = crew * days * MEALS_PER_DAY * EXCRETION_WATER_PER_MEAL_G;
    let raw = ledger.water_hygiene_g + ledger.water_excretion_g;
    if config.water_recycler.enabled {
        ledger.water_recovered_g = raw * (config.water_recycler.efficiency / 100.0);
        ledger.water_recycler_mass_kg = config.water_recycler.weight_kg;
    }
    ledger.water_net_g = raw - ledger.water_recovered_g;
    ledger
}

fn stage_total(mut ledger: BudgetLedger) -> BudgetLedger {
    ledger.total_mass_kg = ledger.o2_tank_mass_kg
        + ledger.scrubber_mass_kg
        + ledger.recycler_mass_kg
        + ledger.n2_tank_mass_kg
        + ledger.water_net_g / 1000.0
        + ledger.water_recycler_mass_kg;
    ledger
}

/// Run the full budget pipeline for one mission configuration.
///
/// `cumulative_meal_mass_kg` is the mass of already-committed scheduled
/// meals; it is subtracted from the base ceiling to form the effective
/// weight limit the verdict is taken against.
pub fn compute_life_support(
    config: &MissionConfig,
    cumulative_meal_mass_kg: f64,
) -> Result<LifeSupportResult> {
    validate(config)?;

    let ledger = stage_oxygen_requirement(config, BudgetLedger::default());
    let ledger = stage_co2_generation(config, ledger);
    let ledger = stage_scrubber(config, ledger);
    let ledger = stage_recycler(config, ledger);
    let ledger = stage_oxygen_tank(config, ledger);
    let ledger = stage_nitrogen(config, ledger);
    let ledger = stage_water(config, ledger);
    let ledger = stage_total(ledger);

    let weight_limit_kg = config.base_weight_limit_kg - cumulative_meal_mass_kg;

    Ok(LifeSupportResult {
        o2_required_kg: round2(ledger.o2_required_kg),
        co2_generated_kg: round2(ledger.co2_generated_kg),
        o2_reclaimed_kg: round2(ledger.o2_reclaimed_kg),
        o2_tank_mass_kg: round2(ledger.o2_tank_mass_kg),
        scrubber_mass_kg: round2(ledger.scrubber_mass_kg),
        recycler_mass_kg: round2(ledger.recycler_mass_kg),
        n2_required_kg: round2(ledger.n2_required_kg),
        n2_tank_mass_kg: round2(ledger.n2_tank_mass_kg),
        water_hygiene_g: round2(ledger.water_hygiene_g),
        water_excretion_g: round2(ledger.water_excretion_g),
        water_recovered_g: round2(ledger.water_recovered_g),
        water_net_g: round2(ledger.water_net_g),
        water_recycler_mass_kg: round2(ledger.water_recycler_mass_kg),
        total_life_support_mass_kg: round2(ledger.total_mass_kg),
        weight_limit_kg: round2(weight_limit_kg),
        within_limit: ledger.total_mass_kg <= weight_limit_kg,
    })
}
