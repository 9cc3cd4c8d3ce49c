//! Ration fraction search.
//!
//! A deterministic linear scan from full rations downward: each attempt
//! re-plans the whole window at the reduced calorie target and keeps the
//! first plan whose served mass fits the budget. Exhausting the range is
//! a degraded-but-usable outcome, reported with a warning rather than an
//! error. Determinism matters more than search speed here, so no
//! bisection: results feed sufficiency classification.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{MissionError, Result};
use crate::models::{round2, round3, CrewPlan, PlanRequest, RatedItem};
use crate::planner::assigner::SlotAssigner;
use crate::planner::constants::{DEFAULT_MIN_RATION_FRACTION, DEFAULT_RATION_STEP};
use crate::planner::sufficiency::classify_intake;

/// Bounds for the linear fraction scan.
#[derive(Debug, Clone, Copy)]
pub struct RationSearchConfig {
    pub min_fraction: f64,
    pub step: f64,
}

impl Default for RationSearchConfig {
    fn default() -> Self {
        Self {
            min_fraction: DEFAULT_MIN_RATION_FRACTION,
            step: DEFAULT_RATION_STEP,
        }
    }
}

/// Plan one crew member's window at a fixed ration fraction.
///
/// The assigner is seeded from the request, so an unchanged request
/// reproduces an identical schedule. Empty eligible lists yield an empty
/// schedule with per-slot warnings; `plan_within_mass_budget` rejects
/// them up front instead.
pub fn plan_at_fraction(
    request: &PlanRequest,
    foods: &[RatedItem],
    beverages: &[RatedItem],
    fraction: f64,
) -> CrewPlan {
    let rng = StdRng::seed_from_u64(request.seed);
    let run = SlotAssigner::new(request, fraction, foods, beverages, rng).run();

    let original_target = request.daily_kcal_target * request.duration_days as f64;
    let verdict = classify_intake(run.delivered_kcal, original_target);

    let mut warnings = run.warnings.clone();
    if !run.is_complete() {
        warnings.push(format!(
            "Partial schedule for {}: {} of {} slots filled",
            request.crew_name,
            run.schedule.len(),
            run.expected_slots
        ));
    }

    CrewPlan {
        crew_name: request.crew_name.clone(),
        total_food_grams: round2(run.total_food_grams()),
        total_beverage_grams: round2(run.total_beverage_grams()),
        total_mass_kg: round2(run.total_mass_kg()),
        calorie_target_kcal: round2(request.daily_kcal_target * fraction),
        delivered_kcal: round2(run.delivered_kcal),
        ration_fraction: round3(fraction),
        verdict,
        complete: run.is_complete(),
        schedule: run.schedule,
        warnings,
    }
}

/// Find the largest ration fraction whose plan fits the mass budget.
///
/// Scans from 1.0 down to `min_fraction` in fixed steps. If no attempt
/// fits, the smallest-fraction plan is returned with an explicit warning.
pub fn plan_within_mass_budget(
    request: &PlanRequest,
    foods: &[RatedItem],
    beverages: &[RatedItem],
    mass_budget_kg: f64,
    search: &RationSearchConfig,
) -> Result<CrewPlan> {
    if foods.is_empty() {
        return Err(MissionError::NoEligibleItems {
            crew: request.crew_name.clone(),
            kind: "food",
        });
    }
    if beverages.is_empty() {
        return Err(MissionError::NoEligibleItems {
            crew: request.crew_name.clone(),
            kind: "beverage",
        });
    }
    if search.step <= 0.0 {
        return Err(MissionError::InvalidInput(
            "ration search step must be positive".to_string(),
        ));
    }
    if !(0.0..=1.0).contains(&search.min_fraction) {
        return Err(MissionError::InvalidInput(format!(
            "min ration fraction {} is outside [0, 1]",
            search.min_fraction
        )));
    }

    // Integer stepping keeps the scan free of float drift and bounds it to
    // (1 - min_fraction) / step attempts. The epsilon keeps the final step
    // from being lost to representation error.
    let steps = ((1.0 - search.min_fraction + 1e-9) / search.step).floor() as u32;
    let mut last_plan = None;

    for i in 0..=steps {
        let fraction = 1.0 - i as f64 * search.step;
        let plan = plan_at_fraction(request, foods, beverages, fraction);
        if plan.total_mass_kg <= mass_budget_kg {
            return Ok(plan);
        }
        last_plan = Some(plan);
    }

    let Some(mut plan) = last_plan else {
        return Err(MissionError::InvalidInput(
            "ration search produced no attempts".to_string(),
        ));
    };
    plan.warnings.push(format!(
        "Unable to meet mass budget of {} kg above {:.0}% rationing",
        mass_budget_kg,
        search.min_fraction * 100.0
    ));
    Ok(plan)
}
