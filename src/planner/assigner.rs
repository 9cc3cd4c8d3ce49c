//! Per-slot meal assignment.
//!
//! Each (day, meal) slot runs a small state machine: pick a food, pick a
//! beverage, finalize. Selection is rating-weighted random over the
//! candidates the repetition rules allow. A slot whose candidate set goes
//! empty retries under progressively relaxed rules rather than sticking;
//! a slot that fails even the loosest pass is left unfilled with a
//! diagnosable warning and the run continues.

use std::collections::{HashMap, VecDeque};

use rand::Rng;

use crate::models::{round2, PlanRequest, RatedItem, ScheduledMeal};
use crate::planner::constants::{MEALS_PER_DAY, RECENCY_WINDOW_ITEMS};

/// How much of the repetition rule set applies to a selection pass.
///
/// The immediate-repeat rule is never relaxed; the recency window goes
/// first, then the same-slot-previous-day rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strictness {
    /// Only the immediate-repeat rule.
    ImmediateOnly,
    /// Immediate-repeat plus same-slot-previous-day.
    NoRecency,
    /// All three rules.
    Full,
}

/// Passes attempted per slot, strictest first.
const RELAXATION_LADDER: [Strictness; 3] =
    [Strictness::Full, Strictness::NoRecency, Strictness::ImmediateOnly];

/// Per-crew-member record of recent selections.
///
/// Mutated only by slot finalization; reset at the start of each planning
/// run.
#[derive(Debug, Default)]
pub struct SelectionHistory {
    last_food: Option<String>,
    last_beverage: Option<String>,
    /// (day, meal) -> (food, beverage) for the same-slot rule.
    by_slot: HashMap<(u32, u8), (String, String)>,
    /// Item names served in the trailing window, foods and beverages mixed.
    recent: VecDeque<String>,
}

impl SelectionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn allows_food(&self, name: &str, day: u32, meal: u8, strictness: Strictness) -> bool {
        if self.last_food.as_deref() == Some(name) {
            return false;
        }
        if strictness >= Strictness::NoRecency && self.same_slot_yesterday(day, meal, 0) == Some(name) {
            return false;
        }
        if strictness == Strictness::Full && self.recent.iter().any(|item| item == name) {
            return false;
        }
        true
    }

    pub fn allows_beverage(&self, name: &str, day: u32, meal: u8, strictness: Strictness) -> bool {
        if self.last_beverage.as_deref() == Some(name) {
            return false;
        }
        if strictness >= Strictness::NoRecency && self.same_slot_yesterday(day, meal, 1) == Some(name) {
            return false;
        }
        if strictness == Strictness::Full && self.recent.iter().any(|item| item == name) {
            return false;
        }
        true
    }

    /// What occupied this meal index on the previous day, if anything.
    fn same_slot_yesterday(&self, day: u32, meal: u8, which: usize) -> Option<&str> {
        let prev_day = day.checked_sub(1)?;
        let (food, beverage) = self.by_slot.get(&(prev_day, meal))?;
        Some(if which == 0 { food } else { beverage })
    }

    fn record(&mut self, day: u32, meal: u8, food: &str, beverage: &str) {
        self.last_food = Some(food.to_string());
        self.last_beverage = Some(beverage.to_string());
        self.by_slot
            .insert((day, meal), (food.to_string(), beverage.to_string()));
        self.recent.push_back(food.to_string());
        self.recent.push_back(beverage.to_string());
        while self.recent.len() > RECENCY_WINDOW_ITEMS {
            self.recent.pop_front();
        }
    }
}

/// Rating-weighted draw: cumulative weight over a uniform variable in
/// `[0, total)`.
pub(crate) fn weighted_pick<'a>(
    rng: &mut impl Rng,
    candidates: &[&'a RatedItem],
) -> Option<&'a RatedItem> {
    let total: f64 = candidates.iter().map(|c| c.rating as f64).sum();
    if total <= 0.0 {
        return candidates.first().copied();
    }
    let draw = rng.gen_range(0.0..total);
    let mut upto = 0.0;
    for candidate in candidates {
        upto += candidate.rating as f64;
        if upto >= draw {
            return Some(candidate);
        }
    }
    candidates.last().copied()
}

/// A chosen item with its portion, not yet finalized.
#[derive(Debug)]
struct Portion {
    name: String,
    grams: f64,
    calories_per_gram: f64,
    rating: i64,
}

/// Per-slot progression. FINALIZED is implicit in `fill_slot` returning.
#[derive(Debug)]
enum SlotState {
    Empty,
    FoodChosen(Portion),
    Ready { food: Portion, beverage: Portion },
}

/// Result of driving every slot in a planning window.
#[derive(Debug)]
pub struct AssignmentRun {
    pub schedule: Vec<ScheduledMeal>,
    pub warnings: Vec<String>,
    /// Calories actually assigned, foods and beverages combined.
    pub delivered_kcal: f64,
    pub expected_slots: usize,
}

impl AssignmentRun {
    pub fn is_complete(&self) -> bool {
        self.schedule.len() == self.expected_slots
    }

    pub fn total_food_grams(&self) -> f64 {
        self.schedule.iter().map(|m| m.food_grams).sum()
    }

    pub fn total_beverage_grams(&self) -> f64 {
        self.schedule.iter().map(|m| m.beverage_grams).sum()
    }

    /// Total served mass in kg.
    pub fn total_mass_kg(&self) -> f64 {
        (self.total_food_grams() + self.total_beverage_grams()) / 1000.0
    }
}

/// Fills the meal slots of one crew member's planning window.
pub struct SlotAssigner<'a, R: Rng> {
    crew_name: String,
    foods: &'a [RatedItem],
    beverages: &'a [RatedItem],
    start_day: u32,
    duration_days: u32,
    per_meal_kcal: f64,
    water_per_meal_g: f64,
    /// Whole-window calorie ceiling at the current ration fraction.
    plan_kcal_budget: f64,
    assigned_kcal: f64,
    history: SelectionHistory,
    schedule: Vec<ScheduledMeal>,
    warnings: Vec<String>,
    rng: R,
}

impl<'a, R: Rng> SlotAssigner<'a, R> {
    pub fn new(
        request: &PlanRequest,
        ration_fraction: f64,
        foods: &'a [RatedItem],
        beverages: &'a [RatedItem],
        rng: R,
    ) -> Self {
        let rationed_daily = request.daily_kcal_target * ration_fraction;
        Self {
            crew_name: request.crew_name.clone(),
            foods,
            beverages,
            start_day: request.start_day,
            duration_days: request.duration_days,
            per_meal_kcal: rationed_daily / MEALS_PER_DAY as f64,
            water_per_meal_g: request.water_per_meal_g,
            plan_kcal_budget: rationed_daily * request.duration_days as f64,
            assigned_kcal: 0.0,
            history: SelectionHistory::new(),
            schedule: Vec::new(),
            warnings: Vec::new(),
            rng,
        }
    }

    /// Attempt every slot in `[start_day, start_day + duration)`.
    pub fn run(mut self) -> AssignmentRun {
        for offset in 0..self.duration_days {
            let day = self.start_day + offset;
            for meal in 1..=MEALS_PER_DAY {
                self.fill_slot(day, meal);
            }
        }
        AssignmentRun {
            schedule: self.schedule,
            warnings: self.warnings,
            delivered_kcal: self.assigned_kcal,
            expected_slots: (self.duration_days * MEALS_PER_DAY as u32) as usize,
        }
    }

    /// Drive one slot's state machine to finalization, relaxing the rule
    /// set between attempts. Returns false if the slot stays unfilled.
    fn fill_slot(&mut self, day: u32, meal: u8) -> bool {
        for &strictness in &RELAXATION_LADDER {
            let mut state = SlotState::Empty;
            loop {
                state = match state {
                    SlotState::Empty => match self.choose_food(day, meal, strictness) {
                        Some(food) => SlotState::FoodChosen(food),
                        None => break,
                    },
                    SlotState::FoodChosen(food) => {
                        match self.choose_beverage(day, meal, strictness) {
                            Some(beverage) => SlotState::Ready { food, beverage },
                            None => break,
                        }
                    }
                    SlotState::Ready { food, beverage } => {
                        self.finalize(day, meal, food, beverage);
                        return true;
                    }
                };
            }
        }
        self.warnings.push(format!(
            "Day {} meal {} for {}: no candidate satisfies the repetition rules (eligible catalog too small)",
            day, meal, self.crew_name
        ));
        false
    }

    fn choose_food(&mut self, day: u32, meal: u8, strictness: Strictness) -> Option<Portion> {
        let history = &self.history;
        let candidates: Vec<&RatedItem> = self
            .foods
            .iter()
            .filter(|item| history.allows_food(&item.name, day, meal, strictness))
            .collect();
        let pick = weighted_pick(&mut self.rng, &candidates)?;

        let grams = if pick.calories_per_gram > 0.0 {
            round2((self.per_meal_kcal / pick.calories_per_gram).max(0.0))
        } else {
            0.0
        };
        Some(Portion {
            name: pick.name.clone(),
            grams,
            calories_per_gram: pick.calories_per_gram,
            rating: pick.rating,
        })
    }

    fn choose_beverage(&mut self, day: u32, meal: u8, strictness: Strictness) -> Option<Portion> {
        let history = &self.history;
        let candidates: Vec<&RatedItem> = self
            .beverages
            .iter()
            .filter(|item| history.allows_beverage(&item.name, day, meal, strictness))
            .collect();
        let pick = weighted_pick(&mut self.rng, &candidates)?;

        Some(Portion {
            name: pick.name.clone(),
            grams: self.water_per_meal_g,
            calories_per_gram: pick.calories_per_gram,
            rating: pick.rating,
        })
    }

    /// Append the meal, charging it against the whole-window calorie
    /// budget. Overshoot shrinks the food portion, never the beverage.
    fn finalize(&mut self, day: u32, meal: u8, food: Portion, beverage: Portion) {
        let beverage_kcal = beverage.grams * beverage.calories_per_gram;
        let mut food_grams = food.grams;
        let mut meal_kcal = food_grams * food.calories_per_gram + beverage_kcal;

        let remaining = (self.plan_kcal_budget - self.assigned_kcal).max(0.0);
        if meal_kcal > remaining && food.calories_per_gram > 0.0 {
            food_grams = round2(((remaining - beverage_kcal) / food.calories_per_gram).max(0.0));
            meal_kcal = food_grams * food.calories_per_gram + beverage_kcal;
        }

        self.assigned_kcal += meal_kcal;
        self.history.record(day, meal, &food.name, &beverage.name);
        self.schedule.push(ScheduledMeal {
            crew_name: self.crew_name.clone(),
            day,
            meal,
            food_name: food.name,
            food_grams,
            food_rating: food.rating,
            beverage_name: beverage.name,
            beverage_grams: beverage.grams,
            beverage_rating: beverage.rating,
        });
    }
}
