use std::fmt;

use serde::{Deserialize, Serialize};

/// One finalized meal assignment for a (crew member, day, meal) slot.
///
/// Immutable once appended to a schedule; re-planning a window replaces
/// the record wholesale in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMeal {
    pub crew_name: String,
    pub day: u32,
    /// Meal index within the day, 1-3.
    pub meal: u8,
    pub food_name: String,
    pub food_grams: f64,
    pub food_rating: i64,
    pub beverage_name: String,
    pub beverage_grams: f64,
    pub beverage_rating: i64,
}

impl ScheduledMeal {
    /// The (crew, day, meal) primary key.
    pub fn slot_key(&self) -> (String, u32, u8) {
        (self.crew_name.clone(), self.day, self.meal)
    }

    pub fn total_grams(&self) -> f64 {
        self.food_grams + self.beverage_grams
    }
}

/// Sufficiency verdict for a crew member's delivered calories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sufficiency {
    Insufficient,
    Moderate,
    Sufficient,
}

impl Sufficiency {
    pub fn as_str(self) -> &'static str {
        match self {
            Sufficiency::Insufficient => "insufficient",
            Sufficiency::Moderate => "moderate",
            Sufficiency::Sufficient => "sufficient",
        }
    }
}

impl fmt::Display for Sufficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sufficiency status together with the intake ratio that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SufficiencyVerdict {
    pub status: Sufficiency,
    /// Delivered kcal over the original, un-rationed target.
    pub intake_ratio: f64,
}

/// Inputs for one crew member's planning run.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub crew_name: String,
    /// Un-rationed calorie target per day.
    pub daily_kcal_target: f64,
    pub duration_days: u32,
    pub start_day: u32,
    pub water_per_meal_g: f64,
    pub seed: u64,
}

/// A finished planning run for one crew member.
#[derive(Debug, Clone)]
pub struct CrewPlan {
    pub crew_name: String,
    pub schedule: Vec<ScheduledMeal>,
    pub total_food_grams: f64,
    pub total_beverage_grams: f64,
    pub total_mass_kg: f64,
    /// Rationed calorie target per day actually planned against.
    pub calorie_target_kcal: f64,
    pub delivered_kcal: f64,
    pub ration_fraction: f64,
    pub verdict: SufficiencyVerdict,
    /// True when every slot in the window was filled.
    pub complete: bool,
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_key_and_mass() {
        let meal = ScheduledMeal {
            crew_name: "Dana".to_string(),
            day: 3,
            meal: 2,
            food_name: "Oat Bar".to_string(),
            food_grams: 190.5,
            food_rating: 4,
            beverage_name: "Tea".to_string(),
            beverage_grams: 250.0,
            beverage_rating: 3,
        };
        assert_eq!(meal.slot_key(), ("Dana".to_string(), 3, 2));
        assert_eq!(meal.total_grams(), 440.5);
    }

    #[test]
    fn test_sufficiency_display() {
        assert_eq!(Sufficiency::Moderate.to_string(), "moderate");
    }
}
