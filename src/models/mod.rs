pub mod crew;
pub mod item;
pub mod mission;
pub mod schedule;

pub use crew::CrewMember;
pub use item::{ProvisionItem, RatedItem, RatingBook};
pub use mission::{
    ActivityLevel, LifeSupportResult, MissionConfig, RecyclerConfig, ScrubberConfig,
    WaterRecyclerConfig,
};
pub use schedule::{CrewPlan, PlanRequest, ScheduledMeal, Sufficiency, SufficiencyVerdict};

/// Round to two decimal places, the precision used for grams and kilograms
/// throughout the stored records.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to three decimal places (ration fractions, intake ratios).
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding() {
        assert_eq!(round2(1.006), 1.01);
        assert_eq!(round2(2.4749), 2.47);
        assert_eq!(round3(0.6004), 0.6);
    }
}
