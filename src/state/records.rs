//! Persisted record shapes. These are a contract other collaborators
//! read; field names must stay stable.

use serde::{Deserialize, Serialize};

use crate::models::{round2, ActivityLevel, LifeSupportResult, MissionConfig, Sufficiency};

/// One life-support budget run.
///
/// The most-recent-by-timestamp record is consulted for the current
/// remaining budget. `base_weight_limit_kg` is the un-adjusted ceiling;
/// the effective limit lives inside the flattened result fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeSupportRecord {
    pub timestamp: String,
    pub duration_days: u32,
    pub crew_count: usize,
    /// Comma-joined body masses, kg.
    pub body_masses: String,
    pub activity: ActivityLevel,
    pub oxygen_tank_weight_per_kg: f64,
    pub nitrogen_tank_weight_per_kg: f64,
    pub hygiene_water_per_day_g: f64,
    pub use_scrubber: bool,
    pub co2_scrubber_efficiency: f64,
    pub scrubber_weight_per_kg: f64,
    pub use_recycler: bool,
    pub co2_recycler_efficiency: f64,
    pub recycler_weight_kg: f64,
    pub use_water_recycler: bool,
    pub water_recycler_efficiency: f64,
    pub water_recycler_weight_kg: f64,

    #[serde(flatten)]
    pub result: LifeSupportResult,

    pub base_weight_limit_kg: f64,
    pub cumulative_meal_mass_kg: f64,
    pub combined_life_support_mass_kg: f64,
}

impl LifeSupportRecord {
    pub fn new(
        config: &MissionConfig,
        result: LifeSupportResult,
        cumulative_meal_mass_kg: f64,
        timestamp: String,
    ) -> Self {
        let combined = round2(result.total_life_support_mass_kg + cumulative_meal_mass_kg);
        Self {
            timestamp,
            duration_days: config.duration_days,
            crew_count: config.crew_count(),
            body_masses: config
                .body_masses()
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(","),
            activity: config.activity,
            oxygen_tank_weight_per_kg: config.oxygen_tank_weight_per_kg,
            nitrogen_tank_weight_per_kg: config.nitrogen_tank_weight_per_kg,
            hygiene_water_per_day_g: config.hygiene_water_per_day_g,
            use_scrubber: config.scrubber.enabled,
            co2_scrubber_efficiency: config.scrubber.efficiency,
            scrubber_weight_per_kg: config.scrubber.weight_per_kg,
            use_recycler: config.recycler.enabled,
            co2_recycler_efficiency: config.recycler.efficiency,
            recycler_weight_kg: config.recycler.weight_kg,
            use_water_recycler: config.water_recycler.enabled,
            water_recycler_efficiency: config.water_recycler.efficiency,
            water_recycler_weight_kg: config.water_recycler.weight_kg,
            result,
            base_weight_limit_kg: config.base_weight_limit_kg,
            cumulative_meal_mass_kg,
            combined_life_support_mass_kg: combined,
        }
    }
}

/// One live sufficiency record per crew member, overwritten each run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SufficiencyRecord {
    pub crew_name: String,
    pub status: Sufficiency,
    pub intake_ratio: f64,
}
