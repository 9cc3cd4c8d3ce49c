use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MissionError;
use crate::models::CrewMember;

/// Crew activity level, driving oxygen demand and CO2 output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Moderate,
    Daily,
}

impl ActivityLevel {
    /// Multiplier on the base oxygen demand of 0.75 kg/day per 70 kg.
    pub fn o2_factor(self) -> f64 {
        match self {
            ActivityLevel::Low => 1.0,
            ActivityLevel::Moderate => 1.5,
            ActivityLevel::Daily => 2.0,
        }
    }

    /// CO2 generated per crew member per day, kg.
    pub fn co2_per_day_kg(self) -> f64 {
        match self {
            ActivityLevel::Low => 0.8,
            ActivityLevel::Moderate => 1.4,
            ActivityLevel::Daily => 2.2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActivityLevel::Low => "low",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Daily => "daily",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = MissionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(ActivityLevel::Low),
            "moderate" => Ok(ActivityLevel::Moderate),
            "daily" => Ok(ActivityLevel::Daily),
            other => Err(MissionError::UnknownActivity(other.to_string())),
        }
    }
}

/// CO2 scrubber parameters. Hardware mass scales with removed CO2.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScrubberConfig {
    pub enabled: bool,
    /// 0-100 scale; values below 1.0 are read as fractions.
    pub efficiency: f64,
    pub weight_per_kg: f64,
}

impl Default for ScrubberConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            efficiency: 98.0,
            weight_per_kg: 0.4,
        }
    }
}

/// CO2 recycler parameters. Hardware mass is a fixed weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RecyclerConfig {
    pub enabled: bool,
    /// 0-100 scale; values below 1.0 are read as fractions.
    pub efficiency: f64,
    pub weight_kg: f64,
}

impl Default for RecyclerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            efficiency: 0.0,
            weight_kg: 0.0,
        }
    }
}

/// Water recycler parameters. Hardware mass is a fixed weight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaterRecyclerConfig {
    pub enabled: bool,
    /// Percent of raw water recovered.
    pub efficiency: f64,
    pub weight_kg: f64,
}

impl Default for WaterRecyclerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            efficiency: 85.0,
            weight_kg: 450.0,
        }
    }
}

/// Mission parameters for one life-support budget run.
///
/// `base_weight_limit_kg` is the immutable ceiling set once per mission;
/// the effective ceiling for a run is derived fresh by subtracting the
/// cumulative scheduled meal mass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionConfig {
    pub duration_days: u32,

    pub activity: ActivityLevel,

    pub base_weight_limit_kg: f64,

    pub oxygen_tank_weight_per_kg: f64,

    pub nitrogen_tank_weight_per_kg: f64,

    pub hygiene_water_per_day_g: f64,

    #[serde(default)]
    pub scrubber: ScrubberConfig,

    #[serde(default)]
    pub recycler: RecyclerConfig,

    #[serde(default)]
    pub water_recycler: WaterRecyclerConfig,

    pub crew: Vec<CrewMember>,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            duration_days: 7,
            activity: ActivityLevel::Moderate,
            base_weight_limit_kg: 850.0,
            oxygen_tank_weight_per_kg: 1.2,
            nitrogen_tank_weight_per_kg: 1.2,
            hygiene_water_per_day_g: 1500.0,
            scrubber: ScrubberConfig::default(),
            recycler: RecyclerConfig::default(),
            water_recycler: WaterRecyclerConfig::default(),
            crew: Vec::new(),
        }
    }
}

impl MissionConfig {
    pub fn crew_count(&self) -> usize {
        self.crew.len()
    }

    pub fn body_masses(&self) -> Vec<f64> {
        self.crew.iter().map(|m| m.body_mass_kg).collect()
    }
}

/// Output of the staged life-support mass pipeline.
///
/// Immutable once produced; a new mission run produces a new result.
/// Gas and hardware figures are kg, water figures are grams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeSupportResult {
    pub o2_required_kg: f64,
    pub co2_generated_kg: f64,
    pub o2_reclaimed_kg: f64,
    pub o2_tank_mass_kg: f64,
    pub scrubber_mass_kg: f64,
    pub recycler_mass_kg: f64,
    pub n2_required_kg: f64,
    pub n2_tank_mass_kg: f64,
    pub water_hygiene_g: f64,
    pub water_excretion_g: f64,
    pub water_recovered_g: f64,
    pub water_net_g: f64,
    pub water_recycler_mass_kg: f64,
    pub total_life_support_mass_kg: f64,
    /// Effective ceiling the verdict was taken against.
    pub weight_limit_kg: f64,
    pub within_limit: bool,
}
