//! File-backed mission store.
//!
//! Three JSON documents under one directory: the life-support history,
//! the meal schedule, and the per-crew sufficiency map. The store is the
//! only channel through which the budget calculator and the planner feed
//! each other across runs.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MissionError, Result};
use crate::models::{round2, ScheduledMeal};
use crate::state::records::{LifeSupportRecord, SufficiencyRecord};

const LIFE_SUPPORT_FILE: &str = "life_support.json";
const MEAL_SCHEDULE_FILE: &str = "meal_schedule.json";
const SUFFICIENCY_FILE: &str = "sufficiency.json";

pub struct MissionStore {
    root: PathBuf,
}

impl MissionStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        fs::create_dir_all(root.as_ref())?;
        Ok(Self {
            root: root.as_ref().to_path_buf(),
        })
    }

    fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    fn read_vec<T: serde::de::DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let path = self.path(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_vec<T: serde::Serialize>(&self, file: &str, records: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        fs::write(self.path(file), json)?;
        Ok(())
    }

    /// Append one life-support run to the history.
    pub fn record_life_support(&self, record: &LifeSupportRecord) -> Result<()> {
        let mut records: Vec<LifeSupportRecord> = self.read_vec(LIFE_SUPPORT_FILE)?;
        records.push(record.clone());
        self.write_vec(LIFE_SUPPORT_FILE, &records)
    }

    /// Most recent life-support record by timestamp.
    pub fn latest_life_support(&self) -> Result<Option<LifeSupportRecord>> {
        let records: Vec<LifeSupportRecord> = self.read_vec(LIFE_SUPPORT_FILE)?;
        Ok(records
            .into_iter()
            .max_by(|a, b| a.timestamp.cmp(&b.timestamp)))
    }

    /// Upsert scheduled meals; the (crew, day, meal) triple is the key.
    pub fn record_meals(&self, meals: &[ScheduledMeal]) -> Result<()> {
        let mut existing: Vec<ScheduledMeal> = self.read_vec(MEAL_SCHEDULE_FILE)?;
        for meal in meals {
            match existing.iter_mut().find(|m| m.slot_key() == meal.slot_key()) {
                Some(slot) => *slot = meal.clone(),
                None => existing.push(meal.clone()),
            }
        }
        existing.sort_by(|a, b| a.slot_key().cmp(&b.slot_key()));
        self.write_vec(MEAL_SCHEDULE_FILE, &existing)
    }

    pub fn all_meals(&self) -> Result<Vec<ScheduledMeal>> {
        self.read_vec(MEAL_SCHEDULE_FILE)
    }

    /// Total scheduled meal mass, kg.
    pub fn cumulative_meal_mass_kg(&self) -> Result<f64> {
        let meals: Vec<ScheduledMeal> = self.read_vec(MEAL_SCHEDULE_FILE)?;
        let grams: f64 = meals.iter().map(|m| m.total_grams()).sum();
        Ok(round2(grams / 1000.0))
    }

    /// Last day with a scheduled meal for the crew member, 0 if none.
    pub fn last_meal_day(&self, crew_name: &str) -> Result<u32> {
        let meals: Vec<ScheduledMeal> = self.read_vec(MEAL_SCHEDULE_FILE)?;
        Ok(meals
            .iter()
            .filter(|m| m.crew_name.eq_ignore_ascii_case(crew_name))
            .map(|m| m.day)
            .max()
            .unwrap_or(0))
    }

    /// Overwrite the sufficiency records for the given crew members.
    pub fn record_sufficiency(&self, records: &[SufficiencyRecord]) -> Result<()> {
        let mut existing: Vec<SufficiencyRecord> = self.read_vec(SUFFICIENCY_FILE)?;
        for record in records {
            existing.retain(|r| !r.crew_name.eq_ignore_ascii_case(&record.crew_name));
            existing.push(record.clone());
        }
        existing.sort_by(|a, b| a.crew_name.cmp(&b.crew_name));
        self.write_vec(SUFFICIENCY_FILE, &existing)
    }

    pub fn all_sufficiency(&self) -> Result<Vec<SufficiencyRecord>> {
        self.read_vec(SUFFICIENCY_FILE)
    }

    /// Remaining mass budget, derived fresh on every query:
    /// base ceiling minus life-support mass minus cumulative meal mass.
    pub fn remaining_mass_budget(&self) -> Result<f64> {
        let record = self.latest_life_support()?.ok_or_else(|| {
            MissionError::InvalidInput(
                "no life-support record in the store; run the budget command first".to_string(),
            )
        })?;
        let meal_mass = self.cumulative_meal_mass_kg()?;
        Ok(round2(
            record.base_weight_limit_kg - record.result.total_life_support_mass_kg - meal_mass,
        ))
    }

    /// Export the meal schedule as CSV.
    pub fn export_meal_csv<P: AsRef<Path>>(&self, out: P) -> Result<()> {
        let meals: Vec<ScheduledMeal> = self.read_vec(MEAL_SCHEDULE_FILE)?;
        let mut writer = csv::Writer::from_path(out)?;

        writer.write_record([
            "crew_name",
            "day",
            "meal",
            "food_name",
            "food_grams",
            "food_rating",
            "beverage_name",
            "beverage_grams",
            "beverage_rating",
        ])?;
        for meal in &meals {
            writer.write_record([
                meal.crew_name.clone(),
                meal.day.to_string(),
                meal.meal.to_string(),
                meal.food_name.clone(),
                format!("{:.2}", meal.food_grams),
                meal.food_rating.to_string(),
                meal.beverage_name.clone(),
                format!("{:.2}", meal.beverage_grams),
                meal.beverage_rating.to_string(),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Selectively clear store files.
    pub fn reset(&self, schedule: bool, budget: bool, sufficiency: bool) -> Result<()> {
        let mut targets = Vec::new();
        if schedule {
            targets.push(MEAL_SCHEDULE_FILE);
        }
        if budget {
            targets.push(LIFE_SUPPORT_FILE);
        }
        if sufficiency {
            targets.push(SUFFICIENCY_FILE);
        }
        for file in targets {
            let path = self.path(file);
            if path.exists() {
                fs::remove_file(path)?;
            }
        }
        Ok(())
    }
}
