use clap::{Parser, Subcommand};

use crate::planner::constants::{
    DEFAULT_DAILY_KCAL_TARGET, DEFAULT_MIN_RATION_FRACTION, DEFAULT_RATION_STEP,
    DEFAULT_WATER_PER_MEAL_G,
};

/// MissionRations — plans a mission's consumables: life-support mass
/// budgeting and rationed crew meal schedules.
#[derive(Parser, Debug)]
#[command(name = "mission_rations")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the mission configuration JSON file.
    #[arg(short, long, default_value = "mission.json")]
    pub mission: String,

    /// Path to the food catalog JSON file.
    #[arg(long, default_value = "foods.json")]
    pub foods: String,

    /// Path to the beverage catalog JSON file.
    #[arg(long, default_value = "beverages.json")]
    pub beverages: String,

    /// Path to the rating book JSON file.
    #[arg(long, default_value = "ratings.json")]
    pub ratings: String,

    /// Directory holding the mission store.
    #[arg(long, default_value = "mission_state")]
    pub store: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute and record the life-support mass budget.
    Budget {
        /// Override the mission file's duration, days.
        #[arg(long)]
        duration: Option<u32>,

        /// Override the activity level (low, moderate, daily).
        #[arg(long)]
        activity: Option<String>,

        /// Override the base weight ceiling, kg.
        #[arg(long)]
        weight_limit: Option<f64>,
    },

    /// Generate a rationed meal schedule for every crew member.
    Plan {
        /// Un-rationed calorie target per crew member per day.
        #[arg(long, default_value_t = DEFAULT_DAILY_KCAL_TARGET)]
        daily_kcal: f64,

        /// Beverage serving per meal, grams.
        #[arg(long, default_value_t = DEFAULT_WATER_PER_MEAL_G)]
        water_per_meal: f64,

        /// Lowest ration fraction the search may reach.
        #[arg(long, default_value_t = DEFAULT_MIN_RATION_FRACTION)]
        min_fraction: f64,

        /// Ration fraction decrement per search attempt.
        #[arg(long, default_value_t = DEFAULT_RATION_STEP)]
        step: f64,

        /// Seed for the weighted draws; random when omitted.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the current remaining mass budget.
    Remaining,

    /// Record preference ratings for catalog items.
    Rate {
        /// Crew member to rate for; prompted when omitted.
        #[arg(long)]
        crew: Option<String>,

        /// Rate beverages instead of foods.
        #[arg(long)]
        beverage: bool,

        /// Rate a single item (fuzzy-matched) instead of all unrated ones.
        #[arg(long)]
        item: Option<String>,
    },

    /// Export the meal schedule as CSV.
    Export {
        #[arg(long, default_value = "meal_schedule.csv")]
        out: String,
    },

    /// Clear parts of the mission store.
    Reset {
        /// Clear the meal schedule.
        #[arg(long)]
        schedule: bool,

        /// Clear the life-support budget history.
        #[arg(long)]
        budget: bool,

        /// Clear the sufficiency records.
        #[arg(long)]
        sufficiency: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Budget {
            duration: None,
            activity: None,
            weight_limit: None,
        }
    }
}
