use clap::Parser;

use mission_rations_rs::budget::compute_life_support;
use mission_rations_rs::cli::{Cli, Command};
use mission_rations_rs::error::{MissionError, Result};
use mission_rations_rs::interface::{
    display_crew_plan, display_life_support, display_remaining_budget, prompt_rating,
    prompt_yes_no, resolve_item_name, select_crew_name,
};
use mission_rations_rs::models::{ActivityLevel, CrewPlan, PlanRequest, ProvisionItem, RatingBook};
use mission_rations_rs::planner::{eligible_items, plan_within_mass_budget, RationSearchConfig};
use mission_rations_rs::state::{
    load_mission, load_provisions, load_ratings, save_ratings, LifeSupportRecord, MissionStore,
    SufficiencyRecord,
};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let mut cli = Cli::parse();

    match cli.command.take().unwrap_or_default() {
        Command::Budget {
            duration,
            activity,
            weight_limit,
        } => cmd_budget(&cli, duration, activity, weight_limit),
        Command::Plan {
            daily_kcal,
            water_per_meal,
            min_fraction,
            step,
            seed,
        } => cmd_plan(&cli, daily_kcal, water_per_meal, min_fraction, step, seed),
        Command::Remaining => cmd_remaining(&cli),
        Command::Rate {
            crew,
            beverage,
            item,
        } => cmd_rate(&cli, crew, beverage, item),
        Command::Export { out } => cmd_export(&cli, &out),
        Command::Reset {
            schedule,
            budget,
            sufficiency,
        } => cmd_reset(&cli, schedule, budget, sufficiency),
    }
}

/// Compute the life-support budget, record it, and report the verdict.
fn cmd_budget(
    cli: &Cli,
    duration: Option<u32>,
    activity: Option<String>,
    weight_limit: Option<f64>,
) -> Result<()> {
    let mut config = load_mission(&cli.mission)?;
    if let Some(days) = duration {
        config.duration_days = days;
    }
    if let Some(level) = activity {
        config.activity = level.parse::<ActivityLevel>()?;
    }
    if let Some(limit) = weight_limit {
        config.base_weight_limit_kg = limit;
    }

    let store = MissionStore::open(&cli.store)?;
    let meal_mass = store.cumulative_meal_mass_kg().unwrap_or_else(|e| {
        log::warn!("could not read cumulative meal mass, assuming 0: {}", e);
        0.0
    });

    let result = compute_life_support(&config, meal_mass)?;
    display_life_support(&result);

    let record = LifeSupportRecord::new(
        &config,
        result,
        meal_mass,
        chrono::Utc::now().to_rfc3339(),
    );
    // The computed result stands even if the write fails.
    if let Err(e) = store.record_life_support(&record) {
        log::warn!("failed to record life-support run: {}", e);
    }

    match store.remaining_mass_budget() {
        Ok(remaining) => display_remaining_budget(remaining),
        Err(e) => log::warn!("could not derive remaining budget: {}", e),
    }

    Ok(())
}

/// Plan rationed meal schedules for every crew member and record them.
fn cmd_plan(
    cli: &Cli,
    daily_kcal: f64,
    water_per_meal: f64,
    min_fraction: f64,
    step: f64,
    seed: Option<u64>,
) -> Result<()> {
    let config = load_mission(&cli.mission)?;
    if config.crew.is_empty() {
        return Err(MissionError::InvalidInput(
            "crew roster is empty".to_string(),
        ));
    }

    let foods = load_provisions(&cli.foods)?;
    let beverages = load_provisions(&cli.beverages)?;
    let ratings = load_ratings(&cli.ratings)?;

    let store = MissionStore::open(&cli.store)?;
    let remaining = store.remaining_mass_budget()?;
    if remaining <= 0.0 {
        println!(
            "Remaining mass budget is {:.2} kg; expect minimum rations.",
            remaining
        );
    }
    let budget_per_crew = (remaining / config.crew_count() as f64).max(0.0);

    let seed = seed.unwrap_or_else(rand::random::<u64>);
    let search = RationSearchConfig { min_fraction, step };

    println!(
        "Planning {} days for {} crew member(s), {:.2} kg budget each (seed {})",
        config.duration_days,
        config.crew_count(),
        budget_per_crew,
        seed
    );

    let mut plans: Vec<CrewPlan> = Vec::new();
    for member in &config.crew {
        let crew_foods = eligible_items(&foods, &ratings.food_ratings_for(&member.name));
        let crew_beverages =
            eligible_items(&beverages, &ratings.beverage_ratings_for(&member.name));

        let start_day = store.last_meal_day(&member.name)? + 1;
        let request = PlanRequest {
            crew_name: member.name.clone(),
            daily_kcal_target: daily_kcal,
            duration_days: config.duration_days,
            start_day,
            water_per_meal_g: water_per_meal,
            seed,
        };

        match plan_within_mass_budget(&request, &crew_foods, &crew_beverages, budget_per_crew, &search)
        {
            Ok(plan) => {
                display_crew_plan(&plan);
                plans.push(plan);
            }
            Err(e) => {
                eprintln!("Skipping {}: {}", member.name, e);
                log::warn!("planning failed for {}: {}", member.name, e);
            }
        }
    }

    let meals: Vec<_> = plans.iter().flat_map(|p| p.schedule.clone()).collect();
    let sufficiency: Vec<SufficiencyRecord> = plans
        .iter()
        .map(|p| SufficiencyRecord {
            crew_name: p.crew_name.clone(),
            status: p.verdict.status,
            intake_ratio: p.verdict.intake_ratio,
        })
        .collect();

    // Persistence failures must not discard the computed schedules.
    if let Err(e) = store.record_meals(&meals) {
        log::warn!("failed to record meal schedule: {}", e);
    }
    if let Err(e) = store.record_sufficiency(&sufficiency) {
        log::warn!("failed to record sufficiency: {}", e);
    }

    println!(
        "Planned {} meals across {} crew member(s).",
        meals.len(),
        plans.len()
    );
    Ok(())
}

fn cmd_remaining(cli: &Cli) -> Result<()> {
    let store = MissionStore::open(&cli.store)?;
    display_remaining_budget(store.remaining_mass_budget()?);
    Ok(())
}

/// Interactively record preference ratings.
fn cmd_rate(
    cli: &Cli,
    crew: Option<String>,
    beverage: bool,
    item: Option<String>,
) -> Result<()> {
    let config = load_mission(&cli.mission)?;
    let catalog = if beverage {
        load_provisions(&cli.beverages)?
    } else {
        load_provisions(&cli.foods)?
    };
    let mut ratings = load_ratings(&cli.ratings)?;

    let crew_name = match crew {
        Some(name) => {
            if !config.crew.iter().any(|m| m.key() == name.to_lowercase()) {
                return Err(MissionError::CrewNotFound(name));
            }
            name
        }
        None => {
            let names: Vec<String> = config.crew.iter().map(|m| m.name.clone()).collect();
            select_crew_name(&names)?
        }
    };

    let names: Vec<&str> = catalog.iter().map(|i| i.name.as_str()).collect();
    let targets: Vec<String> = match item {
        Some(input) => {
            let resolved = resolve_item_name(&input, &names).ok_or_else(|| {
                MissionError::InvalidInput(format!("no catalog item matches '{}'", input))
            })?;
            vec![resolved]
        }
        None => unrated_names(&catalog, &ratings, &crew_name, beverage),
    };

    if targets.is_empty() {
        println!("No unrated items for {}.", crew_name);
        return Ok(());
    }
    println!("Rating {} item(s) for {}.", targets.len(), crew_name);

    let mut rated_count = 0;
    for name in &targets {
        let rating = prompt_rating(name)?;
        if beverage {
            ratings.set_beverage_rating(&crew_name, name, rating);
        } else {
            ratings.set_food_rating(&crew_name, name, rating);
        }
        rated_count += 1;

        if rated_count < targets.len() && !prompt_yes_no("Continue rating?", true)? {
            break;
        }
    }

    if rated_count > 0 {
        save_ratings(&cli.ratings, &ratings)?;
        println!("Recorded {} rating(s). Book saved.", rated_count);
    }
    Ok(())
}

fn unrated_names(
    catalog: &[ProvisionItem],
    ratings: &RatingBook,
    crew_name: &str,
    beverage: bool,
) -> Vec<String> {
    catalog
        .iter()
        .filter(|item| {
            if beverage {
                !ratings.has_beverage_rating(crew_name, &item.name)
            } else {
                !ratings.has_food_rating(crew_name, &item.name)
            }
        })
        .map(|item| item.name.clone())
        .collect()
}

fn cmd_export(cli: &Cli, out: &str) -> Result<()> {
    let store = MissionStore::open(&cli.store)?;
    store.export_meal_csv(out)?;
    println!("Meal schedule exported to {}.", out);
    Ok(())
}

fn cmd_reset(cli: &Cli, schedule: bool, budget: bool, sufficiency: bool) -> Result<()> {
    if !schedule && !budget && !sufficiency {
        println!("Please specify at least one reset option:");
        println!("  --schedule     Clear the meal schedule");
        println!("  --budget       Clear the life-support budget history");
        println!("  --sufficiency  Clear the sufficiency records");
        return Ok(());
    }

    let store = MissionStore::open(&cli.store)?;
    store.reset(schedule, budget, sufficiency)?;
    println!("Store reset.");
    Ok(())
}
