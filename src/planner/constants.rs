/// Meal slots scheduled per mission day.
pub const MEALS_PER_DAY: u8 = 3;

/// Default beverage serving per meal, grams.
pub const DEFAULT_WATER_PER_MEAL_G: f64 = 250.0;

/// Default un-rationed calorie target per crew member per day.
pub const DEFAULT_DAILY_KCAL_TARGET: f64 = 2400.0;

/// Lowest ration fraction the search will attempt.
pub const DEFAULT_MIN_RATION_FRACTION: f64 = 0.6;

/// Ration fraction decrement per search attempt.
pub const DEFAULT_RATION_STEP: f64 = 0.01;

/// Ratings at or above this value make an item selectable.
pub const MIN_ELIGIBLE_RATING: i64 = 2;

/// Recency window length in items: 6 meals x (food + beverage).
pub const RECENCY_WINDOW_ITEMS: usize = 12;

// ─────────────────────────────────────────────────────────────────────────────
// Sufficiency thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Intake ratios below this are classified insufficient.
pub const INSUFFICIENT_BELOW: f64 = 0.85;

/// Intake ratios below this (and at or above the insufficient bound) are
/// classified moderate.
pub const MODERATE_BELOW: f64 = 0.95;
