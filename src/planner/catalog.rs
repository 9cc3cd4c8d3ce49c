//! Eligibility filter over the provision catalogs.

use std::collections::HashMap;

use crate::models::{ProvisionItem, RatedItem};
use crate::planner::constants::MIN_ELIGIBLE_RATING;

/// Filter a catalog down to one crew member's eligible items.
///
/// An item is eligible when the crew member rated it above the minimum
/// threshold and its energy density is positive. Items failing either
/// condition are excluded outright, never zero-weighted. Rating keys are
/// matched case-insensitively against catalog names.
pub fn eligible_items(catalog: &[ProvisionItem], ratings: &HashMap<String, i64>) -> Vec<RatedItem> {
    let ratings: HashMap<String, i64> = ratings
        .iter()
        .map(|(name, rating)| (name.to_lowercase(), *rating))
        .collect();

    catalog
        .iter()
        .filter_map(|item| {
            let rating = *ratings.get(&item.key())?;
            if rating >= MIN_ELIGIBLE_RATING && item.calories_per_gram > 0.0 {
                Some(RatedItem {
                    name: item.name.clone(),
                    calories_per_gram: item.calories_per_gram,
                    rating,
                })
            } else {
                None
            }
        })
        .collect()
}
