use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A catalog entry for a food or beverage provision.
///
/// Energy density is kcal per gram; the macro fields are informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionItem {
    pub name: String,

    pub calories_per_gram: f64,

    #[serde(default)]
    pub fat_per_gram: f64,

    #[serde(default)]
    pub sugar_per_gram: f64,

    #[serde(default)]
    pub protein_per_gram: f64,
}

impl ProvisionItem {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl PartialEq for ProvisionItem {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

impl Eq for ProvisionItem {}

/// An eligible item decorated with one crew member's preference rating.
///
/// Produced by the catalog filter; the rating doubles as the selection
/// weight in the slot assigner.
#[derive(Debug, Clone)]
pub struct RatedItem {
    pub name: String,
    pub calories_per_gram: f64,
    pub rating: i64,
}

/// Per-crew preference ratings for both catalogs.
///
/// Outer key is the crew member's name, inner key the item name. Item
/// lookups are case-insensitive; items never rated are simply absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingBook {
    #[serde(default)]
    pub food: HashMap<String, HashMap<String, i64>>,

    #[serde(default)]
    pub beverage: HashMap<String, HashMap<String, i64>>,
}

fn lowered(ratings: Option<&HashMap<String, i64>>) -> HashMap<String, i64> {
    ratings
        .map(|m| {
            m.iter()
                .map(|(name, rating)| (name.to_lowercase(), *rating))
                .collect()
        })
        .unwrap_or_default()
}

impl RatingBook {
    /// Food ratings for one crew member, keyed by lowercase item name.
    pub fn food_ratings_for(&self, crew: &str) -> HashMap<String, i64> {
        lowered(self.food.get(crew))
    }

    /// Beverage ratings for one crew member, keyed by lowercase item name.
    pub fn beverage_ratings_for(&self, crew: &str) -> HashMap<String, i64> {
        lowered(self.beverage.get(crew))
    }

    pub fn set_food_rating(&mut self, crew: &str, item: &str, rating: i64) {
        self.food
            .entry(crew.to_string())
            .or_default()
            .insert(item.to_string(), rating);
    }

    pub fn set_beverage_rating(&mut self, crew: &str, item: &str, rating: i64) {
        self.beverage
            .entry(crew.to_string())
            .or_default()
            .insert(item.to_string(), rating);
    }

    /// Whether the crew member has any rating recorded for the item.
    pub fn has_food_rating(&self, crew: &str, item: &str) -> bool {
        self.food_ratings_for(crew).contains_key(&item.to_lowercase())
    }

    pub fn has_beverage_rating(&self, crew: &str, item: &str) -> bool {
        self.beverage_ratings_for(crew)
            .contains_key(&item.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_case_insensitive() {
        let a = ProvisionItem {
            name: "Oat Bar".to_string(),
            calories_per_gram: 4.2,
            fat_per_gram: 0.1,
            sugar_per_gram: 0.2,
            protein_per_gram: 0.15,
        };
        let mut b = a.clone();
        b.name = "OAT BAR".to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rating_book_case_insensitive_items() {
        let mut book = RatingBook::default();
        book.set_food_rating("Dana", "Oat Bar", 4);

        let ratings = book.food_ratings_for("Dana");
        assert_eq!(ratings.get("oat bar"), Some(&4));
        assert!(book.has_food_rating("Dana", "OAT BAR"));
        assert!(!book.has_food_rating("Dana", "Granola"));
    }

    #[test]
    fn test_rating_book_unknown_crew_is_empty() {
        let book = RatingBook::default();
        assert!(book.food_ratings_for("Nobody").is_empty());
        assert!(book.beverage_ratings_for("Nobody").is_empty());
    }
}
