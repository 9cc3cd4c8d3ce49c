use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{MissionError, Result};

/// Minimum similarity for fuzzy item-name resolution.
const FUZZY_MATCH_THRESHOLD: f64 = 0.85;

/// Prompt for a yes/no answer.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for a preference rating, 0-5.
pub fn prompt_rating(item_name: &str) -> Result<i64> {
    let input: String = Input::new()
        .with_prompt(format!("Rating for {} (0-5)", item_name))
        .default("3".to_string())
        .interact_text()?;

    let rating: i64 = input
        .parse()
        .map_err(|_| MissionError::InvalidInput(format!("Invalid rating: {}", input)))?;

    if !(0..=5).contains(&rating) {
        return Err(MissionError::InvalidInput(format!(
            "Rating {} is outside 0-5",
            rating
        )));
    }
    Ok(rating)
}

/// Pick a crew member from the roster.
pub fn select_crew_name(names: &[String]) -> Result<String> {
    if names.is_empty() {
        return Err(MissionError::InvalidInput(
            "crew roster is empty".to_string(),
        ));
    }
    let index = Select::new()
        .with_prompt("Crew member")
        .items(names)
        .default(0)
        .interact()?;
    Ok(names[index].clone())
}

/// Resolve user input against catalog names: exact match first
/// (case-insensitive), otherwise the closest Jaro-Winkler match above the
/// threshold.
pub fn resolve_item_name(input: &str, names: &[&str]) -> Option<String> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some(exact) = names.iter().find(|n| n.to_lowercase() == needle) {
        return Some((*exact).to_string());
    }

    names
        .iter()
        .map(|n| (n, jaro_winkler(&needle, &n.to_lowercase())))
        .filter(|(_, score)| *score >= FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(n, _)| (*n).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_case_insensitive() {
        let names = ["Oat Bar", "Protein Stew"];
        assert_eq!(
            resolve_item_name("OAT BAR", &names),
            Some("Oat Bar".to_string())
        );
    }

    #[test]
    fn test_resolve_fuzzy_typo() {
        let names = ["Oat Bar", "Protein Stew"];
        assert_eq!(
            resolve_item_name("protien stew", &names),
            Some("Protein Stew".to_string())
        );
    }

    #[test]
    fn test_resolve_rejects_distant_input() {
        let names = ["Oat Bar", "Protein Stew"];
        assert_eq!(resolve_item_name("xylophone", &names), None);
        assert_eq!(resolve_item_name("   ", &names), None);
    }
}
