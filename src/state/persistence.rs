//! Loading and saving of the caller-owned input files: mission
//! configuration, provision catalogs, and the rating book.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{MissionConfig, ProvisionItem, RatingBook};

/// Load a mission configuration from a JSON file.
pub fn load_mission<P: AsRef<Path>>(path: P) -> Result<MissionConfig> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load a provision catalog from a JSON file.
///
/// Deduplicates by lowercase name (last occurrence wins).
pub fn load_provisions<P: AsRef<Path>>(path: P) -> Result<Vec<ProvisionItem>> {
    let content = fs::read_to_string(path)?;
    let items: Vec<ProvisionItem> = serde_json::from_str(&content)?;

    let mut seen: HashMap<String, ProvisionItem> = HashMap::new();
    for item in items {
        seen.insert(item.key(), item);
    }

    let mut deduped: Vec<ProvisionItem> = seen.into_values().collect();
    deduped.sort_by_key(|item| item.key());
    Ok(deduped)
}

/// Load the rating book, or an empty one if the file does not exist yet.
pub fn load_ratings<P: AsRef<Path>>(path: P) -> Result<RatingBook> {
    if !path.as_ref().exists() {
        return Ok(RatingBook::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save the rating book.
pub fn save_ratings<P: AsRef<Path>>(path: P, book: &RatingBook) -> Result<()> {
    let json = serde_json::to_string_pretty(book)?;
    fs::write(path, json)?;
    Ok(())
}
