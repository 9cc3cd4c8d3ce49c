use serde::{Deserialize, Serialize};

/// A crew member on the mission roster.
///
/// The name is the unique key; body mass feeds the oxygen requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    pub name: String,

    pub body_mass_kg: f64,
}

impl CrewMember {
    pub fn new(name: impl Into<String>, body_mass_kg: f64) -> Self {
        Self {
            name: name.into(),
            body_mass_kg,
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
