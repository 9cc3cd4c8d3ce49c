use thiserror::Error;

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("Unknown activity level: {0}")]
    UnknownActivity(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No eligible {kind}s for crew member {crew}")]
    NoEligibleItems { crew: String, kind: &'static str },

    #[error("Crew member not found: {0}")]
    CrewNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, MissionError>;
