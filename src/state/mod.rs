pub mod persistence;
pub mod records;
pub mod store;

pub use persistence::{load_mission, load_provisions, load_ratings, save_ratings};
pub use records::{LifeSupportRecord, SufficiencyRecord};
pub use store::MissionStore;
