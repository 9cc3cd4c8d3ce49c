pub mod assigner;
pub mod catalog;
pub mod constants;
pub mod ration;
pub mod sufficiency;

pub use assigner::{AssignmentRun, SelectionHistory, SlotAssigner, Strictness};
pub use catalog::eligible_items;
pub use ration::{plan_at_fraction, plan_within_mass_budget, RationSearchConfig};
pub use sufficiency::classify_intake;
