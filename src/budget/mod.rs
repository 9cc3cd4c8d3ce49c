pub mod calculations;

pub use calculations::compute_life_support;
