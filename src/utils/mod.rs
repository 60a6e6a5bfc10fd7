/// Module containing environment variable helpers
pub mod config;
/// Module containing logging utilities
pub mod logger;
/// Module containing argument validation and normalization helpers
pub mod validation;

pub use logger::*;
pub use validation::*;
