/// DEEP book and event endpoints
pub mod deep;
/// Statistics endpoints
pub mod stats;
/// Reference data endpoints and symbol list helpers
pub mod symbols;
/// TOPS and HIST endpoints
pub mod tops;
/// Module containing common types and request plumbing used by services
pub mod types;

pub use types::*;
