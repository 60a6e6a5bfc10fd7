/// DEEP service interface
pub mod deep;
/// Statistics service interface
pub mod stats;
/// Reference data service interface
pub mod symbols;
/// TOPS service interface
pub mod tops;
