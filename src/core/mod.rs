//! Core game types and entities

pub mod registry;
pub mod territory;
pub mod types;

pub use registry::{Registry, TerritoryRow};
pub use territory::Territory;
pub use types::{ArmyColor, TerritoryName};
