//! war-rs - single-player territory conquest
//!
//! A fixed map of territories, each held by a colored army. The player
//! launches dice-resolved attacks and tries to complete a secret mission.

pub mod core;
pub mod display;
pub mod error;
pub mod game;
pub mod loader;
pub mod simulation;

pub use error::{Result, WarError};
