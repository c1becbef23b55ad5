//! Game configuration loader
//!
//! Seed tables (territory names, owners, troops) and the mission color palette
//! come from a [`GameConfig`], either the built-in reference setup or a JSON file.

pub mod config;

pub use config::GameConfig;
