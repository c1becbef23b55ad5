//! Error types for war-rs

use crate::core::{ArmyColor, TerritoryName};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarError {
    #[error("Cannot create registry: requested {requested} territories, seed table has {available}")]
    AllocationFailure { requested: usize, available: usize },

    #[error("Invalid territory selection: attacker {attacker}, defender {defender} (valid: 1-{size}, distinct)")]
    InvalidIndex {
        attacker: usize,
        defender: usize,
        size: usize,
    },

    #[error("Attacking territory '{0}' has no troops")]
    AttackerEmpty(TerritoryName),

    #[error("Defending territory '{0}' is already empty")]
    DefenderEmpty(TerritoryName),

    #[error("Malformed command: {0}")]
    MalformedCommand(String),

    #[error("No mission target available: every palette color equals the player color '{0}'")]
    NoValidTarget(ArmyColor),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl WarError {
    /// Whether the session can continue after reporting this error.
    ///
    /// Recoverable errors abort a single sub-attack or command; everything else
    /// indicates a broken setup and ends the process.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WarError::InvalidIndex { .. }
                | WarError::AttackerEmpty(_)
                | WarError::DefenderEmpty(_)
                | WarError::MalformedCommand(_)
        )
    }
}

impl From<serde_json::Error> for WarError {
    fn from(err: serde_json::Error) -> Self {
        WarError::SerializationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WarError>;
