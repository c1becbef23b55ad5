//! Game configuration (.json format)

use crate::core::ArmyColor;
use crate::{Result, WarError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const REFERENCE_NAMES: [&str; 5] = ["Amazonas", "Cerrado", "Pantanal", "Caatinga", "Mata Atlantica"];
const REFERENCE_COLORS: [&str; 5] = ["Verde", "Azul", "Vermelho", "Amarelo", "Roxo"];
const REFERENCE_TROOPS: [u32; 5] = [5, 4, 6, 3, 5];
const REFERENCE_PLAYER_COLOR: &str = "Azul";

/// Immutable setup data for one game session
///
/// `names`, `colors` and `initial_troops` are parallel columns of the seed
/// table; row `i` becomes territory `i` of the registry. Any field missing from
/// a config file falls back to the reference setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub names: Vec<String>,
    pub colors: Vec<String>,
    pub initial_troops: Vec<u32>,

    /// Colors that may be drawn as a DestroyArmy target
    pub palette: Vec<String>,

    /// Color of the force the human controls
    pub player_color: String,

    /// How many seed rows to instantiate
    pub territory_count: usize,

    /// Random draws attempted before falling back to the first eligible color
    pub mission_retry_attempts: u32,
}

impl GameConfig {
    /// The five-territory setup the game ships with
    pub fn reference() -> Self {
        GameConfig {
            names: REFERENCE_NAMES.iter().map(|s| s.to_string()).collect(),
            colors: REFERENCE_COLORS.iter().map(|s| s.to_string()).collect(),
            initial_troops: REFERENCE_TROOPS.to_vec(),
            palette: REFERENCE_COLORS.iter().map(|s| s.to_string()).collect(),
            player_color: REFERENCE_PLAYER_COLOR.to_string(),
            territory_count: REFERENCE_NAMES.len(),
            mission_retry_attempts: 10,
        }
    }

    /// Load and validate a config from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a config from JSON text
    pub fn parse(content: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of complete rows in the seed table
    pub fn seed_len(&self) -> usize {
        self.names
            .len()
            .min(self.colors.len())
            .min(self.initial_troops.len())
    }

    pub fn player_color(&self) -> ArmyColor {
        ArmyColor::new(self.player_color.as_str())
    }

    pub fn palette(&self) -> Vec<ArmyColor> {
        self.palette.iter().map(|c| ArmyColor::new(c.as_str())).collect()
    }

    /// Check structural consistency of the tables
    ///
    /// `territory_count` is deliberately not checked against the seed table here;
    /// registry creation reports that case as an allocation failure.
    pub fn validate(&self) -> Result<()> {
        if self.names.is_empty() {
            return Err(WarError::InvalidConfig("seed table has no territories".to_string()));
        }
        if self.names.len() != self.colors.len() || self.names.len() != self.initial_troops.len() {
            return Err(WarError::InvalidConfig(format!(
                "seed table columns differ in length (names: {}, colors: {}, initial_troops: {})",
                self.names.len(),
                self.colors.len(),
                self.initial_troops.len()
            )));
        }
        if let Some(blank) = self.names.iter().position(|n| n.trim().is_empty()) {
            return Err(WarError::InvalidConfig(format!("territory {} has an empty name", blank + 1)));
        }
        if self.palette.is_empty() {
            return Err(WarError::InvalidConfig("color palette is empty".to_string()));
        }
        if self.player_color.trim().is_empty() {
            return Err(WarError::InvalidConfig("player color is empty".to_string()));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::reference()
    }
}
