//! Territory representation

use crate::core::{ArmyColor, TerritoryName};
use serde::{Deserialize, Serialize};

/// A unit of the map: a name, the color of the army holding it and its troops
///
/// Territories have no id of their own; identity is the position in the
/// [`Registry`](crate::core::Registry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    pub name: TerritoryName,

    /// Color of the army currently holding this territory
    pub owner: ArmyColor,

    /// Troops stationed here. Unsigned, so never negative.
    pub troops: u32,
}

impl Territory {
    pub fn new(name: impl Into<TerritoryName>, owner: impl Into<ArmyColor>, troops: u32) -> Self {
        Territory {
            name: name.into(),
            owner: owner.into(),
            troops,
        }
    }

    pub fn is_owned_by(&self, color: &ArmyColor) -> bool {
        self.owner == *color
    }

    pub fn has_troops(&self) -> bool {
        self.troops > 0
    }

    /// Remove one troop, returning true if the territory is now empty
    pub(crate) fn lose_troop(&mut self) -> bool {
        self.troops = self.troops.saturating_sub(1);
        self.troops == 0
    }
}
