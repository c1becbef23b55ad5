//! Territory registry
//!
//! The registry is a fixed-length arena of [`Territory`] records created once at
//! game start. Nothing is added or removed afterwards; the combat resolver
//! mutates two entries at a time through [`Registry::pair_mut`].

use crate::core::{ArmyColor, Territory, TerritoryName};
use crate::loader::GameConfig;
use crate::{Result, WarError};
use serde::{Deserialize, Serialize};

/// Read-only listing row handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerritoryRow {
    /// 1-based display index
    pub index: usize,
    pub name: TerritoryName,
    pub owner: ArmyColor,
    pub troops: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    territories: Vec<Territory>,
}

impl Registry {
    /// Populate `count` territories from the first rows of the config's seed table
    ///
    /// Fails with [`WarError::AllocationFailure`] when the seed table is too short
    /// or `count` is zero.
    pub fn initialize(config: &GameConfig, count: usize) -> Result<Self> {
        let available = config.seed_len();
        if count == 0 || count > available {
            return Err(WarError::AllocationFailure {
                requested: count,
                available,
            });
        }

        let territories = config
            .names
            .iter()
            .zip(&config.colors)
            .zip(&config.initial_troops)
            .take(count)
            .map(|((name, color), &troops)| Territory::new(name.as_str(), color.as_str(), troops))
            .collect();

        Ok(Registry { territories })
    }

    /// Build a registry directly from territory records (mainly for tests)
    pub fn from_territories(territories: Vec<Territory>) -> Self {
        Registry { territories }
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// Get a territory by 0-based index
    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Territory> {
        self.territories.iter()
    }

    pub fn as_slice(&self) -> &[Territory] {
        &self.territories
    }

    /// Convert a 1-based (attacker, defender) selection into 0-based indices
    ///
    /// Both must lie in `[1, len]` and differ.
    pub fn validate_selection(&self, attacker: usize, defender: usize) -> Result<(usize, usize)> {
        let size = self.len();
        let in_range = |i: usize| (1..=size).contains(&i);
        if !in_range(attacker) || !in_range(defender) || attacker == defender {
            return Err(WarError::InvalidIndex {
                attacker,
                defender,
                size,
            });
        }
        Ok((attacker - 1, defender - 1))
    }

    /// Borrow two distinct territories mutably (0-based indices)
    pub(crate) fn pair_mut(
        &mut self,
        attacker: usize,
        defender: usize,
    ) -> Result<(&mut Territory, &mut Territory)> {
        let size = self.len();
        if attacker >= size || defender >= size || attacker == defender {
            return Err(WarError::InvalidIndex {
                attacker: attacker.saturating_add(1),
                defender: defender.saturating_add(1),
                size,
            });
        }

        if attacker < defender {
            let (left, right) = self.territories.split_at_mut(defender);
            Ok((&mut left[attacker], &mut right[0]))
        } else {
            let (left, right) = self.territories.split_at_mut(attacker);
            Ok((&mut right[0], &mut left[defender]))
        }
    }

    /// Ordered listing with 1-based indices
    pub fn list_territories(&self) -> Vec<TerritoryRow> {
        self.territories
            .iter()
            .enumerate()
            .map(|(i, t)| TerritoryRow {
                index: i + 1,
                name: t.name.clone(),
                owner: t.owner.clone(),
                troops: t.troops,
            })
            .collect()
    }

    /// Number of territories held by `color`, regardless of troops
    pub fn count_owned_by(&self, color: &ArmyColor) -> usize {
        self.territories.iter().filter(|t| t.is_owned_by(color)).count()
    }
}
