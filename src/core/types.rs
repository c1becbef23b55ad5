//! Strongly-typed wrappers for game concepts
//!
//! Territory names and army colors are both plain strings in the seed tables.
//! Wrapping them keeps a color from being compared against a name by accident.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Territory name (e.g. "Amazonas", "Mata Atlantica")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TerritoryName(String);

impl TerritoryName {
    pub fn new(s: impl Into<String>) -> Self {
        TerritoryName(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TerritoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TerritoryName {
    fn from(s: String) -> Self {
        TerritoryName(s)
    }
}

impl From<&str> for TerritoryName {
    fn from(s: &str) -> Self {
        TerritoryName(s.to_string())
    }
}

/// Army color identifying which force owns a territory
///
/// Ownership is nominal: two territories belong to the same force exactly when
/// their colors compare equal. There is no separate player entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArmyColor(String);

impl ArmyColor {
    pub fn new(s: impl Into<String>) -> Self {
        ArmyColor(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArmyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ArmyColor {
    fn from(s: String) -> Self {
        ArmyColor(s)
    }
}

impl From<&str> for ArmyColor {
    fn from(s: &str) -> Self {
        ArmyColor(s.to_string())
    }
}

impl PartialEq<str> for ArmyColor {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ArmyColor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
