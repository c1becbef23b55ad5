//! Secret missions
//!
//! A mission is drawn once at game start and never changes. Evaluating it only
//! reads the registry, so it can be checked any number of times.

use crate::core::{ArmyColor, Registry};
use crate::game::rng::RandomSource;
use crate::{Result, WarError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Territories the player must hold to satisfy [`MissionKind::ConquerThreshold`]
pub const CONQUER_THRESHOLD: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionKind {
    /// Leave the target color without troops anywhere on the map
    DestroyArmy,
    /// Hold at least [`CONQUER_THRESHOLD`] territories
    ConquerThreshold,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub kind: MissionKind,

    /// Target army; always `Some` for DestroyArmy and `None` otherwise
    pub target: Option<ArmyColor>,
}

impl Mission {
    pub fn destroy_army(target: impl Into<ArmyColor>) -> Self {
        Mission {
            kind: MissionKind::DestroyArmy,
            target: Some(target.into()),
        }
    }

    pub fn conquer_threshold() -> Self {
        Mission {
            kind: MissionKind::ConquerThreshold,
            target: None,
        }
    }

    /// Has the player completed this mission?
    pub fn evaluate(&self, registry: &Registry, player_color: &ArmyColor) -> bool {
        match self.kind {
            MissionKind::DestroyArmy => match &self.target {
                // An owned territory with zero troops does not keep the army alive
                Some(target) => !registry
                    .iter()
                    .any(|t| t.is_owned_by(target) && t.has_troops()),
                None => false,
            },
            MissionKind::ConquerThreshold => {
                registry.count_owned_by(player_color) >= CONQUER_THRESHOLD
            }
        }
    }

    /// Human-readable objective
    pub fn describe(&self) -> String {
        match (&self.kind, &self.target) {
            (MissionKind::DestroyArmy, Some(target)) => format!("Destroy the {} army", target),
            (MissionKind::DestroyArmy, None) => "Destroy an unknown army".to_string(),
            (MissionKind::ConquerThreshold, _) => format!(
                "Conquer {} territories (hold at least {} territories)",
                CONQUER_THRESHOLD, CONQUER_THRESHOLD
            ),
        }
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Draw a mission for the player
///
/// The kind is a fair coin. For DestroyArmy the target is redrawn from the
/// palette up to `retry_attempts` times until it differs from the player's
/// color; if every draw collides, the first eligible palette color is used.
pub fn assign_mission(
    player_color: &ArmyColor,
    palette: &[ArmyColor],
    retry_attempts: u32,
    rng: &mut dyn RandomSource,
) -> Result<Mission> {
    let kind = if rng.uniform(0, 1) == 0 {
        MissionKind::DestroyArmy
    } else {
        MissionKind::ConquerThreshold
    };

    if kind == MissionKind::ConquerThreshold {
        return Ok(Mission::conquer_threshold());
    }

    let fallback = palette
        .iter()
        .find(|c| *c != player_color)
        .ok_or_else(|| WarError::NoValidTarget(player_color.clone()))?;

    let last = (palette.len() - 1) as u32;
    let drawn = (0..retry_attempts)
        .map(|_| &palette[rng.uniform(0, last) as usize])
        .find(|c| *c != player_color);

    Ok(Mission::destroy_army(drawn.unwrap_or(fallback).clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Territory;
    use crate::game::rng::{GameRng, ScriptedRolls};

    fn palette() -> Vec<ArmyColor> {
        ["Verde", "Azul", "Vermelho", "Amarelo", "Roxo"]
            .iter()
            .map(|c| ArmyColor::new(*c))
            .collect()
    }

    fn registry_with_owners(owners: &[(&str, u32)]) -> Registry {
        Registry::from_territories(
            owners
                .iter()
                .enumerate()
                .map(|(i, (color, troops))| Territory::new(format!("T{}", i + 1), *color, *troops))
                .collect(),
        )
    }

    #[test]
    fn test_assign_conquer_threshold() {
        let mut rolls = ScriptedRolls::new([1]);
        let mission = assign_mission(&ArmyColor::new("Azul"), &palette(), 10, &mut rolls).unwrap();
        assert_eq!(mission, Mission::conquer_threshold());
        assert!(mission.target.is_none());
    }

    #[test]
    fn test_assign_destroy_army_skips_player_color() {
        // kind = DestroyArmy, then draw "Azul" (player), then "Roxo"
        let mut rolls = ScriptedRolls::new([0, 1, 4]);
        let mission = assign_mission(&ArmyColor::new("Azul"), &palette(), 10, &mut rolls).unwrap();
        assert_eq!(mission, Mission::destroy_army("Roxo"));
    }

    #[test]
    fn test_assign_falls_back_after_retries() {
        // Every draw lands on the player's color
        let mut rolls = ScriptedRolls::new([0, 1, 1, 1]);
        let mission = assign_mission(&ArmyColor::new("Azul"), &palette(), 3, &mut rolls).unwrap();
        assert_eq!(mission, Mission::destroy_army("Verde"));
    }

    #[test]
    fn test_assign_degenerate_palette() {
        let only_player = vec![ArmyColor::new("Azul")];
        let mut rolls = ScriptedRolls::new([0]);
        let err = assign_mission(&ArmyColor::new("Azul"), &only_player, 10, &mut rolls).unwrap_err();
        assert!(matches!(err, WarError::NoValidTarget(_)));
    }

    #[test]
    fn test_assigned_target_never_player_color() {
        let player = ArmyColor::new("Azul");
        let mut rng = GameRng::from_seed(3);
        for _ in 0..200 {
            let mission = assign_mission(&player, &palette(), 10, &mut rng).unwrap();
            if let Some(target) = mission.target {
                assert_ne!(target, player);
            }
        }
    }

    #[test]
    fn test_destroy_army_evaluation() {
        let player = ArmyColor::new("Azul");
        let mission = Mission::destroy_army("Verde");

        let alive = registry_with_owners(&[("Verde", 2), ("Azul", 3)]);
        assert!(!mission.evaluate(&alive, &player));

        // Nominal owner with zero troops counts as destroyed
        let depopulated = registry_with_owners(&[("Verde", 0), ("Azul", 3)]);
        assert!(mission.evaluate(&depopulated, &player));

        let gone = registry_with_owners(&[("Azul", 1), ("Roxo", 3)]);
        assert!(mission.evaluate(&gone, &player));
    }

    #[test]
    fn test_conquer_threshold_evaluation() {
        let player = ArmyColor::new("Azul");
        let mission = Mission::conquer_threshold();

        let three = registry_with_owners(&[
            ("Azul", 1),
            ("Azul", 2),
            ("Verde", 4),
            ("Azul", 1),
            ("Roxo", 5),
        ]);
        assert!(mission.evaluate(&three, &player));

        let two = registry_with_owners(&[
            ("Azul", 1),
            ("Verde", 2),
            ("Verde", 4),
            ("Azul", 1),
            ("Roxo", 5),
        ]);
        assert!(!mission.evaluate(&two, &player));

        // Ownership counts even with no troops left
        let zero_troops = registry_with_owners(&[("Azul", 0), ("Azul", 0), ("Azul", 0)]);
        assert!(mission.evaluate(&zero_troops, &player));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let player = ArmyColor::new("Azul");
        let registry = registry_with_owners(&[("Verde", 2), ("Azul", 3)]);
        let before = registry.clone();

        for mission in [Mission::destroy_army("Verde"), Mission::conquer_threshold()] {
            let first = mission.evaluate(&registry, &player);
            let second = mission.evaluate(&registry, &player);
            assert_eq!(first, second);
        }
        assert_eq!(registry, before);
    }

    #[test]
    fn test_describe() {
        assert_eq!(Mission::destroy_army("Roxo").describe(), "Destroy the Roxo army");
        assert!(Mission::conquer_threshold().describe().starts_with("Conquer 3 territories"));
    }
}
