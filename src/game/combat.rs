//! Combat resolution
//!
//! One attack is a single die per side. Ties go to the attacker. A defender
//! reduced to zero troops changes hands and receives exactly one troop.

use crate::core::{ArmyColor, Territory, TerritoryName};
use crate::game::rng::{roll_die, RandomSource};
use crate::{Result, WarError};
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs to narrate one attack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackOutcome {
    pub attacker: TerritoryName,
    pub defender: TerritoryName,

    /// Color of the attacking army (the new owner on conquest)
    pub attacker_color: ArmyColor,

    /// Color that held the defender before the attack
    pub defender_color: ArmyColor,

    pub attack_roll: u32,
    pub defense_roll: u32,

    /// Troop counts before the dice were rolled
    pub attacker_troops_before: u32,
    pub defender_troops_before: u32,

    /// Did the defender lose a troop?
    pub defender_lost_troop: bool,

    /// Did the defender change hands?
    pub conquered: bool,

    /// On conquest: did a troop actually leave the attacker, or was the
    /// attacker emptied from a single troop?
    pub troop_moved: bool,

    /// Troop counts after resolution
    pub attacker_troops: u32,
    pub defender_troops: u32,
}

/// Check that both sides can take part in an attack
fn check_preconditions(attacker: &Territory, defender: &Territory) -> Result<()> {
    if !attacker.has_troops() {
        return Err(WarError::AttackerEmpty(attacker.name.clone()));
    }
    if !defender.has_troops() {
        return Err(WarError::DefenderEmpty(defender.name.clone()));
    }
    Ok(())
}

/// Resolve one attack, drawing both dice from `rng`
///
/// Preconditions are checked before any roll, so a rejected attack consumes
/// no randomness and changes nothing.
pub fn resolve_attack(
    attacker: &mut Territory,
    defender: &mut Territory,
    rng: &mut dyn RandomSource,
) -> Result<AttackOutcome> {
    check_preconditions(attacker, defender)?;

    let attack_roll = roll_die(rng);
    let defense_roll = roll_die(rng);

    apply_rolls(attacker, defender, attack_roll, defense_roll)
}

/// Resolve one attack with the given dice
///
/// Pure function of the two territories and the two rolls.
pub fn apply_rolls(
    attacker: &mut Territory,
    defender: &mut Territory,
    attack_roll: u32,
    defense_roll: u32,
) -> Result<AttackOutcome> {
    check_preconditions(attacker, defender)?;

    let attacker_troops_before = attacker.troops;
    let defender_troops_before = defender.troops;
    let defender_color = defender.owner.clone();

    let mut defender_lost_troop = false;
    let mut conquered = false;
    let mut troop_moved = false;

    if attack_roll >= defense_roll {
        defender_lost_troop = true;

        if defender.lose_troop() {
            conquered = true;
            defender.owner = attacker.owner.clone();
            defender.troops = 1;

            if attacker.troops > 1 {
                attacker.troops -= 1;
                troop_moved = true;
            } else {
                // A lone attacker still occupies the conquered territory and is
                // left with nothing behind.
                attacker.troops = 0;
            }
        }
    }

    Ok(AttackOutcome {
        attacker: attacker.name.clone(),
        defender: defender.name.clone(),
        attacker_color: attacker.owner.clone(),
        defender_color,
        attack_roll,
        defense_roll,
        attacker_troops_before,
        defender_troops_before,
        defender_lost_troop,
        conquered,
        troop_moved,
        attacker_troops: attacker.troops,
        defender_troops: defender.troops,
    })
}
