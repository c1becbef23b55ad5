//! Player controller trait and game state view
//!
//! This module defines the interface between the turn orchestrator and
//! whatever supplies commands (a human at a terminal, a script, a random
//! stand-in). Controllers only see the game through a read-only view.

use crate::core::{ArmyColor, Territory, TerritoryRow};
use crate::game::game_loop::{CommandOutcome, GameResult};
use crate::game::logger::GameLogger;
use crate::game::mission::Mission;
use crate::game::GameState;
use crate::Result;

/// A command issued between turns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Perform up to this many sub-attacks
    Attack(u32),

    /// Evaluate the mission; winning ends the session
    CheckMission,

    /// End the session
    Quit,

    /// Recognized input that did not name a known option
    Invalid(String),

    /// Input that could not be read as a command at all
    Malformed(String),
}

/// Attacker and defender as entered by the player (1-based, unvalidated)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackSelection {
    pub attacker: usize,
    pub defender: usize,
}

impl AttackSelection {
    pub fn new(attacker: usize, defender: usize) -> Self {
        AttackSelection { attacker, defender }
    }
}

/// Read-only view of game state for controllers
pub struct GameStateView<'a> {
    game: &'a GameState,
}

impl<'a> GameStateView<'a> {
    pub fn new(game: &'a GameState) -> Self {
        GameStateView { game }
    }

    pub fn list_territories(&self) -> Vec<TerritoryRow> {
        self.game.list_territories()
    }

    pub fn territory_count(&self) -> usize {
        self.game.registry().len()
    }

    /// Territories in registry order
    pub fn territories(&self) -> &[Territory] {
        self.game.registry().as_slice()
    }

    pub fn describe_mission(&self) -> String {
        self.game.describe_mission()
    }

    pub fn mission(&self) -> &Mission {
        self.game.mission()
    }

    pub fn player_color(&self) -> &ArmyColor {
        self.game.player_color()
    }

    pub fn logger(&self) -> &GameLogger {
        &self.game.logger
    }
}

/// Player controller trait
///
/// The orchestrator asks for one command at a time and, for every sub-attack
/// of an `Attack` command, for one territory pair.
pub trait PlayerController {
    /// Next command for the session
    fn next_command(&mut self, view: &GameStateView) -> Command;

    /// Territories for sub-attack `sub_attack` of `total` (both 1-based)
    ///
    /// Returns `WarError::MalformedCommand` when the selection could not be
    /// read; the orchestrator skips that sub-attack.
    fn choose_attack(
        &mut self,
        view: &GameStateView,
        sub_attack: u32,
        total: u32,
    ) -> Result<AttackSelection>;

    /// Called after each command with what happened
    fn on_command_outcome(&mut self, _view: &GameStateView, _outcome: &CommandOutcome) {}

    /// Called once when the session ends
    fn on_game_end(&mut self, _view: &GameStateView, _result: &GameResult) {}
}
