//! Game loop implementation
//!
//! Sequences player commands: attacks (each sub-attack validated on its own),
//! mission checks, and quitting. Owns no game data beyond loop control.

/// Macro for conditional logging that avoids allocation when feature is disabled
///
/// When verbose-logging feature is disabled, this becomes a no-op at compile time,
/// eliminating the format! allocations of per-attack narration.
macro_rules! log_if_verbose {
    ($self:expr, $level:expr, $($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        {
            $self.game.logger.event($level, "combat", &format!($($arg)*));
        }
        #[cfg(not(feature = "verbose-logging"))]
        {
            let _ = &$self; // Suppress unused variable warning
        }
    };
}

use crate::game::combat::AttackOutcome;
use crate::game::controller::{AttackSelection, Command, GameStateView, PlayerController};
use crate::game::input::check_attack_count;
use crate::game::logger::VerbosityLevel;
use crate::game::GameState;
use crate::WarError;
use smallvec::SmallVec;

/// Session state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Playing,
    /// Mission satisfied (terminal)
    Won,
    /// Player quit (terminal)
    Exited,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::Playing)
    }
}

/// Result of one sub-attack of an `Attack(n)` command
#[derive(Debug)]
pub struct SubAttackReport {
    /// 1-based position within the command
    pub number: u32,
    /// What the controller selected, if it could be read
    pub selection: Option<AttackSelection>,
    pub result: Result<AttackOutcome, WarError>,
}

/// What processing a single command did
#[derive(Debug)]
pub enum CommandOutcome {
    Attacks(SmallVec<[SubAttackReport; 4]>),
    MissionChecked { satisfied: bool, description: String },
    Quit,
    InvalidOption(String),
    Malformed(String),
    /// The session had already ended
    Ignored,
}

/// Reason the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEndReason {
    /// A mission check found the mission satisfied
    MissionComplete,
    /// The player quit
    PlayerQuit,
    /// The loop hit its command limit (automated play only)
    TurnLimit,
}

/// Result of running a session to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub end_reason: GameEndReason,
    /// Commands processed, including invalid ones
    pub turns_played: u32,
    /// Sub-attacks that reached the combat resolver and rolled dice
    pub attacks_resolved: u32,
    pub conquests: u32,
}

/// Game loop manager
pub struct GameLoop<'a> {
    pub game: &'a mut GameState,
    state: SessionState,
    /// Stop after this many commands (None = until won or quit)
    max_turns: Option<u32>,
    turns_elapsed: u32,
    attacks_resolved: u32,
    conquests: u32,
}

impl<'a> GameLoop<'a> {
    pub fn new(game: &'a mut GameState) -> Self {
        GameLoop {
            game,
            state: SessionState::Playing,
            max_turns: None,
            turns_elapsed: 0,
            attacks_resolved: 0,
            conquests: 0,
        }
    }

    /// Set maximum commands before the loop gives up
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    pub fn with_verbosity(self, verbosity: VerbosityLevel) -> Self {
        self.game.logger.set_verbosity(verbosity);
        self
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn turns_elapsed(&self) -> u32 {
        self.turns_elapsed
    }

    /// Run commands from `controller` until the session ends
    pub fn run(&mut self, controller: &mut dyn PlayerController) -> GameResult {
        let end_reason = loop {
            match self.state {
                SessionState::Won => break GameEndReason::MissionComplete,
                SessionState::Exited => break GameEndReason::PlayerQuit,
                SessionState::Playing => {}
            }
            if self.max_turns.is_some_and(|max| self.turns_elapsed >= max) {
                self.game
                    .logger
                    .minimal(&format!("Turn limit reached after {} turns.", self.turns_elapsed));
                break GameEndReason::TurnLimit;
            }

            let command = {
                let view = GameStateView::new(self.game);
                controller.next_command(&view)
            };
            let outcome = self.process_command(command, controller);

            let view = GameStateView::new(self.game);
            controller.on_command_outcome(&view, &outcome);
        };

        let result = GameResult {
            end_reason,
            turns_played: self.turns_elapsed,
            attacks_resolved: self.attacks_resolved,
            conquests: self.conquests,
        };

        let view = GameStateView::new(self.game);
        controller.on_game_end(&view, &result);
        result
    }

    /// Process one command
    ///
    /// Terminal states accept nothing further.
    pub fn process_command(
        &mut self,
        command: Command,
        controller: &mut dyn PlayerController,
    ) -> CommandOutcome {
        if self.state.is_terminal() {
            return CommandOutcome::Ignored;
        }
        self.turns_elapsed += 1;

        match command {
            Command::Attack(count) => match check_attack_count(count) {
                Ok(count) => CommandOutcome::Attacks(self.attack_phase(count, controller)),
                Err(e) => {
                    let reason = e.to_string();
                    self.game.logger.normal(&format!("Invalid input: {}", reason));
                    CommandOutcome::Malformed(reason)
                }
            },
            Command::CheckMission => self.check_mission(),
            Command::Quit => {
                self.game.logger.minimal("Leaving the game...");
                self.state = SessionState::Exited;
                CommandOutcome::Quit
            }
            Command::Invalid(option) => {
                self.game
                    .logger
                    .normal(&format!("Invalid option '{}'. Try again.", option));
                CommandOutcome::InvalidOption(option)
            }
            Command::Malformed(reason) => {
                self.game.logger.normal(&format!("Invalid input: {}", reason));
                CommandOutcome::Malformed(reason)
            }
        }
    }

    /// Run up to `count` sub-attacks; a failed one never stops the rest
    fn attack_phase(
        &mut self,
        count: u32,
        controller: &mut dyn PlayerController,
    ) -> SmallVec<[SubAttackReport; 4]> {
        let mut reports = SmallVec::new();

        for number in 1..=count {
            log_if_verbose!(self, VerbosityLevel::Verbose, ">>> Attack {} of {} <<<", number, count);

            let selection = {
                let view = GameStateView::new(self.game);
                controller.choose_attack(&view, number, count)
            };

            let report = match selection {
                Ok(selection) => {
                    let result = self.game.attack(selection.attacker, selection.defender);
                    SubAttackReport {
                        number,
                        selection: Some(selection),
                        result,
                    }
                }
                Err(e) => SubAttackReport {
                    number,
                    selection: None,
                    result: Err(e),
                },
            };

            match &report.result {
                Ok(outcome) => {
                    self.attacks_resolved += 1;
                    if outcome.conquered {
                        self.conquests += 1;
                    }
                    self.narrate(outcome);
                }
                Err(e) => {
                    self.game.logger.event(
                        VerbosityLevel::Normal,
                        "combat",
                        &format!("Attack {} of {} cancelled: {}", number, count, e),
                    );
                }
            }

            reports.push(report);
        }

        reports
    }

    fn narrate(&self, outcome: &AttackOutcome) {
        log_if_verbose!(
            self,
            VerbosityLevel::Normal,
            "{} (troops: {}, army: {}) attacks {} (troops: {}, army: {})",
            outcome.attacker,
            outcome.attacker_troops_before,
            outcome.attacker_color,
            outcome.defender,
            outcome.defender_troops_before,
            outcome.defender_color
        );
        log_if_verbose!(
            self,
            VerbosityLevel::Verbose,
            "Roll: attacker {} vs defender {}",
            outcome.attack_roll,
            outcome.defense_roll
        );

        if !outcome.defender_lost_troop {
            log_if_verbose!(
                self,
                VerbosityLevel::Normal,
                "Result: successful defense, {} loses nothing.",
                outcome.defender
            );
            return;
        }

        if outcome.conquered {
            log_if_verbose!(
                self,
                VerbosityLevel::Normal,
                "Territory {} was conquered by {}!",
                outcome.defender,
                outcome.attacker_color
            );
            if outcome.troop_moved {
                log_if_verbose!(
                    self,
                    VerbosityLevel::Verbose,
                    "One troop moved from {} to {}.",
                    outcome.attacker,
                    outcome.defender
                );
            } else {
                log_if_verbose!(
                    self,
                    VerbosityLevel::Verbose,
                    "{} committed its last troop and is left empty.",
                    outcome.attacker
                );
            }
        } else {
            log_if_verbose!(
                self,
                VerbosityLevel::Normal,
                "Result: {} loses 1 troop (now {}).",
                outcome.defender,
                outcome.defender_troops
            );
        }
    }

    fn check_mission(&mut self) -> CommandOutcome {
        let satisfied = self.game.check_mission();
        let description = self.game.describe_mission();

        if satisfied {
            self.game
                .logger
                .event(VerbosityLevel::Minimal, "mission", &format!("Congratulations! Mission complete: {}", description));
            self.state = SessionState::Won;
        } else {
            self.game
                .logger
                .event(VerbosityLevel::Normal, "mission", &format!("Mission not complete yet: {}", description));
        }

        CommandOutcome::MissionChecked {
            satisfied,
            description,
        }
    }
}
