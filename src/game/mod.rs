//! Game rules, turn loop and controllers

pub mod combat;
pub mod controller;
pub mod fixed_script_controller;
pub mod game_loop;
pub mod input;
pub mod interactive_controller;
pub mod logger;
pub mod mission;
pub mod random_controller;
pub mod rng;
pub mod state;

pub use combat::{apply_rolls, resolve_attack, AttackOutcome};
pub use controller::{AttackSelection, Command, GameStateView, PlayerController};
pub use fixed_script_controller::FixedScriptController;
pub use game_loop::{CommandOutcome, GameEndReason, GameLoop, GameResult, SessionState, SubAttackReport};
pub use interactive_controller::{InteractiveController, Terminal};
pub use logger::{GameLogger, LogEntry, OutputFormat, VerbosityLevel};
pub use mission::{assign_mission, Mission, MissionKind, CONQUER_THRESHOLD};
pub use random_controller::RandomController;
pub use rng::{GameRng, RandomSource, ScriptedRolls};
pub use state::GameState;
