//! Batch simulation of seeded games
//!
//! Plays many sessions with [`RandomController`] in parallel using rayon and
//! aggregates how they ended. Useful for checking how attainable each mission
//! kind is on a given map.

use crate::game::{GameEndReason, GameLoop, GameState, MissionKind, RandomController, VerbosityLevel};
use crate::loader::GameConfig;
use crate::Result;
use rayon::prelude::*;
use std::time::Instant;

/// Per-game summary produced by one simulated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub seed: u64,
    pub mission: MissionKind,
    pub end_reason: GameEndReason,
    pub turns: u32,
    pub conquests: u32,
}

/// Aggregated statistics over a batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub games: usize,
    pub wins: usize,
    pub turn_limits: usize,
    pub quits: usize,
    pub destroy_army_games: usize,
    pub destroy_army_wins: usize,
    pub conquer_games: usize,
    pub conquer_wins: usize,
    /// Sum of turns over won games
    pub turns_to_win: u64,
    pub conquests: u64,
}

impl BatchStats {
    fn record(mut self, game: &GameRecord) -> Self {
        self.games += 1;
        self.conquests += u64::from(game.conquests);

        let won = game.end_reason == GameEndReason::MissionComplete;
        match game.end_reason {
            GameEndReason::MissionComplete => {
                self.wins += 1;
                self.turns_to_win += u64::from(game.turns);
            }
            GameEndReason::TurnLimit => self.turn_limits += 1,
            GameEndReason::PlayerQuit => self.quits += 1,
        }

        match game.mission {
            MissionKind::DestroyArmy => {
                self.destroy_army_games += 1;
                self.destroy_army_wins += usize::from(won);
            }
            MissionKind::ConquerThreshold => {
                self.conquer_games += 1;
                self.conquer_wins += usize::from(won);
            }
        }
        self
    }

    fn merge(mut self, other: BatchStats) -> Self {
        self.games += other.games;
        self.wins += other.wins;
        self.turn_limits += other.turn_limits;
        self.quits += other.quits;
        self.destroy_army_games += other.destroy_army_games;
        self.destroy_army_wins += other.destroy_army_wins;
        self.conquer_games += other.conquer_games;
        self.conquer_wins += other.conquer_wins;
        self.turns_to_win += other.turns_to_win;
        self.conquests += other.conquests;
        self
    }

    pub fn average_turns_to_win(&self) -> Option<f64> {
        (self.wins > 0).then(|| self.turns_to_win as f64 / self.wins as f64)
    }

    pub fn print_summary(&self) {
        let pct = |n: usize, d: usize| if d == 0 { 0.0 } else { 100.0 * n as f64 / d as f64 };

        println!("=== Results ===");
        println!("Games: {}", self.games);
        println!("Missions completed: {} ({:.1}%)", self.wins, pct(self.wins, self.games));
        println!(
            "Turn limit reached: {} ({:.1}%)",
            self.turn_limits,
            pct(self.turn_limits, self.games)
        );
        if self.quits > 0 {
            println!("Quit: {}", self.quits);
        }

        println!("\n=== By Mission ===");
        println!(
            "  Destroy army: {}/{} ({:.1}%)",
            self.destroy_army_wins,
            self.destroy_army_games,
            pct(self.destroy_army_wins, self.destroy_army_games)
        );
        println!(
            "  Conquer territories: {}/{} ({:.1}%)",
            self.conquer_wins,
            self.conquer_games,
            pct(self.conquer_wins, self.conquer_games)
        );

        if let Some(avg) = self.average_turns_to_win() {
            println!("\nAverage turns to win: {:.2}", avg);
        }
        println!("Total conquests: {}", self.conquests);
    }
}

/// Seed for game `index` of a batch started from `base_seed`
pub fn game_seed(base_seed: u64, index: u64) -> u64 {
    base_seed.wrapping_add(index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

/// Play one silent session with a random controller
pub fn simulate_game(config: &GameConfig, seed: u64, max_turns: u32) -> Result<GameRecord> {
    let mut game = GameState::new(config, seed)?;
    let mission = game.mission().kind;
    let mut controller = RandomController::with_seed(seed.wrapping_add(0x1234_5678_9ABC_DEF0));

    let result = GameLoop::new(&mut game)
        .with_verbosity(VerbosityLevel::Silent)
        .with_max_turns(max_turns)
        .run(&mut controller);

    Ok(GameRecord {
        seed,
        mission,
        end_reason: result.end_reason,
        turns: result.turns_played,
        conquests: result.conquests,
    })
}

/// Run `games` sessions in parallel and aggregate them
///
/// Results depend only on the arguments, not on thread scheduling.
pub fn run_batch(config: &GameConfig, games: usize, base_seed: u64, max_turns: u32) -> Result<BatchStats> {
    config.validate()?;

    let records: Vec<GameRecord> = (0..games as u64)
        .into_par_iter()
        .map(|i| simulate_game(config, game_seed(base_seed, i), max_turns))
        .collect::<Result<Vec<_>>>()?;

    Ok(records
        .par_iter()
        .fold(BatchStats::default, BatchStats::record)
        .reduce(BatchStats::default, BatchStats::merge))
}

/// Run a batch and print progress and a summary
pub fn run_and_report(config: &GameConfig, games: usize, base_seed: u64, max_turns: u32) -> Result<BatchStats> {
    println!("=== war-rs - Simulation Mode ===\n");
    println!("Running {} games (seed {}, max {} turns each)", games, base_seed, max_turns);

    let start = Instant::now();
    let stats = run_batch(config, games, base_seed, max_turns)?;
    let elapsed = start.elapsed();

    println!("Elapsed time: {:.2}s", elapsed.as_secs_f64());
    println!("Games per second: {:.2}\n", stats.games as f64 / elapsed.as_secs_f64().max(f64::EPSILON));
    stats.print_summary();
    Ok(stats)
}
