//! war-rs - Main Binary
//!
//! Text-based single-player territory conquest

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use war_rs::{
    game::{
        FixedScriptController, GameEndReason, GameLoop, GameRng, GameState, InteractiveController, OutputFormat,
        PlayerController, VerbosityLevel,
    },
    loader::GameConfig,
    simulation,
};

/// Verbosity level for game output (custom parser supporting both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

impl From<VerbosityArg> for VerbosityLevel {
    fn from(arg: VerbosityArg) -> Self {
        arg.0
    }
}

#[derive(Parser)]
#[command(name = "war")]
#[command(about = "war-rs - single-player territory conquest", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one session at the terminal
    Play {
        /// Set random seed for a reproducible mission and dice
        #[arg(long)]
        seed: Option<u64>,

        /// Game config file (.json); defaults to the reference map
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,

        /// Override the color of the army you command
        #[arg(long, value_name = "COLOR")]
        player_color: Option<String>,

        /// Disable ANSI colors in the map table
        #[arg(long)]
        no_color: bool,

        /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
        #[arg(long, default_value = "normal", short = 'v')]
        verbosity: VerbosityArg,

        /// Print narration as one JSON object per line
        #[arg(long)]
        json_log: bool,

        /// Fixed script input instead of stdin (space or comma separated, e.g., "1 1 2 3 2 0")
        #[arg(long, value_name = "CHOICES")]
        fixed_inputs: Option<String>,
    },

    /// Play many seeded games with a random controller and report statistics
    Simulate {
        /// Number of games to run
        #[arg(long, short = 'g', default_value_t = 1000)]
        games: usize,

        /// Base random seed; game i uses a seed derived from it
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Commands per game before it counts as a turn-limit draw
        #[arg(long, default_value_t = 200)]
        max_turns: u32,

        /// Game config file (.json); defaults to the reference map
        #[arg(long, value_name = "CONFIG_FILE")]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            config,
            player_color,
            no_color,
            verbosity,
            json_log,
            fixed_inputs,
        } => run_play(
            seed,
            config.as_deref(),
            player_color,
            !no_color,
            verbosity.into(),
            json_log,
            fixed_inputs,
        ),
        Commands::Simulate {
            games,
            seed,
            max_turns,
            config,
        } => {
            let config = load_config(config.as_deref())?;
            simulation::run_and_report(&config, games, seed, max_turns).context("simulation failed")?;
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(GameConfig::reference()),
    }
}

fn run_play(
    seed: Option<u64>,
    config_path: Option<&Path>,
    player_color: Option<String>,
    use_color: bool,
    verbosity: VerbosityLevel,
    json_log: bool,
    fixed_inputs: Option<String>,
) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(color) = player_color {
        config.player_color = color;
    }

    let rng = match seed {
        Some(seed) => GameRng::from_seed(seed),
        None => GameRng::from_entropy(),
    };
    let format = if json_log { OutputFormat::Json } else { OutputFormat::Text };
    let mut game = GameState::with_rng(&config, Box::new(rng)).context("failed to set up the game")?;
    game.logger.set_verbosity(verbosity);
    game.logger.set_output_format(format);

    if !json_log {
        println!("=== war-rs ===\n");
        if let Some(seed) = seed {
            println!("Using random seed: {seed}");
        }
        println!("You command the {} army.", game.player_color());
    }
    game.logger
        .verbose(&format!("Mission assigned: {}", game.describe_mission()));

    let mut controller: Box<dyn PlayerController> = match fixed_inputs {
        Some(script) => Box::new(FixedScriptController::from_script(&script)),
        None => Box::new(InteractiveController::stdio(format).with_color(use_color)),
    };

    let result = GameLoop::new(&mut game).run(controller.as_mut());

    if !json_log {
        println!("\n=== Game Over ===");
        match result.end_reason {
            GameEndReason::MissionComplete => println!("Mission accomplished: {}", game.describe_mission()),
            GameEndReason::PlayerQuit => println!("Your mission was: {}", game.describe_mission()),
            GameEndReason::TurnLimit => println!("Turn limit reached"),
        }
        println!("Turns played: {}", result.turns_played);
        println!("Attacks resolved: {}", result.attacks_resolved);
        println!("Territories conquered: {}", result.conquests);
    }

    Ok(())
}
