//! Main game state structure

use crate::core::{ArmyColor, Registry, TerritoryRow};
use crate::game::combat::{resolve_attack, AttackOutcome};
use crate::game::logger::GameLogger;
use crate::game::mission::{assign_mission, Mission};
use crate::game::rng::{GameRng, RandomSource};
use crate::loader::GameConfig;
use crate::Result;

/// Complete state of one session
///
/// Owns the registry, the mission, the player's color and the random source.
/// Nothing else holds game data.
pub struct GameState {
    /// Mutated only through [`GameState::attack`]
    registry: Registry,

    /// Assigned at creation, never changed
    mission: Mission,

    player_color: ArmyColor,

    /// Random source for dice. Boxed so tests can inject scripted rolls.
    rng: Box<dyn RandomSource>,

    /// Centralized logger for game events
    pub logger: GameLogger,
}

impl GameState {
    /// Set up a session from a config with a seeded RNG
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, Box::new(GameRng::from_seed(seed)))
    }

    /// Set up a session drawing the mission and all dice from `rng`
    pub fn with_rng(config: &GameConfig, mut rng: Box<dyn RandomSource>) -> Result<Self> {
        config.validate()?;
        let registry = Registry::initialize(config, config.territory_count)?;
        let player_color = config.player_color();
        let mission = assign_mission(
            &player_color,
            &config.palette(),
            config.mission_retry_attempts,
            rng.as_mut(),
        )?;

        Ok(GameState {
            registry,
            mission,
            player_color,
            rng,
            logger: GameLogger::new(),
        })
    }

    /// Assemble a state from already-built parts (tests, custom setups)
    pub fn from_parts(
        registry: Registry,
        mission: Mission,
        player_color: ArmyColor,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        GameState {
            registry,
            mission,
            player_color,
            rng,
            logger: GameLogger::new(),
        }
    }

    /// Read-only view of the map
    ///
    /// Territories change only through [`GameState::attack`]:
    ///
    /// ```compile_fail
    /// use war_rs::{game::GameState, loader::GameConfig};
    ///
    /// let game = GameState::new(&GameConfig::reference(), 1).unwrap();
    /// let (attacker, _) = game.registry().pair_mut(0, 1).unwrap();
    /// attacker.troops = 99;
    /// ```
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    pub fn player_color(&self) -> &ArmyColor {
        &self.player_color
    }

    pub fn list_territories(&self) -> Vec<TerritoryRow> {
        self.registry.list_territories()
    }

    pub fn describe_mission(&self) -> String {
        self.mission.describe()
    }

    /// Evaluate the mission without side effects
    pub fn check_mission(&self) -> bool {
        self.mission.evaluate(&self.registry, &self.player_color)
    }

    /// Validate a 1-based selection and resolve the attack
    ///
    /// Invalid selections are rejected before the combat resolver is consulted.
    pub fn attack(&mut self, attacker: usize, defender: usize) -> Result<AttackOutcome> {
        let (a, d) = self.registry.validate_selection(attacker, defender)?;
        let (attacker, defender) = self.registry.pair_mut(a, d)?;
        resolve_attack(attacker, defender, self.rng.as_mut())
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("registry", &self.registry)
            .field("mission", &self.mission)
            .field("player_color", &self.player_color)
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}
