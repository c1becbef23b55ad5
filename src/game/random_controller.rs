//! Random controller for automated play
//!
//! Stands in for the human in batch simulations. Attacks from its own
//! territories into other armies, checking the mission every few commands.

use crate::core::Territory;
use crate::game::controller::{AttackSelection, Command, GameStateView, PlayerController};
use crate::game::rng::{GameRng, RandomSource};
use crate::Result;

/// A controller that makes random choices
pub struct RandomController {
    rng: GameRng,
    /// Every this many commands, check the mission instead of attacking
    check_every: u32,
    /// Upper bound for the attack count of one command
    max_attacks: u32,
    commands_issued: u32,
}

impl RandomController {
    pub fn new() -> Self {
        Self::from_rng(GameRng::from_entropy())
    }

    /// Create a random controller with a seeded RNG (for deterministic testing)
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(GameRng::from_seed(seed))
    }

    fn from_rng(rng: GameRng) -> Self {
        RandomController {
            rng,
            check_every: 3,
            max_attacks: 3,
            commands_issued: 0,
        }
    }

    fn pick(&mut self, candidates: &[usize]) -> Option<usize> {
        if candidates.is_empty() {
            return None;
        }
        let i = self.rng.uniform(0, (candidates.len() - 1) as u32) as usize;
        Some(candidates[i])
    }
}

impl Default for RandomController {
    fn default() -> Self {
        Self::new()
    }
}

/// 1-based indices of territories matching `filter`
fn indices(territories: &[Territory], filter: impl Fn(&Territory) -> bool) -> Vec<usize> {
    territories
        .iter()
        .enumerate()
        .filter(|(_, t)| filter(t))
        .map(|(i, _)| i + 1)
        .collect()
}

impl PlayerController for RandomController {
    fn next_command(&mut self, _view: &GameStateView) -> Command {
        self.commands_issued += 1;
        if self.commands_issued % self.check_every == 0 {
            Command::CheckMission
        } else {
            Command::Attack(self.rng.uniform(1, self.max_attacks))
        }
    }

    fn choose_attack(&mut self, view: &GameStateView, _sub_attack: u32, _total: u32) -> Result<AttackSelection> {
        let territories = view.territories();
        let me = view.player_color();

        let own = indices(territories, |t| t.is_owned_by(me) && t.has_troops());
        let foreign = indices(territories, |t| !t.is_owned_by(me) && t.has_troops());

        // Without an armed territory of its own, any armed territory attacks
        let attacker = match self.pick(&own) {
            Some(a) => a,
            None => {
                let armed = indices(territories, Territory::has_troops);
                self.pick(&armed).unwrap_or(1)
            }
        };
        let targets: Vec<usize> = if foreign.is_empty() {
            (1..=territories.len()).filter(|&i| i != attacker).collect()
        } else {
            foreign.into_iter().filter(|&i| i != attacker).collect()
        };
        let defender = self.pick(&targets).unwrap_or(attacker);

        Ok(AttackSelection::new(attacker, defender))
    }
}
