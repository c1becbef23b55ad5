//! Fixed script controller for deterministic testing
//!
//! Replays a token script in exactly the grammar the interactive menu reads:
//! `"1 2 1 3 5 4 2"` means attack twice (1 -> 3, then 5 -> 4), then check the
//! mission. When the script runs out the controller quits.

use crate::game::controller::{AttackSelection, Command, GameStateView, PlayerController};
use crate::game::input::{command_from_tokens, parse_menu_option, parse_territory, tokenize, MenuOption};
use crate::{Result, WarError};
use serde::{Deserialize, Serialize};

/// A controller that follows a fixed script of input tokens
///
/// Serializable so its position in the script can be inspected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedScriptController {
    script: Vec<String>,
    /// Current position in the script
    pub current_index: usize,
}

impl FixedScriptController {
    /// Create a controller from pre-split tokens
    ///
    /// # Example
    /// ```
    /// use war_rs::game::FixedScriptController;
    ///
    /// let controller = FixedScriptController::new(vec!["1".into(), "1".into(), "2".into(), "3".into()]);
    /// assert_eq!(controller.remaining(), 4);
    /// ```
    pub fn new(script: Vec<String>) -> Self {
        FixedScriptController {
            script,
            current_index: 0,
        }
    }

    /// Create a controller from a space- or comma-separated script
    pub fn from_script(script: &str) -> Self {
        Self::new(tokenize(script))
    }

    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.current_index)
    }

    fn next_token(&mut self) -> Option<String> {
        let token = self.script.get(self.current_index).cloned();
        if token.is_some() {
            self.current_index += 1;
        }
        token
    }
}

impl PlayerController for FixedScriptController {
    fn next_command(&mut self, view: &GameStateView) -> Command {
        let Some(option) = self.next_token() else {
            view.logger().controller_choice("script exhausted, quitting");
            return Command::Quit;
        };

        let command = match parse_menu_option(&option) {
            Ok(MenuOption::Attack) => {
                let count = self.next_token();
                command_from_tokens(&option, count.as_deref())
            }
            _ => command_from_tokens(&option, None),
        };

        view.logger().controller_choice(&format!("chose {:?}", command));
        command
    }

    fn choose_attack(&mut self, view: &GameStateView, sub_attack: u32, total: u32) -> Result<AttackSelection> {
        let attacker = self.next_token();
        let defender = self.next_token();

        let (Some(attacker), Some(defender)) = (attacker, defender) else {
            return Err(WarError::MalformedCommand(format!(
                "script ran out during attack {} of {}",
                sub_attack, total
            )));
        };

        let selection = AttackSelection::new(
            parse_territory(&attacker, view.territories())?,
            parse_territory(&defender, view.territories())?,
        );

        view.logger().controller_choice(&format!(
            "chose attack {} -> {} ({} of {})",
            selection.attacker, selection.defender, sub_attack, total
        ));
        Ok(selection)
    }
}
