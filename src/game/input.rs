//! Text input parsing
//!
//! Shared by the interactive and scripted controllers so both read exactly the
//! same grammar: a menu option (`1` attack, `2` check mission, `0` quit), an
//! attack count, then attacker/defender selections per sub-attack.

use crate::core::Territory;
use crate::game::controller::Command;
use crate::{Result, WarError};
use deunicode::deunicode;

/// Main menu options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOption {
    Attack,
    CheckMission,
    Quit,
    Unknown(String),
}

/// Parse a main menu choice
///
/// Non-numeric input is malformed; numbers outside the menu are unknown options.
pub fn parse_menu_option(input: &str) -> Result<MenuOption> {
    let trimmed = input.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| WarError::MalformedCommand(format!("expected a menu number, got '{}'", trimmed)))?;

    Ok(match value {
        1 => MenuOption::Attack,
        2 => MenuOption::CheckMission,
        0 => MenuOption::Quit,
        _ => MenuOption::Unknown(trimmed.to_string()),
    })
}

/// Most sub-attacks a single attack command may request
pub const MAX_ATTACKS_PER_COMMAND: u32 = 1000;

/// Check an attack count against `1..=MAX_ATTACKS_PER_COMMAND`
pub fn check_attack_count(count: u32) -> Result<u32> {
    if (1..=MAX_ATTACKS_PER_COMMAND).contains(&count) {
        Ok(count)
    } else {
        Err(WarError::MalformedCommand(format!(
            "attack count must be between 1 and {}, got {}",
            MAX_ATTACKS_PER_COMMAND, count
        )))
    }
}

/// Parse how many attacks to perform this turn
pub fn parse_attack_count(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let count = trimmed.parse::<u32>().map_err(|_| {
        WarError::MalformedCommand(format!(
            "attack count must be an integer between 1 and {}, got '{}'",
            MAX_ATTACKS_PER_COMMAND, trimmed
        ))
    })?;
    check_attack_count(count)
}

/// Turn a menu option plus (for attacks) the count token into a command
pub fn command_from_tokens(option: &str, count: Option<&str>) -> Command {
    match parse_menu_option(option) {
        Ok(MenuOption::Attack) => match count {
            Some(token) => match parse_attack_count(token) {
                Ok(n) => Command::Attack(n),
                Err(e) => Command::Malformed(e.to_string()),
            },
            None => Command::Malformed("missing attack count".to_string()),
        },
        Ok(MenuOption::CheckMission) => Command::CheckMission,
        Ok(MenuOption::Quit) => Command::Quit,
        Ok(MenuOption::Unknown(s)) => Command::Invalid(s),
        Err(e) => Command::Malformed(e.to_string()),
    }
}

/// Lowercase ASCII form used for name matching ("Mata Atlântica" -> "mata atlantica")
pub fn normalize_name(name: &str) -> String {
    deunicode(name.trim()).to_lowercase()
}

/// Parse a territory selection: a 1-based number or a name prefix
///
/// Numbers are returned as-is (range checks belong to the orchestrator);
/// negative numbers map to 0 so they are rejected there as out of range.
/// Names match case- and accent-insensitively; an exact match wins over
/// prefix matches, and an ambiguous prefix is malformed.
pub fn parse_territory(input: &str, territories: &[Territory]) -> Result<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(WarError::MalformedCommand("missing territory selection".to_string()));
    }

    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(usize::try_from(n).unwrap_or(0));
    }

    let wanted = normalize_name(trimmed);
    let names: Vec<String> = territories
        .iter()
        .map(|t| normalize_name(t.name.as_str()))
        .collect();

    if let Some(i) = names.iter().position(|n| *n == wanted) {
        return Ok(i + 1);
    }

    let matches: Vec<usize> = names
        .iter()
        .enumerate()
        .filter(|(_, n)| n.starts_with(&wanted))
        .map(|(i, _)| i + 1)
        .collect();

    match matches.as_slice() {
        [single] => Ok(*single),
        [] => Err(WarError::MalformedCommand(format!("no territory matches '{}'", trimmed))),
        _ => Err(WarError::MalformedCommand(format!(
            "'{}' matches {} territories",
            trimmed,
            matches.len()
        ))),
    }
}

/// Split a script string on whitespace and commas
pub fn tokenize(script: &str) -> Vec<String> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
