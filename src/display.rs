//! Terminal presentation
//!
//! Formatting only: nothing here reads or changes game rules.

use crate::core::TerritoryRow;
use std::fmt::Write;

pub const ANSI_RESET: &str = "\x1b[0m";

/// ANSI foreground code for a known army color
pub fn ansi_color(color: &str) -> Option<&'static str> {
    match color {
        "Verde" => Some("\x1b[32m"),
        "Azul" => Some("\x1b[34m"),
        "Vermelho" => Some("\x1b[31m"),
        "Amarelo" => Some("\x1b[33m"),
        "Roxo" => Some("\x1b[35m"),
        _ => None,
    }
}

/// Map table with 1-based indices
pub fn render_map(rows: &[TerritoryRow], use_color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== Current Map ===");
    let _ = writeln!(out, "Idx | Territory                 | Army        | Troops");
    let _ = writeln!(out, "----+---------------------------+-------------+--------");

    for row in rows {
        let color = row.owner.as_str();
        let army = match ansi_color(color).filter(|_| use_color) {
            Some(code) => format!("{}{:<11}{}", code, color, ANSI_RESET),
            None => format!("{:<11}", color),
        };
        let _ = writeln!(
            out,
            "{:>3} | {:<25} | {} | {:>6}",
            row.index,
            row.name.as_str(),
            army,
            row.troops
        );
    }
    out
}

pub fn render_mission(description: &str) -> String {
    format!("=== Current Mission ===\n  Objective: {}\n", description)
}

pub fn render_menu() -> &'static str {
    "Menu:\n  1 - Attack\n  2 - Check Mission\n  0 - Quit\nChoose an option: "
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArmyColor, TerritoryName};

    fn row(index: usize, name: &str, owner: &str, troops: u32) -> TerritoryRow {
        TerritoryRow {
            index,
            name: TerritoryName::new(name),
            owner: ArmyColor::new(owner),
            troops,
        }
    }

    #[test]
    fn test_ansi_lookup() {
        assert_eq!(ansi_color("Azul"), Some("\x1b[34m"));
        assert_eq!(ansi_color("Laranja"), None);
    }

    #[test]
    fn test_render_map_plain() {
        let out = render_map(&[row(1, "Amazonas", "Verde", 5), row(2, "Cerrado", "Azul", 4)], false);
        assert!(out.contains("  1 | Amazonas                  | Verde       |      5"));
        assert!(out.contains("  2 | Cerrado"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_render_map_colored_only_known() {
        let out = render_map(&[row(1, "Norte", "Laranja", 2), row(2, "Sul", "Roxo", 1)], true);
        assert!(out.contains("Laranja    "));
        assert!(out.contains("\x1b[35mRoxo"));
    }

    #[test]
    fn test_render_mission() {
        assert!(render_mission("Destroy the Roxo army").contains("Objective: Destroy the Roxo army"));
    }
}
