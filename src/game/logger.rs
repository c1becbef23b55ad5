//! Game narration logger
//!
//! Every line the engine narrates (attacks, rolls, conquests, mission checks)
//! goes through [`GameLogger`]. Printing is gated by [`VerbosityLevel`]; in
//! capture mode entries are kept in memory instead so tests can assert on the
//! narration without scraping stdout.

use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::ops::Deref;

/// Verbosity level for game output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum VerbosityLevel {
    /// Silent - no output during game
    Silent = 0,
    /// Minimal - only session outcome
    Minimal = 1,
    /// Normal - attacks, conquests and mission checks (default)
    #[default]
    Normal = 2,
    /// Verbose - dice, troop movements and rejected selections
    Verbose = 3,
}

/// How printed entries are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputFormat {
    /// Indented narration text (default)
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Where entries go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Printed to stdout when the verbosity allows (default)
    #[default]
    Stdout,
    /// Kept in memory regardless of verbosity, never printed
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    /// "combat", "mission", "controller_choice", or none for session messages
    pub category: Option<String>,
    pub message: String,
}

/// Borrow of the captured entries, usable as a slice
pub struct LogGuard<'a> {
    entries: Ref<'a, Vec<LogEntry>>,
}

impl Deref for LogGuard<'_> {
    type Target = [LogEntry];

    fn deref(&self) -> &[LogEntry] {
        &self.entries
    }
}

/// Narration sink owned by the game state
///
/// Logging takes `&self` so controllers can narrate through a read-only view.
#[derive(Default)]
pub struct GameLogger {
    verbosity: VerbosityLevel,
    format: OutputFormat,
    mode: OutputMode,
    captured: RefCell<Vec<LogEntry>>,
}

impl GameLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep entries in memory instead of printing them
    pub fn enable_capture(&mut self) {
        self.mode = OutputMode::Memory;
    }

    pub fn set_output_format(&mut self, format: OutputFormat) {
        self.format = format;
    }

    pub fn set_verbosity(&mut self, verbosity: VerbosityLevel) {
        self.verbosity = verbosity;
    }

    /// Captured entries, oldest first
    pub fn logs(&self) -> LogGuard<'_> {
        LogGuard {
            entries: self.captured.borrow(),
        }
    }

    fn print(&self, entry: &LogEntry) {
        match self.format {
            OutputFormat::Text if entry.level == VerbosityLevel::Minimal => println!("{}", entry.message),
            OutputFormat::Text => println!("  {}", entry.message),
            OutputFormat::Json => match serde_json::to_string(entry) {
                Ok(line) => println!("{}", line),
                Err(e) => eprintln!("failed to encode log entry: {}", e),
            },
        }
    }

    fn log(&self, level: VerbosityLevel, category: Option<&str>, message: &str) {
        let print = match self.mode {
            OutputMode::Memory => false,
            OutputMode::Stdout if level <= self.verbosity => true,
            OutputMode::Stdout => return,
        };

        let entry = LogEntry {
            level,
            category: category.map(str::to_string),
            message: message.to_string(),
        };
        if print {
            self.print(&entry);
        } else {
            self.captured.borrow_mut().push(entry);
        }
    }

    pub fn minimal(&self, message: &str) {
        self.log(VerbosityLevel::Minimal, None, message);
    }

    pub fn normal(&self, message: &str) {
        self.log(VerbosityLevel::Normal, None, message);
    }

    pub fn verbose(&self, message: &str) {
        self.log(VerbosityLevel::Verbose, None, message);
    }

    /// Log at `level` with a category tag
    pub fn event(&self, level: VerbosityLevel, category: &str, message: &str) {
        self.log(level, Some(category), message);
    }

    /// A controller's decision, at Normal level
    pub fn controller_choice(&self, message: &str) {
        self.log(VerbosityLevel::Normal, Some("controller_choice"), message);
    }
}

impl std::fmt::Debug for GameLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLogger")
            .field("verbosity", &self.verbosity)
            .field("mode", &self.mode)
            .field("captured", &self.captured.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_defaults() {
        let logger = GameLogger::new();
        assert_eq!(logger.verbosity, VerbosityLevel::Normal);
        assert_eq!(logger.format, OutputFormat::Text);
        assert_eq!(logger.mode, OutputMode::Stdout);
    }

    #[test]
    fn test_capture_keeps_levels_and_categories() {
        let mut logger = GameLogger::new();
        logger.enable_capture();

        logger.normal("Leaving the game...");
        logger.minimal("Congratulations!");
        logger.event(VerbosityLevel::Normal, "combat", "Amazonas attacks Cerrado");
        logger.controller_choice("chose CheckMission");

        let logs = logger.logs();
        assert_eq!(logs.len(), 4);
        assert_eq!(logs[0].message, "Leaving the game...");
        assert_eq!(logs[0].category, None);
        assert_eq!(logs[1].level, VerbosityLevel::Minimal);
        assert_eq!(logs[2].category.as_deref(), Some("combat"));
        assert_eq!(logs[3].category.as_deref(), Some("controller_choice"));
    }

    #[test]
    fn test_capture_ignores_verbosity() {
        let mut logger = GameLogger::new();
        logger.set_verbosity(VerbosityLevel::Silent);
        logger.enable_capture();
        logger.verbose("Roll: attacker 6 vs defender 1");
        assert_eq!(logger.logs().len(), 1);
    }

    #[test]
    fn test_printing_mode_keeps_nothing() {
        let mut logger = GameLogger::new();
        logger.set_verbosity(VerbosityLevel::Silent);
        logger.normal("dropped");
        assert!(logger.logs().is_empty());
    }

    #[test]
    fn test_log_entry_json_shape() {
        let entry = LogEntry {
            level: VerbosityLevel::Normal,
            category: Some("combat".to_string()),
            message: "Pantanal was conquered by Verde".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["level"], "Normal");
        assert_eq!(json["category"], "combat");
        assert_eq!(json["message"], "Pantanal was conquered by Verde");
    }
}
