//! Interactive controller for human players
//!
//! Shows the map, mission and menu, then reads choices line by line. Generic
//! over the reader and writer so sessions can be driven from a buffer.

use crate::display;
use crate::game::controller::{AttackSelection, Command, GameStateView, PlayerController};
use crate::game::game_loop::{CommandOutcome, GameEndReason, GameResult};
use crate::game::input::{command_from_tokens, parse_menu_option, parse_territory, MenuOption};
use crate::game::logger::OutputFormat;
use crate::Result;
use std::io::{self, BufRead, Stdin, StdinLock, Write};

/// Process stream the map, mission and prompts are written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    Stdout,
    Stderr,
}

impl Terminal {
    /// JSON narration owns stdout, so presentation moves to stderr
    pub fn for_format(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Terminal::Stdout,
            OutputFormat::Json => Terminal::Stderr,
        }
    }
}

impl Write for Terminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Terminal::Stdout => io::stdout().write(buf),
            Terminal::Stderr => io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Terminal::Stdout => io::stdout().flush(),
            Terminal::Stderr => io::stderr().flush(),
        }
    }
}

/// A controller that prompts a human player for decisions
pub struct InteractiveController<R, W> {
    input: R,
    output: W,
    use_color: bool,
    /// Wait for Enter after each command so results can be read
    pause_after_command: bool,
}

impl InteractiveController<StdinLock<'static>, Terminal> {
    /// Controller reading stdin and writing to the terminal stream that
    /// does not carry narration in `format`
    pub fn stdio(format: OutputFormat) -> Self {
        let stdin: Stdin = io::stdin();
        InteractiveController {
            input: stdin.lock(),
            output: Terminal::for_format(format),
            use_color: true,
            pause_after_command: true,
        }
    }
}

impl<R: BufRead, W: Write> InteractiveController<R, W> {
    pub fn new(input: R, output: W) -> Self {
        InteractiveController {
            input,
            output,
            use_color: false,
            pause_after_command: false,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `text` and read one trimmed line
    ///
    /// `None` on end of input, a read error, or an output that can no longer
    /// be written.
    fn prompt(&mut self, text: &str) -> Option<String> {
        write!(self.output, "{}", text).ok()?;
        self.output.flush().ok()?;

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn show_state(&mut self, view: &GameStateView) -> io::Result<()> {
        let map = display::render_map(&view.list_territories(), self.use_color);
        let mission = display::render_mission(&view.describe_mission());
        writeln!(self.output, "{}", map)?;
        writeln!(self.output, "{}", mission)
    }
}

impl<R: BufRead, W: Write> PlayerController for InteractiveController<R, W> {
    fn next_command(&mut self, view: &GameStateView) -> Command {
        // A closed terminal or end of input leaves the game the same way choosing 0 does
        if self.show_state(view).is_err() {
            return Command::Quit;
        }
        let Some(option) = self.prompt(display::render_menu()) else {
            return Command::Quit;
        };

        match parse_menu_option(&option) {
            Ok(MenuOption::Attack) => {
                let count = self.prompt("How many attacks do you want to make this turn? ");
                command_from_tokens(&option, count.as_deref())
            }
            _ => command_from_tokens(&option, None),
        }
    }

    fn choose_attack(&mut self, view: &GameStateView, sub_attack: u32, total: u32) -> Result<AttackSelection> {
        let size = view.territory_count();
        writeln!(self.output, "\n>>> Attack {} of {} <<<", sub_attack, total)?;

        let attacker = self
            .prompt(&format!("Choose the attacking territory (1 - {}): ", size))
            .unwrap_or_default();
        let attacker = parse_territory(&attacker, view.territories())?;

        let defender = self
            .prompt(&format!("Choose the defending territory (1 - {}): ", size))
            .unwrap_or_default();
        let defender = parse_territory(&defender, view.territories())?;

        Ok(AttackSelection::new(attacker, defender))
    }

    fn on_command_outcome(&mut self, _view: &GameStateView, outcome: &CommandOutcome) {
        if let CommandOutcome::Attacks(reports) = outcome {
            for report in reports.iter() {
                if let Err(e) = &report.result {
                    if writeln!(self.output, "Attack {} skipped: {}", report.number, e).is_err() {
                        return;
                    }
                }
            }
        }

        let finished = matches!(
            outcome,
            CommandOutcome::Quit | CommandOutcome::MissionChecked { satisfied: true, .. }
        );
        if self.pause_after_command && !finished {
            self.prompt("\nPress Enter to continue...");
        }
    }

    fn on_game_end(&mut self, view: &GameStateView, result: &GameResult) {
        if result.end_reason == GameEndReason::MissionComplete {
            // The session is over whether or not the final map is written
            self.show_state(view).ok();
        }
    }
}
