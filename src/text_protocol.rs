//! Line-oriented text protocol for driving a game.
//!
//! Modelled on the Go Text Protocol: one command per line, an optional
//! numeric id in front, `#` starts a comment. Every command gets a reply of
//! the form `=[id] <payload>` or `?[id] <error>` followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `new_game` - Reset to the starting position
//! - `showboard` - Dump the board
//! - `status` - Game state (`BLACK_TO_MOVE`, ..., `WHITE_WON`)
//! - `piece <center>` - Check a piece for the side to move
//! - `moves <center>` - Legal destinations of that piece
//! - `play <from> <to>` - Make a move
//! - `resign <color>` - Resign for `color`
//! - `stones <color>`, `rings <color>` - Per-side counts
//! - `quit`
//!
//! ## Example
//!
//! ```ignore
//! use gess_rust::text_protocol::TextEngine;
//! let mut engine = TextEngine::new();
//! engine.run(std::io::stdin().lock(), std::io::stdout())?;
//! ```

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::board::Color;
use crate::coord::Coord;
use crate::game::Game;

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "known_command",
    "list_commands",
    "moves",
    "name",
    "new_game",
    "piece",
    "play",
    "protocol_version",
    "quit",
    "resign",
    "rings",
    "showboard",
    "status",
    "stones",
    "version",
];

/// Protocol engine state.
pub struct TextEngine {
    game: Game,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine {
    pub fn new() -> Self {
        Self { game: Game::new() }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(%command, %message, "command failed");
            }
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    fn parse_color(s: &str) -> Option<Color> {
        match s.to_lowercase().as_str() {
            "b" | "black" => Some(Color::Black),
            "w" | "white" => Some(Color::White),
            _ => None,
        }
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        debug!(%command, ?args, "execute");
        match command {
            "name" => (true, "gess-rust".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "new_game" => {
                self.game = Game::new();
                (true, String::new())
            }

            "showboard" => (true, format!("\n{}", self.game.board())),

            "status" => (true, self.game.state().to_string()),

            "piece" => {
                let Some(center) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match Coord::parse(center).and_then(|c| self.game.try_make_piece(c)) {
                    Ok(piece) => (true, piece.to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "moves" => {
                let Some(center) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let dests = Coord::parse(center)
                    .and_then(|c| self.game.try_make_piece(c))
                    .and_then(|piece| self.game.legal_destinations(&piece));
                match dests {
                    Ok(dests) => {
                        let list: Vec<String> = dests.iter().map(Coord::to_string).collect();
                        (true, list.join(" "))
                    }
                    Err(e) => (false, e.to_string()),
                }
            }

            "play" => {
                let [from, to] = args else {
                    return (false, "expected: play <from> <to>".to_string());
                };
                match self.game.play(from, to) {
                    Ok(outcome) => (true, outcome.state.to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "resign" | "stones" | "rings" => {
                let Some(color) = args.first().and_then(|s| Self::parse_color(s)) else {
                    return (false, "expected a color: black or white".to_string());
                };
                match command {
                    "resign" => match self.game.resign(color) {
                        Ok(state) => (true, state.to_string()),
                        Err(e) => (false, e.to_string()),
                    },
                    "stones" => (true, self.game.remaining_stones(color).to_string()),
                    _ => (true, self.game.count_rings(color).to_string()),
                }
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
