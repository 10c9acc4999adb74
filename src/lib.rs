//! Gess-Rust: a rules engine for the board game Gess.
//!
//! Gess is played with Go stones on a 20x20 grid. Each turn a player picks a
//! 3x3 "piece" of their own stones and slides it; whatever the piece lands
//! on is captured. A player who loses every "ring" (an empty cell surrounded
//! by eight of their stones) loses the game.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, stone counts, and movement limits
//! - [`coord`] - Coordinates and the dead zone
//! - [`piece`] - Directions and 3x3 piece snapshots
//! - [`board`] - Board state, legal destinations, move execution, rings
//! - [`player`] - Per-side stone and ring counts
//! - [`game`] - Game session and turn state machine
//! - [`playout`] - Random playouts for demos and testing
//! - [`text_protocol`] - Line-oriented command protocol
//!
//! ## Example
//!
//! ```
//! use gess_rust::game::{Game, GameState};
//!
//! let mut game = Game::new();
//! game.play("c2", "c3").unwrap();
//! assert_eq!(game.state(), GameState::WhiteToMove);
//! println!("{}", game.board());
//! ```

pub mod board;
pub mod constants;
pub mod coord;
pub mod error;
pub mod game;
pub mod piece;
pub mod player;
pub mod playout;
pub mod text_protocol;
