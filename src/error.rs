//! Error taxonomy for the rules engine.
//!
//! Every variant is recoverable: the operation that returns it has not
//! touched the board, so the caller can simply ask for different input.

use thiserror::Error;

use crate::coord::Coord;
use crate::game::GameState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GessError {
    /// Token or index outside columns a..t / rows 1..20.
    #[error("coordinate out of range: {0}")]
    OutOfRange(String),
    /// Center fails the piece rules for the player asking.
    #[error("{0} is not a valid piece")]
    InvalidPiece(Coord),
    /// Destination is not among the piece's legal destinations.
    #[error("{0} is not a legal destination")]
    IllegalDestination(Coord),
    /// Mutating call after the game has ended.
    #[error("game is already over ({0})")]
    GameAlreadyOver(GameState),
}
