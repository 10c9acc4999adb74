//! Random playouts.
//!
//! Enumerates every legal `(piece, destination)` pair for the side to move
//! and plays uniformly random ones until the game ends or a move limit is
//! hit. Used by the `demo` subcommand and by the randomized tests; it does
//! not try to play well.

use fastrand::Rng;

use crate::coord::Coord;
use crate::error::GessError;
use crate::game::{Game, GameState, MoveOutcome};
use crate::piece::Piece;

/// How a playout ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlayoutResult {
    /// Moves played
    pub moves: usize,
    /// State after the last move
    pub state: GameState,
}

/// Every legal move for the side to move. Empty once the game is over.
pub fn legal_moves(game: &Game) -> Vec<(Piece, Coord)> {
    let mut moves = Vec::new();
    for center in Coord::all().filter(|pt| !pt.is_dead_zone()) {
        let Ok(piece) = game.try_make_piece(center) else {
            continue;
        };
        let Ok(dests) = game.legal_destinations(&piece) else {
            continue;
        };
        moves.extend(dests.into_iter().map(|dest| (piece.clone(), dest)));
    }
    moves
}

/// A uniformly random legal move, or `None` if there is none.
pub fn random_move(game: &Game, rng: &mut Rng) -> Option<(Piece, Coord)> {
    let mut moves = legal_moves(game);
    if moves.is_empty() {
        return None;
    }
    let i = rng.usize(..moves.len());
    Some(moves.swap_remove(i))
}

/// Play random moves until the game ends, no move is available, or
/// `max_moves` have been played. `on_move` sees every move as it is made.
pub fn playout<F>(
    game: &mut Game,
    rng: &mut Rng,
    max_moves: usize,
    mut on_move: F,
) -> Result<PlayoutResult, GessError>
where
    F: FnMut(&Game, &Piece, Coord, &MoveOutcome),
{
    let mut moves = 0;
    while moves < max_moves && !game.state().is_over() {
        let Some((piece, dest)) = random_move(game, rng) else {
            break;
        };
        let outcome = game.make_move(&piece, dest)?;
        moves += 1;
        on_move(game, &piece, dest, &outcome);
    }
    Ok(PlayoutResult {
        moves,
        state: game.state(),
    })
}
