//! A game session: the board, both players, and the turn state machine.
//!
//! [`Game`] is the surface an orchestrator drives. A turn looks like:
//!
//! ```
//! use gess_rust::game::{Game, GameState};
//! use gess_rust::coord::Coord;
//!
//! let mut game = Game::new();
//! let piece = game.try_make_piece(Coord::parse("c2")?)?;
//! let moves = game.legal_destinations(&piece)?;
//! let dest = Coord::parse("c3")?;
//! assert!(moves.contains(&dest));
//! game.make_move(&piece, dest)?;
//! assert_eq!(game.state(), GameState::WhiteToMove);
//! # Ok::<(), gess_rust::error::GessError>(())
//! ```
//!
//! The piece is owned by the caller between calls; the session keeps no
//! selection of its own and re-checks the piece against the board when the
//! move is submitted.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, info};

use crate::board::{Board, Color, Removals};
use crate::coord::Coord;
use crate::error::GessError;
use crate::piece::Piece;
use crate::player::Player;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    BlackToMove,
    WhiteToMove,
    BlackWon,
    WhiteWon,
}

impl GameState {
    pub fn to_move_for(color: Color) -> Self {
        match color {
            Color::Black => GameState::BlackToMove,
            Color::White => GameState::WhiteToMove,
        }
    }

    pub fn won_by(color: Color) -> Self {
        match color {
            Color::Black => GameState::BlackWon,
            Color::White => GameState::WhiteWon,
        }
    }

    /// Side to move, or `None` once the game is over.
    pub fn to_move(self) -> Option<Color> {
        match self {
            GameState::BlackToMove => Some(Color::Black),
            GameState::WhiteToMove => Some(Color::White),
            GameState::BlackWon | GameState::WhiteWon => None,
        }
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameState::BlackWon => Some(Color::Black),
            GameState::WhiteWon => Some(Color::White),
            GameState::BlackToMove | GameState::WhiteToMove => None,
        }
    }

    pub fn is_over(self) -> bool {
        self.winner().is_some()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameState::BlackToMove => "BLACK_TO_MOVE",
            GameState::WhiteToMove => "WHITE_TO_MOVE",
            GameState::BlackWon => "BLACK_WON",
            GameState::WhiteWon => "WHITE_WON",
        };
        f.write_str(s)
    }
}

/// What a completed move did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub removed: Removals,
    pub state: GameState,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    black: Player,
    white: Player,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            black: Player::new(Color::Black),
            white: Player::new(Color::White),
            state: GameState::BlackToMove,
        }
    }

    /// Start from an arbitrary position with `to_move` on turn. Stone and
    /// ring counts are read off the board.
    pub fn from_board(board: Board, to_move: Color) -> Self {
        let player = |color: Color| {
            Player::with_counts(color, board.count(color), board.count_rings(color))
        };
        let black = player(Color::Black);
        let white = player(Color::White);
        Self {
            board,
            black,
            white,
            state: GameState::to_move_for(to_move),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::Black => &self.black,
            Color::White => &self.white,
        }
    }

    fn player_mut(&mut self, color: Color) -> &mut Player {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }

    pub fn remaining_stones(&self, color: Color) -> u32 {
        self.player(color).remaining_stones()
    }

    /// Rings found after the last completed move.
    pub fn count_rings(&self, color: Color) -> u32 {
        self.player(color).rings()
    }

    /// Side to move, or `GameAlreadyOver` in a terminal state.
    pub fn mover(&self) -> Result<Color, GessError> {
        self.state
            .to_move()
            .ok_or(GessError::GameAlreadyOver(self.state))
    }

    /// Select the piece centered at `center` for the side to move.
    pub fn try_make_piece(&self, center: Coord) -> Result<Piece, GessError> {
        let mover = self.mover()?;
        let piece = self.board.try_make_piece(center, mover);
        debug!(%center, %mover, valid = piece.is_ok(), "piece selection");
        piece
    }

    pub fn legal_destinations(&self, piece: &Piece) -> Result<BTreeSet<Coord>, GessError> {
        let mover = self.mover()?;
        Ok(self.board.legal_destinations(piece, mover))
    }

    /// Move `piece` to `destination` for the side to move, then update stone
    /// and ring counts and advance the state.
    ///
    /// If either side is left without rings the mover wins, even when the
    /// ring lost was the mover's own.
    pub fn make_move(&mut self, piece: &Piece, destination: Coord) -> Result<MoveOutcome, GessError> {
        let mover = self.mover()?;
        let removed = self.board.execute_move(piece, destination, mover)?;

        for color in Color::BOTH {
            let rings = self.board.count_rings(color);
            let player = self.player_mut(color);
            player.remove_stones(removed.of(color));
            player.set_rings(rings);
        }

        let ringless = Color::BOTH.iter().any(|&c| self.player(c).rings() == 0);
        self.state = if ringless {
            GameState::won_by(mover)
        } else {
            GameState::to_move_for(mover.opponent())
        };

        info!(
            %mover,
            from = %piece.center(),
            to = %destination,
            black_stones = self.black.remaining_stones(),
            white_stones = self.white.remaining_stones(),
            black_rings = self.black.rings(),
            white_rings = self.white.rings(),
            state = %self.state,
            "move played"
        );
        if self.state.is_over() {
            info!(state = %self.state, "game over");
        }

        Ok(MoveOutcome {
            removed,
            state: self.state,
        })
    }

    /// Select the piece at `from` and move it to `to`, both given as
    /// coordinate tokens such as `"c2"`.
    pub fn play(&mut self, from: &str, to: &str) -> Result<MoveOutcome, GessError> {
        let piece = self.try_make_piece(Coord::parse(from)?)?;
        self.make_move(&piece, Coord::parse(to)?)
    }

    /// `color` gives up; the other side wins whoever is on turn.
    pub fn resign(&mut self, color: Color) -> Result<GameState, GessError> {
        self.mover()?;
        self.state = GameState::won_by(color.opponent());
        info!(%color, state = %self.state, "resigned");
        Ok(self.state)
    }
}
