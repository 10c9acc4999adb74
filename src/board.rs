//! The Gess board and the rules that act on it.
//!
//! The board owns a flat, row-major array of cells, each holding a stone or
//! nothing. On top of it sit the rule operations:
//! - piece validity ([`Board::try_make_piece`])
//! - legal destinations ([`Board::legal_destinations`])
//! - move execution with capture accounting ([`Board::execute_move`])
//! - ring counting ([`Board::count_rings`])
//!
//! Dead-zone cells are always empty: [`Board::set`] refuses to store a
//! stone there and reports the stone as removed instead.

use std::collections::BTreeSet;
use std::fmt;

use tracing::{debug, trace};

use crate::constants::*;
use crate::coord::Coord;
use crate::error::GessError;
use crate::piece::{Direction, Piece};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub const BOTH: [Color; 2] = [Color::Black, Color::White];

    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "BLACK"),
            Color::White => write!(f, "WHITE"),
        }
    }
}

/// Character used for a cell in board and piece dumps.
pub fn stone_char(stone: Option<Color>) -> char {
    match stone {
        Some(Color::Black) => STONE_BLACK,
        Some(Color::White) => STONE_WHITE,
        None => EMPTY,
    }
}

/// Stones that left the board during one move, per color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Removals {
    pub black: u32,
    pub white: u32,
}

impl Removals {
    pub fn of(&self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    fn add(&mut self, color: Color) {
        match color {
            Color::Black => self.black += 1,
            Color::White => self.white += 1,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Color>; BOARDSIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        let stones = BLACK_LAYOUT
            .iter()
            .flat_map(|&(row, columns)| columns.chars().map(move |c| (c, row)));
        for (column, row) in stones {
            if let Ok(pt) = Coord::from_label(column, row) {
                board.set(pt, Some(Color::Black));
            }
            if let Ok(pt) = Coord::from_label(column, N + 1 - row) {
                board.set(pt, Some(Color::White));
            }
        }
        board
    }

    /// A board with no stones at all.
    pub fn empty() -> Self {
        Self {
            cells: [None; BOARDSIZE],
        }
    }

    #[inline]
    pub fn get(&self, pt: Coord) -> Option<Color> {
        self.cells[pt.index()]
    }

    /// Store `stone` at `pt`. A stone written into the dead zone is not
    /// stored; it is returned so the caller can account for it.
    pub fn set(&mut self, pt: Coord, stone: Option<Color>) -> Option<Color> {
        if pt.is_dead_zone() {
            self.cells[pt.index()] = None;
            return stone;
        }
        self.cells[pt.index()] = stone;
        None
    }

    /// Number of `color`'s stones on the board.
    pub fn count(&self, color: Color) -> u32 {
        self.cells.iter().filter(|&&c| c == Some(color)).count() as u32
    }

    /// Materialize the piece centered at `center` for `color`.
    ///
    /// The center may not lie in the dead zone, no cell of the footprint may
    /// hold an opponent stone, and at least one of the eight neighbours must
    /// hold one of `color`'s stones.
    pub fn try_make_piece(&self, center: Coord, color: Color) -> Result<Piece, GessError> {
        if center.is_dead_zone() {
            return Err(GessError::InvalidPiece(center));
        }
        let piece = Piece::snapshot(self, center)?;
        let opponent = Some(color.opponent());
        let mut own = 0;
        for (slot, (_, stone)) in piece.cells().enumerate() {
            if stone == opponent {
                return Err(GessError::InvalidPiece(center));
            }
            if slot < Direction::ALL.len() && stone == Some(color) {
                own += 1;
            }
        }
        if own == 0 {
            return Err(GessError::InvalidPiece(center));
        }
        Ok(piece)
    }

    /// Every center `piece` may slide to when moved by `color`.
    ///
    /// Only directions whose neighbour holds one of `color`'s stones are
    /// open. A piece with a stone in its center may slide any distance, an
    /// empty-centered piece at most [`RESTRICTED_RANGE`]. Each direction
    /// stops at the first step that either reaches an obstruction or pushes
    /// the leading edge into the dead zone; that step itself is legal.
    pub fn legal_destinations(&self, piece: &Piece, color: Color) -> BTreeSet<Coord> {
        let range = if piece.center_stone() == Some(color) {
            UNRESTRICTED_RANGE
        } else {
            RESTRICTED_RANGE
        };
        let mut moves = BTreeSet::new();
        for dir in Direction::ALL {
            if piece.neighbor(dir) != Some(color) {
                continue;
            }
            for step in 1..=range {
                let (Some(dest), Some(edge)) =
                    (piece.project(dir, step), piece.projected_edge(dir, step))
                else {
                    break;
                };
                moves.insert(dest);
                if edge.is_dead_zone() || self.obstructed(piece, dest) {
                    trace!(%dest, ?dir, step, "slide stops");
                    break;
                }
            }
        }
        debug!(center = %piece.center(), count = moves.len(), "legal destinations");
        moves
    }

    /// Any stone inside the footprint at `dest` that is not part of `piece`.
    fn obstructed(&self, piece: &Piece, dest: Coord) -> bool {
        match Piece::snapshot(self, dest) {
            Ok(target) => target
                .cells()
                .any(|(pt, stone)| stone.is_some() && !piece.covers(pt)),
            Err(_) => true,
        }
    }

    /// Slide `piece` to `destination` for `color`.
    ///
    /// The piece must still match the board and `destination` must be one of
    /// its legal destinations; otherwise nothing is changed. Stones under the
    /// new footprint (other than the piece's own) are captured, whatever
    /// their color, and stones carried into the dead zone are lost.
    pub fn execute_move(
        &mut self,
        piece: &Piece,
        destination: Coord,
        color: Color,
    ) -> Result<Removals, GessError> {
        if self.try_make_piece(piece.center(), color)? != *piece {
            return Err(GessError::InvalidPiece(piece.center()));
        }
        if !self.legal_destinations(piece, color).contains(&destination) {
            return Err(GessError::IllegalDestination(destination));
        }

        let target = Piece::snapshot(self, destination)?;
        let mut removed = Removals::default();
        for ((dst, current), (_, incoming)) in target.cells().zip(piece.cells()) {
            if let Some(owner) = current {
                if !piece.covers(dst) {
                    removed.add(owner);
                }
            }
            if let Some(lost) = self.set(dst, incoming) {
                removed.add(lost);
            }
        }
        for &src in piece.footprint() {
            if !target.covers(src) {
                self.set(src, None);
            }
        }
        debug!(
            from = %piece.center(),
            to = %destination,
            black = removed.black,
            white = removed.white,
            "stones removed"
        );
        Ok(removed)
    }

    /// Number of rings `color` has: valid pieces with an empty center and all
    /// eight neighbours holding `color`'s stones. Overlapping rings each count.
    pub fn count_rings(&self, color: Color) -> u32 {
        Coord::all()
            .filter(|pt| !pt.is_dead_zone())
            .filter_map(|pt| self.try_make_piece(pt, color).ok())
            .filter(|piece| piece.is_ring(color))
            .count() as u32
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Board {
    /// Row 20 at the top, column letters along the bottom.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..N).rev() {
            write!(f, "{:>2} ", row + 1)?;
            for col in 0..N {
                let ch = match Coord::new(col, row) {
                    Some(pt) if pt.is_dead_zone() => OUT,
                    Some(pt) => stone_char(self.get(pt)),
                    None => OUT,
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for &c in COLUMNS {
            write!(f, "{} ", c as char)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(s: &str) -> Coord {
        Coord::parse(s).unwrap()
    }

    /// Board with `black` and `white` stones placed directly.
    fn setpos(black: &[&str], white: &[&str]) -> Board {
        let mut board = Board::empty();
        for s in black {
            board.set(pt(s), Some(Color::Black));
        }
        for s in white {
            board.set(pt(s), Some(Color::White));
        }
        board
    }

    fn dests(board: &Board, center: &str, color: Color) -> Vec<String> {
        let piece = board.try_make_piece(pt(center), color).unwrap();
        board
            .legal_destinations(&piece, color)
            .iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn test_initial_layout() {
        let board = Board::new();
        assert_eq!(board.count(Color::Black), INITIAL_STONES);
        assert_eq!(board.count(Color::White), INITIAL_STONES);
        assert!(Coord::all()
            .filter(|c| c.is_dead_zone())
            .all(|c| board.get(c).is_none()));
        assert_eq!(board.get(pt("c2")), Some(Color::Black));
        assert_eq!(board.get(pt("c19")), Some(Color::White));
        assert_eq!(board.get(pt("l3")), None);
        assert_eq!(board.get(pt("r14")), Some(Color::White));
    }

    #[test]
    fn test_set_dead_zone_drops_stone() {
        let mut board = Board::empty();
        assert_eq!(board.set(pt("a5"), Some(Color::White)), Some(Color::White));
        assert_eq!(board.get(pt("a5")), None);
        assert_eq!(board.set(pt("b5"), Some(Color::White)), None);
        assert_eq!(board.get(pt("b5")), Some(Color::White));
    }

    #[test]
    fn test_piece_validity() {
        let board = setpos(&["e5"], &["h5"]);
        // own stone on a neighbour, center empty
        assert!(board.try_make_piece(pt("d5"), Color::Black).is_ok());
        // own stone in the center only
        assert!(matches!(
            board.try_make_piece(pt("e5"), Color::Black),
            Err(GessError::InvalidPiece(_))
        ));
        // opponent stone on a neighbour
        let board = setpos(&["e5", "f5"], &["g5"]);
        assert!(board.try_make_piece(pt("f6"), Color::Black).is_err());
        assert!(board.try_make_piece(pt("e6"), Color::Black).is_ok());
    }

    #[test]
    fn test_opponent_center_is_rejected() {
        let ring: Vec<&str> = vec!["j9", "k9", "l9", "j10", "l10", "j11", "k11", "l11"];
        let board = setpos(&ring, &["k10"]);
        assert_eq!(
            board.try_make_piece(pt("k10"), Color::Black),
            Err(GessError::InvalidPiece(pt("k10")))
        );
    }

    #[test]
    fn test_dead_zone_center_is_invalid() {
        let board = setpos(&["b5", "b6"], &[]);
        assert_eq!(
            board.try_make_piece(pt("a5"), Color::Black),
            Err(GessError::InvalidPiece(pt("a5")))
        );
    }

    #[test]
    fn test_restricted_slide_capped_at_three() {
        let board = setpos(&["k11"], &[]);
        assert_eq!(dests(&board, "k10", Color::Black), vec!["k11", "k12", "k13"]);
    }

    #[test]
    fn test_unrestricted_slide_runs_to_edge() {
        let board = setpos(&["k10", "k11"], &[]);
        let moves = dests(&board, "k10", Color::Black);
        // the last step puts the north edge on row 20
        let expected: Vec<String> = (11..=19).map(|r| format!("k{r}")).collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_slide_stops_on_obstruction() {
        // the white stone enters the footprint when the center reaches k13
        let board = setpos(&["k10", "k11"], &["j14"]);
        assert_eq!(dests(&board, "k10", Color::Black), vec!["k11", "k12", "k13"]);
    }

    #[test]
    fn test_restricted_slide_stops_on_obstruction() {
        // j13 joins the footprint at the second step, before the cap of three
        let board = setpos(&["k11"], &["j13"]);
        assert_eq!(dests(&board, "k10", Color::Black), vec!["k11", "k12"]);
    }

    #[test]
    fn test_own_stone_obstructs() {
        let board = setpos(&["k10", "k11", "l13"], &[]);
        let moves = dests(&board, "k10", Color::Black);
        assert_eq!(moves, vec!["k11", "k12"]);
    }

    #[test]
    fn test_diagonal_slide_to_corner() {
        let board = setpos(&["q17"], &[]);
        assert_eq!(dests(&board, "p16", Color::Black), vec!["q17", "r18", "s19"]);
        let board = setpos(&["r18"], &[]);
        // t20 is reached on the second step, before the range runs out
        assert_eq!(dests(&board, "q17", Color::Black), vec!["r18", "s19"]);
    }

    #[test]
    fn test_execute_move_translates_pattern() {
        let mut board = setpos(&["k10", "k11", "j9"], &[]);
        let piece = board.try_make_piece(pt("k10"), Color::Black).unwrap();
        let removed = board.execute_move(&piece, pt("k12"), Color::Black).unwrap();
        assert_eq!(removed, Removals::default());
        assert_eq!(board.get(pt("k12")), Some(Color::Black));
        assert_eq!(board.get(pt("k13")), Some(Color::Black));
        assert_eq!(board.get(pt("j11")), Some(Color::Black));
        assert_eq!(board.get(pt("k10")), None);
        assert_eq!(board.get(pt("k11")), None);
        assert_eq!(board.get(pt("j9")), None);
        assert_eq!(board.count(Color::Black), 3);
    }

    #[test]
    fn test_execute_move_captures_both_colors() {
        let mut board = setpos(&["k10", "k11", "l14"], &["j14", "k14"]);
        let piece = board.try_make_piece(pt("k10"), Color::Black).unwrap();
        let removed = board.execute_move(&piece, pt("k13"), Color::Black).unwrap();
        assert_eq!(removed, Removals { black: 1, white: 2 });
        assert_eq!(board.count(Color::Black), 2);
        assert_eq!(board.count(Color::White), 0);
        assert_eq!(board.get(pt("k14")), Some(Color::Black));
        assert_eq!(board.get(pt("j14")), None);
    }

    #[test]
    fn test_execute_move_into_dead_zone_loses_stones() {
        let mut board = setpos(&["k17", "k18", "j18"], &[]);
        let piece = board.try_make_piece(pt("k17"), Color::Black).unwrap();
        let moves = board.legal_destinations(&piece, Color::Black);
        assert!(moves.contains(&pt("k19")));
        assert!(!moves.contains(&pt("k20")));
        let removed = board.execute_move(&piece, pt("k19"), Color::Black).unwrap();
        // the north and north-west stones land on row 20
        assert_eq!(removed, Removals { black: 2, white: 0 });
        assert_eq!(board.count(Color::Black), 1);
        assert_eq!(board.get(pt("k19")), Some(Color::Black));
        assert_eq!(board.get(pt("k20")), None);
    }

    #[test]
    fn test_execute_move_rejects_illegal_destination() {
        let mut board = setpos(&["k11"], &[]);
        let before = board.clone();
        let piece = board.try_make_piece(pt("k10"), Color::Black).unwrap();
        assert_eq!(
            board.execute_move(&piece, pt("k14"), Color::Black),
            Err(GessError::IllegalDestination(pt("k14")))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_execute_move_rejects_stale_piece() {
        let mut board = setpos(&["k11", "m13"], &[]);
        let piece = board.try_make_piece(pt("k10"), Color::Black).unwrap();
        board.set(pt("j9"), Some(Color::Black));
        assert_eq!(
            board.execute_move(&piece, pt("k11"), Color::Black),
            Err(GessError::InvalidPiece(pt("k10")))
        );
    }

    #[test]
    fn test_initial_rings() {
        let board = Board::new();
        assert_eq!(board.count_rings(Color::Black), 1);
        assert_eq!(board.count_rings(Color::White), 1);
    }

    #[test]
    fn test_overlapping_rings_counted_separately() {
        // d6 and f6 are empty centers sharing the e column
        let black = [
            "c5", "d5", "e5", "f5", "g5", "c6", "e6", "g6", "c7", "d7", "e7", "f7", "g7",
        ];
        let mut board = setpos(&black, &[]);
        assert_eq!(board.count_rings(Color::Black), 2);
        assert_eq!(board.count_rings(Color::White), 0);

        board.set(pt("e6"), None);
        assert_eq!(board.count_rings(Color::Black), 0);
    }

    #[test]
    fn test_display_shape() {
        let dump = Board::new().to_string();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), N + 1);
        assert!(lines[0].starts_with("20 -"));
        assert!(lines[N].trim_start().starts_with("a b c"));
        assert!(lines[18].starts_with(" 2 - . X"));
    }
}
