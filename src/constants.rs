//! Constants for board geometry, stone inventory, and movement limits.
//!
//! The board is a fixed 20x20 grid addressed by columns `a..=t` and rows
//! `1..=20`. The outermost ring of cells is the dead zone: it never holds a
//! stone and swallows any stone pushed onto it.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN). Gess is always played on 20x20.
pub const N: usize = 20;

/// Total number of cells in the grid, dead zone included.
pub const BOARDSIZE: usize = N * N;

/// Column letters in index order.
pub const COLUMNS: &[u8; N] = b"abcdefghijklmnopqrst";

/// First playable index on either axis (index 0 is dead zone).
pub const PLAY_MIN: usize = 1;

/// Last playable index on either axis (index `N - 1` is dead zone).
pub const PLAY_MAX: usize = N - 2;

// =============================================================================
// Stones and Pieces
// =============================================================================

/// Stones each side starts with.
pub const INITIAL_STONES: u32 = 43;

/// Rings each side starts with.
pub const INITIAL_RINGS: u32 = 1;

/// Maximum slide distance for a piece whose center is empty.
pub const RESTRICTED_RANGE: usize = 3;

/// Maximum slide distance for a piece whose center holds a stone.
/// The dead zone always stops the slide first.
pub const UNRESTRICTED_RANGE: usize = N;

// =============================================================================
// Initial Layout
// =============================================================================

/// Black's starting stones as `(row, columns)` pairs, rows numbered from 1.
/// White's layout mirrors it: row `r` maps to row `N + 1 - r`.
pub const BLACK_LAYOUT: [(usize, &str); 4] = [
    (2, "ceghijklmnpr"),
    (3, "bcdfhijkmoqrs"),
    (4, "ceghijklmnpr"),
    (7, "cfilor"),
];

// =============================================================================
// Board Dump Characters
// =============================================================================

/// Black stone.
pub const STONE_BLACK: char = 'X';

/// White stone.
pub const STONE_WHITE: char = 'O';

/// Empty playable cell.
pub const EMPTY: char = '.';

/// Empty dead-zone cell.
pub const OUT: char = '-';
