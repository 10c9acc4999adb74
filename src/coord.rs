//! Board coordinates.
//!
//! A [`Coord`] names one cell of the 20x20 grid. Textually it is a column
//! letter `a..=t` followed by a row number `1..=20` (`"c2"`, `"t20"`).
//! Internally both axes are zero-based indices, with row index 0 holding
//! row 1; all index arithmetic for the board and pieces goes through here.

use std::fmt;
use std::str::FromStr;

use crate::constants::{COLUMNS, N, PLAY_MAX, PLAY_MIN};
use crate::error::GessError;

/// A cell of the board, stored as zero-based `(column, row)` indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    col: usize,
    row: usize,
}

impl Coord {
    /// Build from zero-based indices, rejecting anything off the grid.
    pub fn new(col: usize, row: usize) -> Option<Self> {
        (col < N && row < N).then_some(Self { col, row })
    }

    /// Build from a column letter and a 1-based row number.
    pub fn from_label(column: char, row: usize) -> Result<Self, GessError> {
        let out_of_range = || GessError::OutOfRange(format!("{column}{row}"));
        let col = COLUMNS
            .iter()
            .position(|&c| c as char == column)
            .ok_or_else(out_of_range)?;
        if !(1..=N).contains(&row) {
            return Err(out_of_range());
        }
        Ok(Self { col, row: row - 1 })
    }

    /// Parse a token such as `"c2"` or `"t20"`.
    pub fn parse(s: &str) -> Result<Self, GessError> {
        let out_of_range = || GessError::OutOfRange(s.to_string());
        let mut chars = s.chars();
        let column = chars.next().ok_or_else(out_of_range)?;
        let digits = chars.as_str();
        let well_formed = matches!(digits.as_bytes(), [b'1'..=b'9', rest @ ..]
            if rest.len() <= 1 && rest.iter().all(u8::is_ascii_digit));
        if !well_formed {
            return Err(out_of_range());
        }
        let row = digits.parse::<usize>().map_err(|_| out_of_range())?;
        Self::from_label(column, row).map_err(|_| out_of_range())
    }

    /// Zero-based column index.
    pub fn col(self) -> usize {
        self.col
    }

    /// Zero-based row index.
    pub fn row(self) -> usize {
        self.row
    }

    pub fn column_label(self) -> char {
        COLUMNS[self.col] as char
    }

    pub fn row_label(self) -> usize {
        self.row + 1
    }

    /// Index into the flat, row-major cell array.
    #[inline]
    pub fn index(self) -> usize {
        self.row * N + self.col
    }

    /// True for the outermost columns (a, t) and rows (1, 20).
    #[inline]
    pub fn is_dead_zone(self) -> bool {
        let playable = PLAY_MIN..=PLAY_MAX;
        !playable.contains(&self.col) || !playable.contains(&self.row)
    }

    /// Shift by a signed amount on each axis; `None` once off the grid.
    pub fn offset(self, dcol: isize, drow: isize) -> Option<Self> {
        let col = self.col.checked_add_signed(dcol)?;
        let row = self.row.checked_add_signed(drow)?;
        Self::new(col, row)
    }

    /// Every cell of the grid, row by row starting from row 1.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..N).flat_map(|row| (0..N).map(move |col| Coord { col, row }))
    }
}

impl FromStr for Coord {
    type Err = GessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_label(), self.row_label())
    }
}
