//! Pieces: 3x3 snapshots of the board around a chosen center.
//!
//! A [`Piece`] records the center cell and its eight neighbours together
//! with the stones they held when the snapshot was taken. It is a plain
//! value: later board changes do not show up in it. The board decides
//! whether a snapshot is a *valid* piece for a player; this module only
//! handles the geometry.

use std::fmt;

use crate::board::{Board, Color, stone_char};
use crate::coord::Coord;
use crate::error::GessError;

/// The eight directions a piece can slide in, which are also the eight
/// neighbour slots of its footprint. North is toward higher row numbers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// `(dcol, drow)` of a single step.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    /// Step `steps` times from `from` in this direction.
    pub fn walk(self, from: Coord, steps: usize) -> Option<Coord> {
        let (dc, dr) = self.delta();
        let steps = isize::try_from(steps).ok()?;
        from.offset(dc * steps, dr * steps)
    }
}

/// Slot of the center cell in [`Piece::cells`]; slots `0..8` follow
/// [`Direction::ALL`].
pub const CENTER: usize = 8;

/// A 3x3 snapshot around `center`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    center: Coord,
    coords: [Coord; 9],
    stones: [Option<Color>; 9],
}

impl Piece {
    /// Snapshot the footprint around `center` without checking whether it
    /// makes a valid piece. Fails only when a neighbour would be off the grid.
    pub fn snapshot(board: &Board, center: Coord) -> Result<Self, GessError> {
        let mut coords = [center; 9];
        for (slot, dir) in Direction::ALL.iter().enumerate() {
            coords[slot] = dir
                .walk(center, 1)
                .ok_or_else(|| GessError::OutOfRange(format!("piece at {center}")))?;
        }
        let stones = coords.map(|pt| board.get(pt));
        Ok(Piece {
            center,
            coords,
            stones,
        })
    }

    pub fn center(&self) -> Coord {
        self.center
    }

    pub fn center_stone(&self) -> Option<Color> {
        self.stones[CENTER]
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Color> {
        self.stones[dir as usize]
    }

    pub fn neighbor_coord(&self, dir: Direction) -> Coord {
        self.coords[dir as usize]
    }

    /// The nine cells covered by the piece, in slot order.
    pub fn footprint(&self) -> &[Coord; 9] {
        &self.coords
    }

    /// Whether `pt` is one of the nine cells of this piece.
    pub fn covers(&self, pt: Coord) -> bool {
        self.center.col().abs_diff(pt.col()) <= 1 && self.center.row().abs_diff(pt.row()) <= 1
    }

    /// `(coord, stone)` for each slot, neighbours first and center last.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Option<Color>)> + '_ {
        self.coords.iter().copied().zip(self.stones.iter().copied())
    }

    /// Center of the piece after sliding `steps` cells in `dir`.
    pub fn project(&self, dir: Direction, steps: usize) -> Option<Coord> {
        dir.walk(self.center, steps)
    }

    /// Leading edge cell in `dir` after sliding `steps` cells that way.
    pub fn projected_edge(&self, dir: Direction, steps: usize) -> Option<Coord> {
        dir.walk(self.neighbor_coord(dir), steps)
    }

    /// Empty center ringed by eight of `color`'s stones.
    pub fn is_ring(&self, color: Color) -> bool {
        self.center_stone().is_none()
            && Direction::ALL
                .iter()
                .all(|&dir| self.neighbor(dir) == Some(color))
    }
}

impl fmt::Display for Piece {
    /// Rows from north to south, e.g. `XXX/.X./...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Direction::*;
        let layout = [
            [Some(NorthWest), Some(North), Some(NorthEast)],
            [Some(West), None, Some(East)],
            [Some(SouthWest), Some(South), Some(SouthEast)],
        ];
        for (i, row) in layout.iter().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for slot in row {
                let stone = match slot {
                    Some(dir) => self.neighbor(*dir),
                    None => self.center_stone(),
                };
                write!(f, "{}", stone_char(stone))?;
            }
        }
        Ok(())
    }
}
