//! Per-side bookkeeping: stones left and rings held.

use crate::board::Color;
use crate::constants::{INITIAL_RINGS, INITIAL_STONES};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    color: Color,
    /// Stones of this color still on the board
    remaining_stones: u32,
    /// Rings found by the last ring count
    rings: u32,
}

impl Player {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            remaining_stones: INITIAL_STONES,
            rings: INITIAL_RINGS,
        }
    }

    pub(crate) fn with_counts(color: Color, remaining_stones: u32, rings: u32) -> Self {
        Self {
            color,
            remaining_stones,
            rings,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn remaining_stones(&self) -> u32 {
        self.remaining_stones
    }

    pub fn rings(&self) -> u32 {
        self.rings
    }

    pub(crate) fn remove_stones(&mut self, n: u32) {
        self.remaining_stones = self.remaining_stones.saturating_sub(n);
    }

    pub(crate) fn set_rings(&mut self, rings: u32) {
        self.rings = rings;
    }
}
