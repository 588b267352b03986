//! Sparse board keyed by centered coordinates

use std::collections::HashMap;

use super::{Coord, Stone, BOARD_SIZE};

/// Game board.
///
/// Only occupied cells are stored: a coordinate is present in the map if and
/// only if a stone sits on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    half: i32,
    cells: HashMap<Coord, Stone>,
}

impl Board {
    pub fn new() -> Self {
        Self::with_size(BOARD_SIZE)
    }

    /// Board of `size` x `size` cells. `size` must already be validated as
    /// odd and in range (see
    /// [`validate_board_size`](crate::config::validate_board_size)).
    pub(crate) fn with_size(size: usize) -> Self {
        Self {
            size,
            half: (size as i32 - 1) / 2,
            cells: HashMap::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Largest coordinate value on either axis; the smallest is its negation.
    #[inline]
    pub fn half_extent(&self) -> i32 {
        self.half
    }

    /// Check if coordinate lies on the board
    #[inline]
    pub fn is_valid(&self, at: Coord) -> bool {
        (-self.half..=self.half).contains(&at.x) && (-self.half..=self.half).contains(&at.y)
    }

    /// Get stone at coordinate. Off-board coordinates read as `Empty`.
    #[inline]
    pub fn get(&self, at: Coord) -> Stone {
        self.cells.get(&at).copied().unwrap_or(Stone::Empty)
    }

    /// Check if coordinate is empty
    #[inline]
    pub fn is_empty(&self, at: Coord) -> bool {
        !self.cells.contains_key(&at)
    }

    /// Place a stone, overwriting whatever was there.
    /// Legality is the caller's concern; placing `Empty` removes the entry.
    #[inline]
    pub fn place_stone(&mut self, at: Coord, stone: Stone) {
        match stone {
            Stone::Empty => self.remove_stone(at),
            _ => {
                self.cells.insert(at, stone);
            }
        }
    }

    /// Remove a stone (no-op if absent)
    #[inline]
    pub fn remove_stone(&mut self, at: Coord) {
        self.cells.remove(&at);
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Iterate over occupied cells in no particular order
    pub fn stones(&self) -> impl Iterator<Item = (Coord, Stone)> + '_ {
        self.cells.iter().map(|(&at, &stone)| (at, stone))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
