//! Board representation for Gomoku

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Default board size (15x15)
pub const BOARD_SIZE: usize = 15;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Color that owns the move at log index `ply` (Black on even plies).
    #[inline]
    pub fn for_ply(ply: usize) -> Stone {
        if ply % 2 == 0 {
            Stone::Black
        } else {
            Stone::White
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        }
    }
}

impl std::fmt::Display for Stone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Board coordinate, origin at the center.
///
/// `x` grows to the right and `y` grows downward; the valid range for each
/// axis on an `N`-sized board is `[-(N-1)/2, (N-1)/2]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Step `k` times along direction `(dx, dy)`.
    #[inline]
    pub fn offset(self, (dx, dy): (i32, i32), k: i32) -> Self {
        Self {
            x: self.x + dx * k,
            y: self.y + dy * k,
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
