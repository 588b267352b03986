//! Game rules for standard Gomoku
//!
//! Legality is only "empty cell within bounds"; the one rule with real
//! substance is the five-in-a-row win condition.

pub mod win;

// Re-exports for convenient access
pub use win::{find_five_line_at_pos, DIRECTIONS, WIN_LENGTH};
