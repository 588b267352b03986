//! Gomoku (five in a row) game engine
//!
//! A turn-based engine for standard Gomoku:
//! - 15x15 board by default, coordinates centered on the middle cell
//! - Black moves first, colors follow move order
//! - 5-in-a-row to win (overlines allowed)
//! - Any empty on-board cell is a legal move
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Sparse board and coordinate types
//! - [`rules`]: Win detection
//! - [`engine`]: Move lifecycle, undo and history replay
//! - [`config`]: TOML configuration for board size and opening
//! - [`ui`]: egui front end driving the engine
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Coord, GomokuEngine, Stone};
//!
//! // Resume a saved game: colors are derived from move order
//! let opening = vec![Coord::new(0, 0), Coord::new(1, 0)];
//! let mut engine = GomokuEngine::with_opening(15, opening).unwrap();
//! assert_eq!(engine.to_move(), Stone::Black);
//!
//! engine.play(Coord::new(0, 1)).unwrap();
//! assert_eq!(engine.moves().len(), 3);
//!
//! // Take it back
//! assert_eq!(engine.rollback(), Some(Coord::new(0, 1)));
//! assert_eq!(engine.winner(), None);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Coord, Stone, BOARD_SIZE};
pub use config::{AppConfig, GameConfig};
pub use engine::{GomokuEngine, Placement, ReplayOutcome, Victory};
pub use error::{ConfigError, MoveError};
pub use rules::WIN_LENGTH;
