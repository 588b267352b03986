//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe. It holds no game
//! state of its own: clicks become coordinates passed to the engine.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
