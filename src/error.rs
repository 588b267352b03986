use std::path::PathBuf;

use crate::board::{Coord, Stone};

/// Reasons a move (played or replayed) is rejected.
///
/// Rejection is always recoverable: the engine state is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid move {0}: outside the board")]
    OutOfBounds(Coord),

    #[error("invalid move {at}: already occupied by {by}")]
    Occupied { at: Coord, by: Stone },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let err = MoveError::OutOfBounds(Coord::new(8, 0));
        assert_eq!(err.to_string(), "invalid move (8, 0): outside the board");
    }

    #[test]
    fn test_occupied_display() {
        let err = MoveError::Occupied {
            at: Coord::new(-1, 2),
            by: Stone::White,
        };
        assert_eq!(err.to_string(), "invalid move (-1, 2): already occupied by White");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.board_size must be odd".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.board_size must be odd"
        );
    }
}
