use std::path::Path;

use tracing::warn;

use crate::board::{Coord, BOARD_SIZE};
use crate::error::ConfigError;

/// Largest board the GUI can lay out with readable labels
pub const MAX_BOARD_SIZE: usize = 25;

/// Game setup: board size and an optional opening to replay.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    /// Moves replayed at start and after every reset; colors follow turn parity
    pub opening: Vec<Coord>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board_size: BOARD_SIZE,
            opening: Vec::new(),
        }
    }
}

impl GameConfig {
    /// Validate configuration values.
    ///
    /// Opening moves are not checked here: an illegal opening move only
    /// truncates the replay.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_board_size(self.board_size)
    }
}

/// Board sizes must be odd (so the origin is a real cell) and at most
/// `MAX_BOARD_SIZE`.
pub fn validate_board_size(size: usize) -> Result<(), ConfigError> {
    if size % 2 == 0 {
        return Err(ConfigError::Validation(format!(
            "game.board_size must be odd, got {size}"
        )));
    }
    if size > MAX_BOARD_SIZE {
        return Err(ConfigError::Validation(format!(
            "game.board_size must be <= {MAX_BOARD_SIZE}, got {size}"
        )));
    }
    Ok(())
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.game.board_size, 15);
        assert!(config.game.opening.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::parse(
            r#"
            [game]
            board_size = 11
            opening = [{ x = 0, y = 0 }, { x = 1, y = -1 }]
            "#,
        )
        .unwrap();
        assert_eq!(config.game.board_size, 11);
        assert_eq!(config.game.opening, vec![Coord::new(0, 0), Coord::new(1, -1)]);
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config = AppConfig::parse("[game]\nopening = [{ x = 2, y = 3 }]\n").unwrap();
        assert_eq!(config.game.board_size, 15);
        assert_eq!(config.game.opening.len(), 1);

        let empty = AppConfig::parse("").unwrap();
        assert_eq!(empty, AppConfig::default());
    }

    #[test]
    fn test_even_board_size_rejected() {
        let err = AppConfig::parse("[game]\nboard_size = 14\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "config validation error: game.board_size must be odd, got 14"
        );
    }

    #[test]
    fn test_oversized_board_rejected() {
        let config = GameConfig {
            board_size: 99,
            opening: Vec::new(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_board_size_bounds() {
        assert!(validate_board_size(1).is_ok());
        assert!(validate_board_size(15).is_ok());
        assert!(validate_board_size(MAX_BOARD_SIZE).is_ok());
        assert!(validate_board_size(0).is_err());
        assert!(validate_board_size(14).is_err());
        assert!(validate_board_size(MAX_BOARD_SIZE + 2).is_err());
        assert!(validate_board_size(usize::MAX).is_err());
    }

    #[test]
    fn test_out_of_range_opening_is_not_a_config_error() {
        let config = AppConfig::parse("[game]\nopening = [{ x = 9, y = 0 }]\n").unwrap();
        assert_eq!(config.game.opening, vec![Coord::new(9, 0)]);
    }

    #[test]
    fn test_malformed_toml() {
        let err = AppConfig::parse("[game\nboard_size = ").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config =
            AppConfig::load_or_default(Path::new("definitely/not/here/gomoku.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_unreadable_path() {
        let err = AppConfig::load(Path::new("definitely/not/here/gomoku.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }
}
