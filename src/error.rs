use std::path::PathBuf;

use crate::game::Player;

/// Errors returned by game operations. None of them change the grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("column {column} is out of range (board has {width} columns)")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is already over")]
    GameAlreadyOver,

    #[error("invalid board dimensions {width}x{height} (each must be between 4 and 64)")]
    InvalidDimensions { width: usize, height: usize },
}

/// A move in a scripted sequence that the game refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("move {turn} by {player} in column {column} rejected: {source}")]
pub struct ReplayError {
    /// 1-based position in the sequence
    pub turn: usize,
    pub player: Player,
    pub column: usize,
    pub source: GameError,
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
    fn test_game_error_display() {
        let err = GameError::ColumnOutOfRange { column: 7, width: 7 };
        assert_eq!(
            err.to_string(),
            "column 7 is out of range (board has 7 columns)"
        );
        assert_eq!(GameError::ColumnFull(2).to_string(), "column 2 is full");
    }

    #[test]
    fn test_invalid_dimensions_display() {
        let err = GameError::InvalidDimensions { width: 3, height: 6 };
        assert_eq!(
            err.to_string(),
            "invalid board dimensions 3x6 (each must be between 4 and 64)"
        );
    }

    #[test]
    fn test_replay_error_display() {
        let err = ReplayError {
            turn: 7,
            player: Player::One,
            column: 0,
            source: GameError::ColumnFull(0),
        };
        assert_eq!(
            err.to_string(),
            "move 7 by Player 1 in column 0 rejected: column 0 is full"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.width must be >= 4".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be >= 4"
        );
    }
}
