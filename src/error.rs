use std::path::PathBuf;

use crate::game::PlayerId;

/// A piece was added to a cell that already holds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cell is already occupied by player {owner}")]
pub struct OccupiedError {
    pub owner: PlayerId,
}

/// Reasons a drop is rejected. The board is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("column {column} is outside the board (width {width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
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
    fn test_occupied_error_display() {
        let err = OccupiedError { owner: 2 };
        assert_eq!(err.to_string(), "cell is already occupied by player 2");
    }

    #[test]
    fn test_drop_error_display() {
        let err = DropError::InvalidColumn {
            column: 9,
            width: 7,
        };
        assert_eq!(err.to_string(), "column 9 is outside the board (width 7)");

        let err = DropError::ColumnFull { column: 3 };
        assert_eq!(err.to_string(), "column 3 is full");
    }

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidDimensions {
            width: 0,
            height: 6,
        };
        assert_eq!(err.to_string(), "invalid board dimensions 0x6");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("board.width must be >= 1".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: board.width must be >= 1"
        );
    }
}
