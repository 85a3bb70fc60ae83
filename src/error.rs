use std::path::PathBuf;

use crate::game::{Piece, COLS};

/// Reasons a column cannot take a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (expected 0-{max})", max = COLS - 1)]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("piece at row {row}, column {col} has nothing beneath it")]
    FloatingPiece { row: usize, col: usize },
}

/// Errors a move source can report instead of a column.
#[derive(Debug, thiserror::Error)]
pub enum MoveSourceError {
    #[error("no legal moves available")]
    NoLegalMoves,

    #[error("input ended before a move was entered")]
    InputExhausted,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while driving a game.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("{player} chose an illegal move: {error}")]
    IllegalMove { player: String, error: MoveError },

    #[error("both players were given the {} piece", .0.name())]
    SamePiece(Piece),

    #[error("game is already over")]
    GameOver,

    #[error("move source failed: {0}")]
    Source(#[from] MoveSourceError),
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
