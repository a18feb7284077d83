//! Command rejections and configuration errors.

use std::path::PathBuf;

use crate::board::Pos;
use crate::session::SkillKind;

/// Why the session ignored a command.
///
/// Every variant is a sequencing mistake on the caller's side; the session
/// state is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game is over")]
    GameOver,

    #[error("another operation is still in progress")]
    Busy,

    #[error("cell ({}, {}) is occupied", .0.row, .0.col)]
    CellOccupied(Pos),

    #[error("cell ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("not this player's turn")]
    NotYourTurn,

    #[error("removal skill is armed; pick a piece instead")]
    RemovalArmed,

    #[error("{0:?} cannot be used right now")]
    SkillUnavailable(SkillKind),

    #[error("no skill selected")]
    NoSkillSelected,

    #[error("{0:?} needs a target piece")]
    NeedsTarget(SkillKind),

    #[error("no piece with id {0}")]
    PieceNotFound(u64),

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("no operation is waiting to be committed")]
    NothingPending,
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
