//! Error types for the engine and tournament driver.
//!
//! Only conditions that indicate a bookkeeping defect or a bad configuration
//! are errors. A player with no legal move, or a tile that is not in a hand,
//! is reported through `Option`/`bool` results instead.

use thiserror::Error;

use super::tile::Tile;
use crate::tournament::StopReason;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DominoError>;

/// Errors raised by the domino engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DominoError {
    #[error("pip value {0} is outside 0..=6")]
    PipOutOfRange(u8),

    #[error("hand already holds {capacity} tiles, cannot add {tile}")]
    HandFull { tile: Tile, capacity: usize },

    #[error("round has no participants")]
    NoParticipants,

    #[error("{name} has an empty hand in the middle of a round")]
    EmptyHand { name: String },

    #[error("round is already over")]
    RoundOver,

    #[error("tournament already finished: {0:?}")]
    TournamentOver(StopReason),

    #[error("bookkeeping invariant violated: {0}")]
    Invariant(String),

    #[error("invalid tournament configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Tournament configuration problems, detected before any round is played.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tournament requires 2 to 4 participants but found {found}")]
    ParticipantCount { found: usize },

    #[error("participant at position {index} has an empty name")]
    EmptyName { index: usize },

    #[error("participant name '{0}' is used more than once")]
    DuplicateName(String),

    #[error("max_games must be at least 1")]
    ZeroGames,

    #[error("{field} threshold must be positive when set")]
    ZeroThreshold { field: &'static str },
}

impl DominoError {
    pub(crate) fn invariant(message: impl Into<String>) -> Self {
        DominoError::Invariant(message.into())
    }
}
