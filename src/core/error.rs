//! Setup errors.
//!
//! Play itself cannot fail: once a game is built, every operation is total.
//! Broken internal invariants (a position off the track) panic instead.

use thiserror::Error;

/// Errors raised while assembling a game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("at least one player is required")]
    NoPlayers,
    #[error("at most 255 players are supported (got {0})")]
    TooManyPlayers(usize),
    #[error("player name at position {0} is empty")]
    EmptyName(usize),
    #[error("duplicate player name {0:?}")]
    DuplicateName(String),
    #[error("roll order must list each of the {expected} players exactly once")]
    InvalidRollOrder { expected: usize },
    #[error("max_rounds must be at least 1")]
    ZeroRoundLimit,
}
