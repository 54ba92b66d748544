//! Game configuration.
//!
//! The board layout is fixed and not part of the configuration.
//! `GameConfig` only covers how a session is seeded and driven.

use serde::{Deserialize, Serialize};

use super::error::SetupError;

/// Session configuration for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the roll order shuffle, the die, and automatic guesses.
    /// Same seed and same names produce the same game.
    pub seed: u64,

    /// Upper bound on rounds the driver plays before giving up.
    pub max_rounds: u32,

    /// Answer numeric prompts from the RNG instead of asking a human.
    pub auto_guess: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_rounds: 1000,
            auto_guess: false,
        }
    }
}

impl GameConfig {
    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the round limit.
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Answer prompts automatically.
    #[must_use]
    pub fn with_auto_guess(mut self, auto_guess: bool) -> Self {
        self.auto_guess = auto_guess;
        self
    }

    /// Check the configuration before a game is built from it.
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.max_rounds == 0 {
            return Err(SetupError::ZeroRoundLimit);
        }
        Ok(())
    }
}
