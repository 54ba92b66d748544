//! Game assembly.

use crate::core::{Die, GameConfig, GameRng, GameState, PlayerId, SetupError};
use crate::io::Prompt;

use super::turn::TurnEngine;

/// RNG stream used to shuffle the roll order.
pub const ORDER_STREAM: &str = "roll_order";

/// RNG stream used for the die.
pub const DIE_STREAM: &str = "die";

/// RNG stream used for automatic guesses.
pub const GUESS_STREAM: &str = "guess";

/// Builder for creating a `TurnEngine`.
///
/// ```
/// use rust_track::engine::GameBuilder;
///
/// let mut engine = GameBuilder::new()
///     .players(["Ash", "Misty", "Brock"])
///     .seed(7)
///     .build_auto()
///     .unwrap();
///
/// let report = engine.play_round();
/// assert_eq!(report.round, 1);
/// assert_eq!(report.turns.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    names: Vec<String>,
    config: GameConfig,
    roll_order: Option<Vec<PlayerId>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one player.
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Add several players, in registration order.
    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Use a fixed roll order instead of shuffling.
    pub fn roll_order(mut self, order: Vec<PlayerId>) -> Self {
        self.roll_order = Some(order);
        self
    }

    /// Root RNG for this configuration. Derive streams with `for_context`.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        GameRng::new(self.config.seed)
    }

    /// Build the game with an injected die and prompt.
    pub fn build<D: Die, P: Prompt>(
        self,
        die: D,
        prompt: P,
    ) -> Result<TurnEngine<D, P>, SetupError> {
        self.config.validate()?;
        let mut state = GameState::new(&self.names)?;

        match self.roll_order {
            Some(order) => state.set_roll_order(order)?,
            None => {
                let mut order_rng = GameRng::new(self.config.seed).for_context(ORDER_STREAM);
                state.shuffle_roll_order(&mut order_rng);
            }
        }

        Ok(TurnEngine::new(state, die, prompt))
    }

    /// Build an unattended game: seeded die, seeded guesses.
    pub fn build_auto(self) -> Result<TurnEngine<GameRng, GameRng>, SetupError> {
        let rng = self.rng();
        self.build(rng.for_context(DIE_STREAM), rng.for_context(GUESS_STREAM))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDie;
    use crate::io::ScriptedPrompt;

    #[test]
    fn test_build_rejects_bad_setup() {
        let err = GameBuilder::new().build_auto().err();
        assert_eq!(err, Some(SetupError::NoPlayers));

        let err = GameBuilder::new()
            .players(["Ash", "Ash"])
            .build_auto()
            .err();
        assert_eq!(err, Some(SetupError::DuplicateName("Ash".to_string())));

        let err = GameBuilder::new()
            .player("Ash")
            .config(GameConfig::default().with_max_rounds(0))
            .build_auto()
            .err();
        assert_eq!(err, Some(SetupError::ZeroRoundLimit));
    }

    #[test]
    fn test_same_seed_same_roll_order() {
        let names = ["a", "b", "c", "d", "e"];
        let e1 = GameBuilder::new().players(names).seed(11).build_auto().unwrap();
        let e2 = GameBuilder::new().players(names).seed(11).build_auto().unwrap();
        assert_eq!(e1.state().roll_order(), e2.state().roll_order());
    }

    #[test]
    fn test_fixed_roll_order() {
        let order = vec![PlayerId::new(1), PlayerId::new(0)];
        let engine = GameBuilder::new()
            .players(["a", "b"])
            .roll_order(order.clone())
            .build(ScriptedDie::new([1]), ScriptedPrompt::default())
            .unwrap();
        assert_eq!(engine.state().roll_order(), order.as_slice());

        let err = GameBuilder::new()
            .players(["a", "b"])
            .roll_order(vec![PlayerId::new(0)])
            .build(ScriptedDie::new([1]), ScriptedPrompt::default())
            .err();
        assert_eq!(err, Some(SetupError::InvalidRollOrder { expected: 2 }));
    }
}
