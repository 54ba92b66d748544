//! Six-sided die abstraction.
//!
//! The engine never touches a global RNG. Every roll goes through a `Die`
//! supplied at construction:
//!
//! - `GameRng` implements `Die` for real play (seeded, reproducible).
//! - `ScriptedDie` replays a fixed sequence for tests and replays.

use super::rng::GameRng;

/// Lowest face of the die.
pub const DIE_MIN: u8 = 1;

/// Highest face of the die.
pub const DIE_MAX: u8 = 6;

/// A source of die rolls in `DIE_MIN..=DIE_MAX`.
pub trait Die {
    /// Roll once. Total: always returns a value in `1..=6`.
    fn roll(&mut self) -> u8;
}

impl Die for GameRng {
    fn roll(&mut self) -> u8 {
        self.gen_range(i64::from(DIE_MIN)..i64::from(DIE_MAX) + 1) as u8
    }
}

impl<D: Die + ?Sized> Die for Box<D> {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Replays a fixed sequence of rolls, cycling when exhausted.
///
/// ```
/// use rust_track::core::{Die, ScriptedDie};
///
/// let mut die = ScriptedDie::new([6, 1, 5]);
/// assert_eq!(die.roll(), 6);
/// assert_eq!(die.roll(), 1);
/// assert_eq!(die.roll(), 5);
/// assert_eq!(die.roll(), 6); // wraps around
/// assert_eq!(die.rolls_made(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedDie {
    rolls: Vec<u8>,
    cursor: usize,
    made: usize,
}

impl ScriptedDie {
    /// Create a scripted die.
    ///
    /// Panics if the script is empty or contains a face outside `1..=6`.
    pub fn new(rolls: impl IntoIterator<Item = u8>) -> Self {
        let rolls: Vec<u8> = rolls.into_iter().collect();
        assert!(!rolls.is_empty(), "Scripted die needs at least one roll");
        assert!(
            rolls.iter().all(|r| (DIE_MIN..=DIE_MAX).contains(r)),
            "Scripted rolls must be within {}..={}",
            DIE_MIN,
            DIE_MAX
        );

        Self {
            rolls,
            cursor: 0,
            made: 0,
        }
    }

    /// Total number of rolls handed out so far.
    #[must_use]
    pub fn rolls_made(&self) -> usize {
        self.made
    }
}

impl Die for ScriptedDie {
    fn roll(&mut self) -> u8 {
        let value = self.rolls[self.cursor];
        self.cursor = (self.cursor + 1) % self.rolls.len();
        self.made += 1;
        value
    }
}
