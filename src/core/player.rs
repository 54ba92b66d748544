//! Player identification, per-player data storage, and player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Efficient per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.
//!
//! ## Player
//!
//! Display name, missed-turn flag, and a named progress store that gate
//! squares read and write. Gates add their own keys; `Player` never needs
//! to change shape for a new gate.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based and follow registration order,
/// not roll order: the first name given at setup is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_track::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
///
/// ```
/// use rust_track::core::{PlayerId, PlayerMap};
///
/// let mut positions: PlayerMap<usize> = PlayerMap::with_value(3, 0);
/// positions[PlayerId::new(1)] = 12;
/// assert_eq!(positions[PlayerId::new(1)], 12);
/// assert_eq!(positions[PlayerId::new(2)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// Mutable per-participant state.
///
/// ## Progress Values (i64 only)
///
/// `progress` is a `FxHashMap<String, i64>`:
/// - Counters: incremented with `add_progress`
/// - Booleans: stored as 0/1 via `set_flag` / `flag`
///
/// Values only ever grow during a game; nothing resets them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    missed_turn: bool,
    progress: FxHashMap<String, i64>,
}

impl Player {
    /// Create a player with no progress and no pending missed turn.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            missed_turn: false,
            progress: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Missed Turn ===

    /// Mark the player to sit out their next turn.
    pub fn set_missed_turn(&mut self) {
        self.missed_turn = true;
    }

    pub fn clear_missed_turn(&mut self) {
        self.missed_turn = false;
    }

    #[must_use]
    pub fn missed_turn(&self) -> bool {
        self.missed_turn
    }

    // === Progress ===

    /// Increment a named counter by one.
    pub fn add_progress(&mut self, key: &str) {
        *self.progress.entry(key.to_string()).or_insert(0) += 1;
    }

    /// Current value of a named counter (0 if never touched).
    #[must_use]
    pub fn progress(&self, key: &str) -> i64 {
        self.progress.get(key).copied().unwrap_or(0)
    }

    /// Set a named boolean flag.
    pub fn set_flag(&mut self, key: &str) {
        self.progress.insert(key.to_string(), 1);
    }

    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.progress(key) != 0
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
