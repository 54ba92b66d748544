//! Game state: track, roster, positions, roll order, and history.
//!
//! ## Invariants
//!
//! - Every position is a valid track index (`0..=LAST_SQUARE`).
//! - The roll order lists every player exactly once and never changes
//!   after play starts.
//! - `game_over` flips to true the first time a player stands on the last
//!   square and is never reset.

use im::Vector;
use log::debug;
use rustc_hash::FxHashSet;

use super::error::SetupError;
use super::player::{Player, PlayerId, PlayerMap};
use super::record::TurnRecord;
use super::rng::GameRng;
use crate::board::{Track, LAST_SQUARE};

/// Full state of one game session.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) track: Track,
    pub(crate) players: PlayerMap<Player>,
    positions: PlayerMap<usize>,
    roll_order: Vec<PlayerId>,
    game_over: bool,
    /// Rounds started so far (0 before the first round).
    round: u32,
    /// Every turn taken, oldest first.
    history: Vector<TurnRecord>,
}

impl GameState {
    /// Register players on a fresh track, all at square 0.
    ///
    /// The roll order starts as registration order; call
    /// `shuffle_roll_order` or `set_roll_order` before play.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, SetupError> {
        if names.is_empty() {
            return Err(SetupError::NoPlayers);
        }
        if names.len() > 255 {
            return Err(SetupError::TooManyPlayers(names.len()));
        }

        let mut seen = FxHashSet::default();
        for (i, name) in names.iter().enumerate() {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(SetupError::EmptyName(i));
            }
            if !seen.insert(name) {
                return Err(SetupError::DuplicateName(name.to_string()));
            }
        }

        let count = names.len();
        let players = PlayerMap::new(count, |id| {
            Player::new(id, names[id.index()].as_ref().trim())
        });

        Ok(Self {
            track: Track::standard(),
            players,
            positions: PlayerMap::with_value(count, 0),
            roll_order: PlayerId::all(count).collect(),
            game_over: false,
            round: 0,
            history: Vector::new(),
        })
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    // === Track ===

    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn track_mut(&mut self) -> &mut Track {
        &mut self.track
    }

    // === Players ===

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    // === Positions ===

    #[must_use]
    pub fn position(&self, id: PlayerId) -> usize {
        self.positions[id]
    }

    #[must_use]
    pub fn positions(&self) -> &PlayerMap<usize> {
        &self.positions
    }

    /// Place a player on a square.
    ///
    /// Panics if `position` is off the track.
    pub fn set_position(&mut self, id: PlayerId, position: usize) {
        assert!(
            position <= LAST_SQUARE,
            "position {} for {} is off the track (0..={})",
            position,
            id,
            LAST_SQUARE
        );
        self.positions[id] = position;
    }

    // === Roll Order ===

    #[must_use]
    pub fn roll_order(&self) -> &[PlayerId] {
        &self.roll_order
    }

    /// Shuffle the roll order uniformly.
    pub fn shuffle_roll_order(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.roll_order);
        debug!("roll order: {:?}", self.roll_order);
    }

    /// Fix the roll order explicitly.
    ///
    /// `order` must be a permutation of all registered players.
    pub fn set_roll_order(&mut self, order: Vec<PlayerId>) -> Result<(), SetupError> {
        let count = self.player_count();
        let mut sorted = order.clone();
        sorted.sort();
        if !sorted.iter().copied().eq(PlayerId::all(count)) {
            return Err(SetupError::InvalidRollOrder { expected: count });
        }
        self.roll_order = order;
        Ok(())
    }

    // === Game End ===

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Recompute the game-over flag. Once true it stays true.
    pub fn update_game_over(&mut self) -> bool {
        if !self.game_over {
            self.game_over = self.positions.iter().any(|(_, &pos)| pos == LAST_SQUARE);
        }
        self.game_over
    }

    /// First player in roll order standing on the last square.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.roll_order
            .iter()
            .copied()
            .find(|&id| self.positions[id] == LAST_SQUARE)
    }

    // === Rounds & History ===

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Start the next round and return its number.
    pub(crate) fn begin_round(&mut self) -> u32 {
        self.round += 1;
        self.round
    }

    pub(crate) fn record(&mut self, record: TurnRecord) {
        self.history.push_back(record);
    }

    /// Every turn taken so far.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_places_everyone_at_start() {
        let state = GameState::new(&["Ash", "Misty", "Brock"]).unwrap();

        assert_eq!(state.player_count(), 3);
        for id in PlayerId::all(3) {
            assert_eq!(state.position(id), 0);
            assert!(!state.player(id).missed_turn());
        }
        assert_eq!(state.player(PlayerId::new(1)).name(), "Misty");
        assert_eq!(state.roll_order().len(), 3);
        assert!(!state.is_game_over());
        assert_eq!(state.round(), 0);
    }

    #[test]
    fn test_setup_errors() {
        let none: [&str; 0] = [];
        assert_eq!(GameState::new(&none).unwrap_err(), SetupError::NoPlayers);
        assert_eq!(
            GameState::new(&["Ash", "  "]).unwrap_err(),
            SetupError::EmptyName(1)
        );
        assert_eq!(
            GameState::new(&["Ash", "Ash"]).unwrap_err(),
            SetupError::DuplicateName("Ash".to_string())
        );

        let many: Vec<String> = (0..256).map(|i| format!("p{}", i)).collect();
        assert_eq!(
            GameState::new(&many).unwrap_err(),
            SetupError::TooManyPlayers(256)
        );
    }

    #[test]
    fn test_shuffle_keeps_every_player() {
        let names: Vec<String> = (0..8).map(|i| format!("p{}", i)).collect();
        let mut state = GameState::new(&names).unwrap();
        state.shuffle_roll_order(&mut GameRng::new(9));

        let mut order = state.roll_order().to_vec();
        order.sort();
        assert_eq!(order, PlayerId::all(8).collect::<Vec<_>>());
    }

    #[test]
    fn test_set_roll_order_validates() {
        let mut state = GameState::new(&["a", "b", "c"]).unwrap();
        let (a, b, c) = (PlayerId::new(0), PlayerId::new(1), PlayerId::new(2));

        assert!(state.set_roll_order(vec![c, a, b]).is_ok());
        assert_eq!(state.roll_order(), &[c, a, b]);

        assert!(state.set_roll_order(vec![a, a, b]).is_err());
        assert!(state.set_roll_order(vec![a, b]).is_err());
        assert_eq!(state.roll_order(), &[c, a, b]);
    }

    #[test]
    fn test_game_over_is_monotonic() {
        let mut state = GameState::new(&["a", "b"]).unwrap();
        let a = PlayerId::new(0);

        assert!(!state.update_game_over());
        state.set_position(a, LAST_SQUARE);
        assert!(state.update_game_over());
        assert_eq!(state.winner(), Some(a));

        state.set_position(a, 10);
        assert!(state.update_game_over());
        assert!(state.is_game_over());
    }

    #[test]
    #[should_panic(expected = "off the track")]
    fn test_set_position_off_track_panics() {
        let mut state = GameState::new(&["a"]).unwrap();
        state.set_position(PlayerId::new(0), 72);
    }
}
