//! The 72-square track.

use super::catalog::{SQUARES, TRACK_LEN};
use super::hooks::ArriveHook;
use super::square::{Square, SquareKind};

/// Index of the final square. Reaching it ends the game.
pub const LAST_SQUARE: usize = TRACK_LEN - 1;

/// Gate square indices.
pub const GOLD_SQUARES: [usize; 12] = [6, 13, 19, 32, 43, 52, 58, 63, 68, 69, 70, 71];

/// Zone square indices.
pub const SILVER_SQUARES: [usize; 14] = [23, 24, 25, 26, 27, 36, 37, 38, 39, 40, 48, 49, 50, 51];

/// Ordered sequence of exactly `TRACK_LEN` squares.
///
/// Built once from the catalog. Square kinds never change afterwards;
/// only gate visitor sets do.
#[derive(Clone, Debug)]
pub struct Track {
    squares: Vec<Square>,
}

impl Track {
    /// Build the standard board.
    #[must_use]
    pub fn standard() -> Self {
        let squares: Vec<Square> = SQUARES
            .iter()
            .enumerate()
            .map(|(index, rule)| Square::new(index, *rule))
            .collect();

        debug_assert_eq!(squares.len(), TRACK_LEN);
        Self { squares }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Look up a square.
    ///
    /// Panics if `index` is off the track: positions are kept in range by
    /// the engine, so an out-of-range index is a bug, never user input.
    #[must_use]
    pub fn square(&self, index: usize) -> &Square {
        self.squares.get(index).unwrap_or_else(|| off_track(index))
    }

    /// Mutable variant of [`Track::square`]. Same panic contract.
    pub fn square_mut(&mut self, index: usize) -> &mut Square {
        self.squares.get_mut(index).unwrap_or_else(|| off_track(index))
    }

    /// Non-panicking lookup.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Square> {
        self.squares.get(index)
    }

    /// Replace the arrival hook of one square.
    ///
    /// Kind and clearing rule stay as the board defines them.
    pub fn set_hook(&mut self, index: usize, hook: ArriveHook) {
        self.square_mut(index).set_hook(hook);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }

    /// Indices of all squares of a given kind, ascending.
    pub fn indices_of(&self, kind: SquareKind) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .filter(move |s| s.kind() == kind)
            .map(Square::index)
    }
}

fn off_track(index: usize) -> ! {
    panic!("square index {} is off the track (0..={})", index, LAST_SQUARE)
}

impl Default for Track {
    fn default() -> Self {
        Self::standard()
    }
}
