//! Turn records: what happened on each player's turn.
//!
//! Used for:
//! - Round reports returned to the driver
//! - Game history (replay, determinism checks)

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A gate hook fired during a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateEvent {
    /// Index of the gate square.
    pub index: usize,
    /// Whether the player had cleared the gate once its hook finished.
    pub cleared: bool,
}

/// Result of a single turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The player had a missed turn pending and sat this one out.
    Skipped,
    /// The player rolled and (possibly) moved.
    Moved {
        roll: u8,
        from: usize,
        to: usize,
        /// Set when a gate hook fired and halted the move.
        gate: Option<GateEvent>,
    },
}

impl TurnOutcome {
    /// Final position, if the player rolled.
    #[must_use]
    pub fn destination(&self) -> Option<usize> {
        match self {
            TurnOutcome::Skipped => None,
            TurnOutcome::Moved { to, .. } => Some(*to),
        }
    }

    /// Did a gate stop this turn?
    #[must_use]
    pub fn halted_at_gate(&self) -> bool {
        matches!(self, TurnOutcome::Moved { gate: Some(_), .. })
    }
}

/// A recorded turn with metadata for history tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Round number (starts at 1).
    pub round: u32,
    /// The player whose turn it was.
    pub player: PlayerId,
    pub outcome: TurnOutcome,
}

impl TurnRecord {
    #[must_use]
    pub fn new(round: u32, player: PlayerId, outcome: TurnOutcome) -> Self {
        Self {
            round,
            player,
            outcome,
        }
    }
}
