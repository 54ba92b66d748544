//! Core types: players, dice, RNG, configuration, errors, state, records.
//!
//! Everything here is board-agnostic except `GameState`, which owns the
//! track alongside the roster.

pub mod config;
pub mod dice;
pub mod error;
pub mod player;
pub mod record;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use dice::{Die, ScriptedDie, DIE_MAX, DIE_MIN};
pub use error::SetupError;
pub use player::{Player, PlayerId, PlayerMap};
pub use record::{GateEvent, TurnOutcome, TurnRecord};
pub use rng::GameRng;
pub use state::GameState;
