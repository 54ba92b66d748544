//! # rust-track
//!
//! A board-game track engine: 72 squares, some of them gates that stop a
//! player until a (possibly conditional) task is done.
//!
//! ## Design Principles
//!
//! 1. **Table-Driven Board**: Every square's kind, name, arrival hook and
//!    clearing rule come from one static table. The engine never branches
//!    on a square index.
//!
//! 2. **Injected Nondeterminism**: Dice and numeric prompts are passed in.
//!    Seeded `GameRng` streams for play, scripted ones for tests.
//!
//! 3. **Open Player State**: Gates keep their progress in a named store on
//!    each player, so adding a gate never changes `Player`.
//!
//! ## Modules
//!
//! - `core`: Players, dice, RNG, configuration, errors, state, records
//! - `board`: Squares, hooks, the square table, the track
//! - `engine`: Turn engine and game builder
//! - `io`: Prompt implementations

pub mod board;
pub mod core;
pub mod engine;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    Die, GameConfig, GameRng, GameState, GateEvent, Player, PlayerId, PlayerMap,
    ScriptedDie, SetupError, TurnOutcome, TurnRecord,
};

pub use crate::board::{
    ArriveContext, ArriveHook, ClearCondition, Square, SquareKind, SquareRule, Track,
    LAST_SQUARE, TRACK_LEN,
};

pub use crate::engine::{GameBuilder, RoundReport, TurnEngine};

pub use crate::io::{LinePrompt, Prompt, ScriptedPrompt};
