//! The movement and turn engine.
//!
//! - `TurnEngine`: step, turn, and round logic over a `GameState`
//! - `GameBuilder`: assembles players, roll order, die, and prompt
//! - `RoundReport`: per-round summary for drivers

pub mod builder;
pub mod turn;

pub use builder::{GameBuilder, DIE_STREAM, GUESS_STREAM, ORDER_STREAM};
pub use turn::{RoundReport, TurnEngine};
