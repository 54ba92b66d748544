//! The board: squares, the fixed square table, and the track.
//!
//! ## Key Types
//!
//! - `Square`: one cell, gate or not, with its visitor set
//! - `SquareRule`: static kind/name/hook/clearing description
//! - `Track`: the 72 squares in order
//! - `ArriveContext` / `ArriveHook`: what a square does when landed on

pub mod catalog;
pub mod hooks;
pub mod square;
pub mod track;

pub use catalog::{SQUARES, TRACK_LEN};
pub use hooks::{ArriveContext, ArriveHook, ClearCondition};
pub use square::{Square, SquareKind, SquareRule};
pub use track::{Track, GOLD_SQUARES, LAST_SQUARE, SILVER_SQUARES};
