//! Game rules: the `DiceGame` trait, lifecycle types and the turn rule.
//!
//! Games implement `DiceGame` to define how a full game is played. The
//! Knock Out! turn rule lives in `resolve_roll` so it can be checked on its
//! own.

pub mod engine;
pub mod turn;

pub use engine::{DiceGame, GameDescriptor, GamePhase, GameResult, GameSummary, Standing};
pub use turn::{resolve_roll, TurnOutcome, TurnRecord};
