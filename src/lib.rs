//! # knockout-dice
//!
//! A small, deterministic engine for the *Knock Out!* dice game.
//!
//! ## Design Principles
//!
//! 1. **Pluggable Randomness**: Dice draw from any `RandomSource`. Seeded
//!    `GameRng` streams make every game reproducible; `SequenceSource`
//!    scripts exact rolls.
//!
//! 2. **Observers, Not Printing**: The engine reports start, every turn and
//!    the end to a `GameObserver`. Observers implement only what they need.
//!
//! 3. **Fail Fast**: Invalid setups are rejected with a `GameError` before
//!    any turn is played.
//!
//! ## Modules
//!
//! - `core`: Players, dice, random sources, configuration, errors
//! - `rules`: `DiceGame` trait, results, lifecycle and the turn rule
//! - `observer`: Observer trait plus logging and recording observers
//! - `games`: The Knock Out! engine
//!
//! ## Example
//!
//! ```
//! use knockout_dice::games::knockout::KnockOut;
//! use knockout_dice::observer::EventLog;
//! use knockout_dice::rules::DiceGame;
//!
//! let mut game = KnockOut::builder().player_count(4).build(42).unwrap();
//! let mut log = EventLog::new();
//! let result = game.play(&mut log).unwrap();
//!
//! assert_eq!(log.summary().map(|s| &s.result), Some(&result));
//! ```

pub mod core;
pub mod games;
pub mod observer;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Die, GameConfig, GameError, GameRng, Player, PlayerId, PlayerMap, RandomSource,
    SequenceSource,
};

pub use crate::rules::{
    resolve_roll, DiceGame, GameDescriptor, GamePhase, GameResult, GameSummary, Standing,
    TurnOutcome, TurnRecord,
};

pub use crate::observer::{EventLog, GameEvent, GameObserver, GameTracker};

pub use crate::games::knockout::{KnockOut, KnockOutBuilder};
