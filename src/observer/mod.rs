//! Observers receive game lifecycle notifications.
//!
//! Every method has an empty default, so an observer only implements the
//! notifications it cares about. `()` is the silent observer.
//!
//! ## Example
//!
//! ```
//! use knockout_dice::observer::GameObserver;
//! use knockout_dice::rules::TurnRecord;
//!
//! #[derive(Default)]
//! struct RollCounter {
//!     rolls: u32,
//! }
//!
//! impl GameObserver for RollCounter {
//!     fn on_turn(&mut self, _turn: &TurnRecord) {
//!         self.rolls += 1;
//!     }
//! }
//! ```

pub mod event;
pub mod tracker;

pub use event::{EventLog, GameEvent};
pub use tracker::GameTracker;

use crate::rules::{GameDescriptor, GameSummary, TurnRecord};

/// Sink for game lifecycle notifications.
///
/// Called synchronously and in order: one `game_did_start`, one `on_turn`
/// per turn, one `game_did_end`.
pub trait GameObserver {
    /// The game is about to take its first turn.
    fn game_did_start(&mut self, _game: &GameDescriptor) {}

    /// A player has just taken a turn.
    fn on_turn(&mut self, _turn: &TurnRecord) {}

    /// The game reached a terminal condition.
    fn game_did_end(&mut self, _summary: &GameSummary) {}
}

impl GameObserver for () {}
