//! Core building blocks: players, dice, random sources, configuration, errors.
//!
//! Nothing here knows the Knock Out! rules; `rules` and `games` build on it.

pub mod config;
pub mod dice;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, MAX_DIE_SIDES, MAX_PLAYERS};
pub use dice::Die;
pub use error::GameError;
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, RandomSource, SequenceSource};
