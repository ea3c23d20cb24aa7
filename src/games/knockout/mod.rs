//! Knock Out! dice game.
//!
//! - Each player has a knock-out number, 6 to 9 by default
//! - On their turn a player throws both dice and adds the sum to their score
//! - Rolling your own knock-out number knocks you out instead
//! - First player to 100 points wins; if everyone is knocked out, nobody does
//!
//! Supports 1-255 players.

mod game;

pub use game::{KnockOut, KnockOutBuilder, DICE_PER_TURN, GAME_NAME};
