//! Game configuration.
//!
//! `GameConfig` holds the construction parameters of a Knock Out! game:
//! - how many players take part
//! - how many sides each of the two dice has
//! - the score that wins the game
//! - the range knock-out numbers are drawn from
//!
//! Defaults follow the classic rules: 6-sided dice, 100 points to win and
//! knock-out numbers between 6 and 9.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Largest supported player count (`PlayerId` is a `u8`).
pub const MAX_PLAYERS: usize = 255;

/// Largest supported die; the sum of two faces must fit in a `u32`.
pub const MAX_DIE_SIDES: u32 = u32::MAX / 2;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (1-255).
    pub player_count: usize,

    /// Sides on each die.
    pub die_sides: u32,

    /// Score that ends the game with a winner.
    pub score_threshold: u32,

    /// Smallest knock-out number a player can be assigned.
    pub knock_out_min: u32,

    /// Largest knock-out number a player can be assigned.
    pub knock_out_max: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            die_sides: 6,
            score_threshold: 100,
            knock_out_min: 6,
            knock_out_max: 9,
        }
    }
}

impl GameConfig {
    /// Create a classic configuration for `player_count` players.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Set the number of sides on each die.
    #[must_use]
    pub fn with_die_sides(mut self, sides: u32) -> Self {
        self.die_sides = sides;
        self
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_score_threshold(mut self, threshold: u32) -> Self {
        self.score_threshold = threshold;
        self
    }

    /// Set the inclusive range knock-out numbers are drawn from.
    #[must_use]
    pub fn with_knock_out_range(mut self, min: u32, max: u32) -> Self {
        self.knock_out_min = min;
        self.knock_out_max = max;
        self
    }

    /// Check every parameter, returning the first violation.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.player_count == 0 {
            return Err(GameError::NoPlayers);
        }
        if self.player_count > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers {
                requested: self.player_count,
                max: MAX_PLAYERS,
            });
        }
        if self.die_sides == 0 {
            return Err(GameError::InvalidDieSides);
        }
        if self.die_sides > MAX_DIE_SIDES {
            return Err(GameError::DieTooLarge {
                sides: self.die_sides,
                max: MAX_DIE_SIDES,
            });
        }
        if self.score_threshold == 0 {
            return Err(GameError::InvalidScoreThreshold);
        }
        if self.knock_out_min > self.knock_out_max {
            return Err(GameError::InvalidKnockOutRange {
                min: self.knock_out_min,
                max: self.knock_out_max,
            });
        }
        Ok(())
    }
}
