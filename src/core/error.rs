//! Error types for game construction and play.

use thiserror::Error;

/// Errors raised while building or running a game.
///
/// Rolling dice and applying a turn are total; every failure here is a
/// caller contract violation detected up front.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A game needs at least one player.
    #[error("a game needs at least one player")]
    NoPlayers,

    /// Player count exceeds what `PlayerId` can address.
    #[error("at most {max} players supported, got {requested}")]
    TooManyPlayers { requested: usize, max: usize },

    /// A die must have at least one side.
    #[error("a die needs at least one side")]
    InvalidDieSides,

    /// Two faces of this die could overflow a roll total.
    #[error("a die has at most {max} sides, got {sides}")]
    DieTooLarge { sides: u32, max: u32 },

    /// The winning score must be positive.
    #[error("score threshold must be positive")]
    InvalidScoreThreshold,

    /// Knock-out range is empty.
    #[error("invalid knock-out range {min}..={max}")]
    InvalidKnockOutRange { min: u32, max: u32 },

    /// Explicit knock-out numbers don't match the player count.
    #[error("expected {expected} knock-out numbers, got {actual}")]
    KnockOutCountMismatch { expected: usize, actual: usize },

    /// `play()` was called on a game that already started.
    #[error("game has already been played")]
    AlreadyPlayed,
}
