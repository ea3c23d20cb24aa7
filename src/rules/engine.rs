//! Dice game trait and lifecycle types.
//!
//! Games implement `DiceGame` to define:
//! - A descriptor observers receive when play begins
//! - How a full game is played to completion
//!
//! The observer layer only ever sees descriptors and records, never the
//! game itself.

use serde::{Deserialize, Serialize};

use crate::core::error::GameError;
use crate::core::player::{Player, PlayerId};
use crate::observer::GameObserver;

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// First player whose score reached the threshold.
    Winner(PlayerId),
    /// Every player was knocked out; nobody wins.
    AllKnockedOut,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::AllKnockedOut => None,
        }
    }
}

/// Lifecycle of a game: NotStarted → Running → Ended.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    NotStarted,
    Running,
    /// Terminal.
    Ended(GameResult),
}

impl GamePhase {
    #[must_use]
    pub fn is_ended(&self) -> bool {
        matches!(self, GamePhase::Ended(_))
    }
}

/// What observers learn about a game when it starts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDescriptor {
    /// Human-readable game name.
    pub name: String,
    /// Sides on each die.
    pub die_sides: u32,
    /// Dice thrown per turn.
    pub dice_count: u32,
    pub player_count: usize,
    /// Score that wins the game.
    pub score_threshold: u32,
}

/// A player's final position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub score: u32,
    pub knocked_out: bool,
}

impl From<&Player> for Standing {
    fn from(player: &Player) -> Self {
        Self {
            player: player.id(),
            score: player.score(),
            knocked_out: player.is_knocked_out(),
        }
    }
}

/// What observers learn about a game when it ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub result: GameResult,
    /// Total turns taken across all players.
    pub turns: u32,
    /// Final standings in player id order.
    pub standings: Vec<Standing>,
}

/// A dice game that runs to completion, reporting to an observer.
///
/// ## Implementation Notes
///
/// - `play` runs synchronously on the caller's thread
/// - Notifications arrive in order: start, one per turn, end
/// - A game plays once; later calls return `GameError::AlreadyPlayed`
pub trait DiceGame {
    /// Describe the game for observers.
    fn descriptor(&self) -> GameDescriptor;

    /// Play the game to completion.
    fn play(&mut self, observer: &mut dyn GameObserver) -> Result<GameResult, GameError>;
}
