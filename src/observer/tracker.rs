//! Observer that reports game progress through `tracing`.

use tracing::info;

use super::GameObserver;
use crate::rules::{GameDescriptor, GameResult, GameSummary, TurnOutcome, TurnRecord};

/// Logs each lifecycle notification at `info` level.
///
/// Turn numbers come from the records themselves; the tracker keeps only
/// the name of the game it is following.
#[derive(Clone, Debug, Default)]
pub struct GameTracker {
    game: Option<String>,
}

impl GameTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the game most recently started.
    #[must_use]
    pub fn current_game(&self) -> Option<&str> {
        self.game.as_deref()
    }
}

impl GameObserver for GameTracker {
    fn game_did_start(&mut self, game: &GameDescriptor) {
        info!(players = game.player_count, "started a new game of {}", game.name);
        info!("the game is using {} {}-sided dice", game.dice_count, game.die_sides);
        self.game = Some(game.name.clone());
    }

    fn on_turn(&mut self, turn: &TurnRecord) {
        match turn.outcome {
            TurnOutcome::Scored { score } => {
                info!(turn = turn.turn, "{} rolled a {} (score {})", turn.player, turn.roll, score)
            }
            TurnOutcome::KnockedOut => {
                info!(turn = turn.turn, "{} is knocked out by rolling {}", turn.player, turn.roll)
            }
        }
    }

    fn game_did_end(&mut self, summary: &GameSummary) {
        match summary.result {
            GameResult::Winner(player) => {
                let score = summary
                    .standings
                    .iter()
                    .find(|s| summary.result.is_winner(s.player))
                    .map_or(0, |s| s.score);
                info!("{} has won with a score of {}", player, score);
            }
            GameResult::AllKnockedOut => info!("all players have been knocked out"),
        }
        info!("the game lasted for {} turns", summary.turns);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_remembers_game() {
        let mut tracker = GameTracker::new();
        assert!(tracker.current_game().is_none());

        tracker.game_did_start(&GameDescriptor {
            name: "Knock Out!".to_string(),
            die_sides: 6,
            dice_count: 2,
            player_count: 3,
            score_threshold: 100,
        });

        assert_eq!(tracker.current_game(), Some("Knock Out!"));
    }
}
