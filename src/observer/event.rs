//! Recorded game events.
//!
//! `EventLog` keeps every notification it receives as a `GameEvent`, in
//! arrival order. Events serialize with serde, so a finished log can be
//! dumped for replay or inspection.

use serde::{Deserialize, Serialize};

use super::GameObserver;
use crate::rules::{GameDescriptor, GameSummary, TurnRecord};

/// A single notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Started(GameDescriptor),
    Turn(TurnRecord),
    Ended(GameSummary),
}

/// Observer that records every notification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Turn records in order.
    pub fn turns(&self) -> impl Iterator<Item = &TurnRecord> {
        self.events.iter().filter_map(|e| match e {
            GameEvent::Turn(turn) => Some(turn),
            _ => None,
        })
    }

    /// Dice sums in order.
    #[must_use]
    pub fn rolls(&self) -> Vec<u32> {
        self.turns().map(|t| t.roll).collect()
    }

    /// The end-of-game summary, once the game has ended.
    #[must_use]
    pub fn summary(&self) -> Option<&GameSummary> {
        self.events.iter().rev().find_map(|e| match e {
            GameEvent::Ended(summary) => Some(summary),
            _ => None,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl GameObserver for EventLog {
    fn game_did_start(&mut self, game: &GameDescriptor) {
        self.events.push(GameEvent::Started(game.clone()));
    }

    fn on_turn(&mut self, turn: &TurnRecord) {
        self.events.push(GameEvent::Turn(*turn));
    }

    fn game_did_end(&mut self, summary: &GameSummary) {
        self.events.push(GameEvent::Ended(summary.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;
    use crate::rules::{GameResult, TurnOutcome};

    fn descriptor() -> GameDescriptor {
        GameDescriptor {
            name: "Test".to_string(),
            die_sides: 6,
            dice_count: 2,
            player_count: 1,
            score_threshold: 100,
        }
    }

    #[test]
    fn test_log_records_in_order() {
        let mut log = EventLog::new();
        assert!(log.is_empty());
        assert!(log.summary().is_none());

        let turn = TurnRecord {
            turn: 1,
            player: PlayerId::new(0),
            roll: 7,
            outcome: TurnOutcome::KnockedOut,
        };
        let summary = GameSummary {
            result: GameResult::AllKnockedOut,
            turns: 1,
            standings: Vec::new(),
        };

        log.game_did_start(&descriptor());
        log.on_turn(&turn);
        log.game_did_end(&summary);

        assert_eq!(log.len(), 3);
        assert_eq!(log.events()[0], GameEvent::Started(descriptor()));
        assert_eq!(log.rolls(), vec![7]);
        assert_eq!(log.summary(), Some(&summary));
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::Turn(TurnRecord {
            turn: 3,
            player: PlayerId::new(1),
            roll: 11,
            outcome: TurnOutcome::Scored { score: 30 },
        });

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
