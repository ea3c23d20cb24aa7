//! The per-turn rule.

use serde::{Deserialize, Serialize};

use crate::core::player::{Player, PlayerId};

/// Effect of a single turn on the player who took it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Roll added to the score; carries the new running total.
    Scored { score: u32 },
    /// Player rolled their knock-out number. Score is untouched.
    KnockedOut,
}

/// One turn as reported to observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number across the whole game.
    pub turn: u32,
    pub player: PlayerId,
    /// Sum of both dice.
    pub roll: u32,
    pub outcome: TurnOutcome,
}

/// Apply a roll to a player.
///
/// Rolling the knock-out number eliminates the player without scoring;
/// any other roll is added to their score. Never both.
pub fn resolve_roll(player: &mut Player, roll: u32) -> TurnOutcome {
    if roll == player.knock_out_number() {
        player.knock_out();
        TurnOutcome::KnockedOut
    } else {
        TurnOutcome::Scored {
            score: player.add_score(roll),
        }
    }
}
