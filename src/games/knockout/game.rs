//! Knock Out! game engine.

use tracing::{debug, info};

use crate::core::{
    Die, GameConfig, GameError, GameRng, Player, PlayerId, PlayerMap, RandomSource,
};
use crate::observer::GameObserver;
use crate::rules::{
    resolve_roll, DiceGame, GameDescriptor, GamePhase, GameResult, GameSummary, Standing,
    TurnRecord,
};

/// Display name reported to observers.
pub const GAME_NAME: &str = "Knock Out!";

/// Dice thrown on every turn.
pub const DICE_PER_TURN: u32 = 2;

/// A game of Knock Out!.
///
/// Owns its players, both dice, the turn counter and the lifecycle phase.
/// Build one with `KnockOutBuilder`, then call `play` once.
#[derive(Debug)]
pub struct KnockOut {
    config: GameConfig,
    players: PlayerMap<Player>,
    dice: [Die; 2],
    turns: u32,
    phase: GamePhase,
}

/// Builder for creating a KnockOut game.
#[derive(Clone, Debug, Default)]
pub struct KnockOutBuilder {
    config: GameConfig,
    knock_out_numbers: Option<Vec<u32>>,
}

impl KnockOutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn die_sides(mut self, sides: u32) -> Self {
        self.config.die_sides = sides;
        self
    }

    pub fn score_threshold(mut self, threshold: u32) -> Self {
        self.config.score_threshold = threshold;
        self
    }

    pub fn knock_out_range(mut self, min: u32, max: u32) -> Self {
        self.config = self.config.with_knock_out_range(min, max);
        self
    }

    /// Assign knock-out numbers explicitly, one per player in id order.
    ///
    /// Values outside the configured range are allowed; an unreachable
    /// number means that player can never be knocked out.
    pub fn knock_out_numbers(mut self, numbers: Vec<u32>) -> Self {
        self.knock_out_numbers = Some(numbers);
        self
    }

    /// Build the game with both dice fed by forks of a seeded RNG.
    pub fn build(self, seed: u64) -> Result<KnockOut, GameError> {
        self.config.validate()?;
        let mut rng = GameRng::new(seed);
        let first = Box::new(rng.fork());
        let second = Box::new(rng.fork());
        self.assemble(&mut rng, first, second)
    }

    /// Build the game with caller-supplied dice sources.
    ///
    /// `seed` is only used to draw knock-out numbers that weren't set
    /// explicitly.
    pub fn build_with_sources(
        self,
        seed: u64,
        first: Box<dyn RandomSource>,
        second: Box<dyn RandomSource>,
    ) -> Result<KnockOut, GameError> {
        self.config.validate()?;
        let mut rng = GameRng::new(seed);
        self.assemble(&mut rng, first, second)
    }

    fn assemble(
        self,
        rng: &mut GameRng,
        first: Box<dyn RandomSource>,
        second: Box<dyn RandomSource>,
    ) -> Result<KnockOut, GameError> {
        let config = self.config;
        let player_count = config.player_count;

        let players = match self.knock_out_numbers {
            Some(numbers) => {
                if numbers.len() != player_count {
                    return Err(GameError::KnockOutCountMismatch {
                        expected: player_count,
                        actual: numbers.len(),
                    });
                }
                PlayerMap::new(player_count, |id| Player::new(id, numbers[id.index()]))
            }
            None => {
                let range = config.knock_out_min..=config.knock_out_max;
                PlayerMap::new(player_count, |id| Player::new(id, rng.gen_range(range.clone())))
            }
        };

        let dice = [
            Die::new(config.die_sides, first)?,
            Die::new(config.die_sides, second)?,
        ];

        debug!(
            players = player_count,
            die_sides = config.die_sides,
            score_threshold = config.score_threshold,
            "knock out game built"
        );

        Ok(KnockOut {
            config,
            players,
            dice,
            turns: 0,
            phase: GamePhase::NotStarted,
        })
    }
}

impl KnockOut {
    /// Start building a game.
    pub fn builder() -> KnockOutBuilder {
        KnockOutBuilder::new()
    }

    /// Build a game from a configuration and seed.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        KnockOutBuilder::new().config(config).build(seed)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn phase(&self) -> &GamePhase {
        &self.phase
    }

    /// Turns taken so far.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// The result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        match &self.phase {
            GamePhase::Ended(result) => Some(result),
            _ => None,
        }
    }

    /// Players still taking turns, in id order.
    pub fn active_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(|(_, p)| p.is_active())
            .map(|(id, _)| id)
    }

    fn roll_dice(&mut self) -> u32 {
        self.dice.iter_mut().map(Die::roll).sum()
    }

    /// Play one round. Returns the result as soon as any turn ends the game.
    fn play_round(&mut self, observer: &mut dyn GameObserver) -> Option<GameResult> {
        // Only the current player changes during a turn, so the snapshot
        // stays accurate for the rest of the round.
        let order: Vec<PlayerId> = self.active_players().collect();
        if order.is_empty() {
            return Some(GameResult::AllKnockedOut);
        }

        for player in order {
            if let Some(result) = self.take_turn(player, observer) {
                return Some(result);
            }
        }
        None
    }

    fn take_turn(&mut self, player: PlayerId, observer: &mut dyn GameObserver) -> Option<GameResult> {
        let roll = self.roll_dice();
        let outcome = resolve_roll(&mut self.players[player], roll);
        self.turns += 1;

        debug!(turn = self.turns, %player, roll, ?outcome, "turn taken");
        observer.on_turn(&TurnRecord {
            turn: self.turns,
            player,
            roll,
            outcome,
        });

        self.terminal_after(player)
    }

    /// Check the end conditions after `player`'s turn.
    fn terminal_after(&self, player: PlayerId) -> Option<GameResult> {
        if self.players[player].score() >= self.config.score_threshold {
            return Some(GameResult::Winner(player));
        }
        if self.players.values().all(Player::is_knocked_out) {
            return Some(GameResult::AllKnockedOut);
        }
        None
    }

    fn summary(&self, result: GameResult) -> GameSummary {
        GameSummary {
            result,
            turns: self.turns,
            standings: self.players.values().map(Standing::from).collect(),
        }
    }
}

impl DiceGame for KnockOut {
    fn descriptor(&self) -> GameDescriptor {
        GameDescriptor {
            name: GAME_NAME.to_string(),
            die_sides: self.config.die_sides,
            dice_count: DICE_PER_TURN,
            player_count: self.players.player_count(),
            score_threshold: self.config.score_threshold,
        }
    }

    fn play(&mut self, observer: &mut dyn GameObserver) -> Result<GameResult, GameError> {
        if self.phase != GamePhase::NotStarted {
            return Err(GameError::AlreadyPlayed);
        }
        self.phase = GamePhase::Running;

        let descriptor = self.descriptor();
        info!(
            players = descriptor.player_count,
            die_sides = descriptor.die_sides,
            "game started"
        );
        observer.game_did_start(&descriptor);

        let result = loop {
            if let Some(result) = self.play_round(observer) {
                break result;
            }
        };

        self.phase = GamePhase::Ended(result.clone());
        info!(turns = self.turns, ?result, "game ended");
        observer.game_did_end(&self.summary(result.clone()));

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SequenceSource;
    use crate::observer::EventLog;
    use crate::rules::TurnOutcome;

    fn scripted(first: &[u32], second: &[u32]) -> (Box<dyn RandomSource>, Box<dyn RandomSource>) {
        (
            Box::new(SequenceSource::from_faces(first)),
            Box::new(SequenceSource::from_faces(second)),
        )
    }

    #[test]
    fn test_build_defaults() {
        let game = KnockOut::builder().player_count(5).build(42).unwrap();

        assert_eq!(game.players().player_count(), 5);
        assert_eq!(game.phase(), &GamePhase::NotStarted);
        assert_eq!(game.turns(), 0);
        assert!(game.result().is_none());
        for (id, player) in game.players().iter() {
            assert_eq!(player.id(), id);
            assert!((6..=9).contains(&player.knock_out_number()));
            assert_eq!(player.score(), 0);
        }
    }

    #[test]
    fn test_build_rejects_zero_players() {
        let err = KnockOut::builder().player_count(0).build(1).unwrap_err();
        assert_eq!(err, GameError::NoPlayers);
    }

    #[test]
    fn test_build_rejects_mismatched_knock_out_numbers() {
        let err = KnockOut::builder()
            .player_count(2)
            .knock_out_numbers(vec![7])
            .build(1)
            .unwrap_err();
        assert_eq!(err, GameError::KnockOutCountMismatch { expected: 2, actual: 1 });
    }

    #[test]
    fn test_descriptor() {
        let game = KnockOut::builder()
            .player_count(3)
            .die_sides(8)
            .score_threshold(50)
            .build(1)
            .unwrap();

        let descriptor = game.descriptor();
        assert_eq!(descriptor.name, GAME_NAME);
        assert_eq!(descriptor.die_sides, 8);
        assert_eq!(descriptor.dice_count, 2);
        assert_eq!(descriptor.player_count, 3);
        assert_eq!(descriptor.score_threshold, 50);
    }

    #[test]
    fn test_knocked_out_player_is_skipped() {
        let (first, second) = scripted(&[3, 5], &[4, 5]);
        let mut game = KnockOut::builder()
            .player_count(2)
            .knock_out_numbers(vec![7, 13])
            .score_threshold(20)
            .build_with_sources(0, first, second)
            .unwrap();

        let mut log = EventLog::new();
        let result = game.play(&mut log).unwrap();

        // p0 rolls 7 and is out; p1 rolls 10, 7, 10 alone.
        let players: Vec<_> = log.turns().map(|t| t.player.index()).collect();
        assert_eq!(players, vec![0, 1, 1, 1]);
        assert_eq!(result, GameResult::Winner(PlayerId::new(1)));
        assert_eq!(game.player(PlayerId::new(1)).score(), 27);
    }

    #[test]
    fn test_turn_counter_matches_records() {
        let mut game = KnockOut::builder().player_count(4).build(9).unwrap();
        let mut log = EventLog::new();
        game.play(&mut log).unwrap();

        let numbers: Vec<_> = log.turns().map(|t| t.turn).collect();
        let expected: Vec<_> = (1..=game.turns()).collect();
        assert_eq!(numbers, expected);
    }

    #[test]
    fn test_knock_out_record_keeps_score() {
        let (first, second) = scripted(&[6, 3], &[6, 4]);
        let mut game = KnockOut::builder()
            .player_count(1)
            .knock_out_numbers(vec![7])
            .build_with_sources(0, first, second)
            .unwrap();

        let mut log = EventLog::new();
        game.play(&mut log).unwrap();

        let turns: Vec<_> = log.turns().copied().collect();
        assert_eq!(turns[0].outcome, TurnOutcome::Scored { score: 12 });
        assert_eq!(turns[1].outcome, TurnOutcome::KnockedOut);
        assert_eq!(game.player(PlayerId::new(0)).score(), 12);
    }

    #[test]
    fn test_play_twice_fails() {
        let mut game = KnockOut::builder().player_count(2).build(5).unwrap();
        game.play(&mut ()).unwrap();

        let turns = game.turns();
        assert_eq!(game.play(&mut ()), Err(GameError::AlreadyPlayed));
        assert_eq!(game.turns(), turns);
        assert!(game.phase().is_ended());
    }
}
