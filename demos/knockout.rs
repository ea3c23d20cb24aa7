//! Plays one game of Knock Out! with five players and logs it.
//!
//! Run with `cargo run --example knockout [seed]`.

use knockout_dice::games::knockout::KnockOut;
use knockout_dice::observer::GameTracker;
use knockout_dice::rules::DiceGame;
use knockout_dice::GameError;

fn main() -> Result<(), GameError> {
    tracing_subscriber::fmt().with_target(false).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let mut game = KnockOut::builder().player_count(5).build(seed)?;
    let mut tracker = GameTracker::new();
    game.play(&mut tracker)?;

    for (id, player) in game.players().iter() {
        let status = if player.is_knocked_out() { "knocked out" } else { "standing" };
        tracing::info!(
            "{}: score {}, knock-out number {}, {}",
            id,
            player.score(),
            player.knock_out_number(),
            status
        );
    }

    Ok(())
}
