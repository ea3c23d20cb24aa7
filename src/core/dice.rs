//! Dice backed by a pluggable random source.

use super::config::MAX_DIE_SIDES;
use super::error::GameError;
use super::rng::RandomSource;

/// A die with a fixed number of sides.
///
/// The side count never changes after construction. Each roll takes the
/// source's next value modulo `sides` and adds one, so rolls land in
/// `1..=sides`.
#[derive(Debug)]
pub struct Die {
    sides: u32,
    source: Box<dyn RandomSource>,
}

impl Die {
    /// Create a die with `sides` faces drawing from `source`.
    pub fn new(sides: u32, source: Box<dyn RandomSource>) -> Result<Self, GameError> {
        if sides == 0 {
            return Err(GameError::InvalidDieSides);
        }
        if sides > MAX_DIE_SIDES {
            return Err(GameError::DieTooLarge {
                sides,
                max: MAX_DIE_SIDES,
            });
        }
        Ok(Self { sides, source })
    }

    /// Number of faces.
    #[must_use]
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Roll the die.
    pub fn roll(&mut self) -> u32 {
        let face = self.source.next_value() % self.sides + 1;
        tracing::trace!(sides = self.sides, face, "die rolled");
        face
    }
}
