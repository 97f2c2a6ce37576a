/*!
This module handles creation / initialization / building of [`Game`]s.
*/

use rand_chacha::rand_core::SeedableRng;

use super::*;

/// This builder exposes the ability to configure a new [`Game`].
///
/// Generally speaking, you'll first call [`GameBuilder::new`] or
/// [`Game::builder`], then optionally set a seed, then call
/// [`GameBuilder::build`]. The builder is not used up and can be re-used to
/// initialize more [`Game`]s.
///
/// # Reproducibility
///
/// Two games built with the same seed spawn the same sequence of pieces.
/// Without an explicit seed, one is drawn from thread entropy.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameBuilder {
    /// The value to seed the game's PRNG with.
    pub seed: Option<u64>,
}

impl GameBuilder {
    /// Creates a blank new template representing a yet-to-be-started [`Game`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The value to seed the game's PRNG with.
    pub fn seed(&mut self, x: u64) -> &mut Self {
        self.seed = Some(x);
        self
    }

    /// Creates a [`Game`] with the information specified by `self`.
    pub fn build(&self) -> Game {
        let seed = self.seed.unwrap_or_else(rand::random);
        Game {
            seed,
            rng: GameRng::seed_from_u64(seed),
            state: GameState::initial(),
        }
    }
}
