/*!
This module is the static piece catalog: the canonical shape of each of the
seven [`Tetromino`]s, and random selection of the next piece to spawn.
*/

use rand::Rng;

use crate::{Piece, Tetromino};

impl Tetromino {
    /// Returns a fresh copy of the canonical occupancy matrix of this
    /// tetromino, row `0` at the top.
    ///
    /// Shapes are rectangular rather than padded to a square, so rotating a
    /// non-square shape swaps its dimensions.
    pub fn canonical_shape(self) -> Vec<Vec<bool>> {
        let rows: &[&[u8]] = match self {
            Tetromino::I => &[&[1, 1, 1, 1]], // ▄▄▄▄
            Tetromino::O => &[&[1, 1], &[1, 1]], // ██
            Tetromino::T => &[&[0, 1, 0], &[1, 1, 1]], // ▄█▄
            Tetromino::S => &[&[0, 1, 1], &[1, 1, 0]], // ▄█▀
            Tetromino::Z => &[&[1, 1, 0], &[0, 1, 1]], // ▀█▄
            Tetromino::J => &[&[1, 0, 0], &[1, 1, 1]], // █▄▄
            Tetromino::L => &[&[0, 0, 1], &[1, 1, 1]], // ▄▄█
        };
        rows.iter()
            .map(|row| row.iter().map(|&cell| cell != 0).collect())
            .collect()
    }

    /// Selects a tetromino uniformly at random among the seven types.
    ///
    /// Each draw is independent; there is no bag/shuffle fairness guarantee.
    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        Self::VARIANTS[rng.random_range(0..=6)]
    }
}

impl Piece {
    /// Creates a piece carrying an owned copy of its tetromino's canonical
    /// shape, safe for the caller to rotate without affecting the catalog.
    pub fn new(tetromino: Tetromino) -> Self {
        Self {
            tetromino,
            shape: tetromino.canonical_shape(),
        }
    }

    /// Creates a random piece, drawn as by [`Tetromino::random_with`].
    pub fn random_with<R: Rng>(rng: &mut R) -> Self {
        Self::new(Tetromino::random_with(rng))
    }
}
