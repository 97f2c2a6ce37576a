/*!
This module handles what happens when a [`Game`] is driven: command dispatch,
the gravity step, landing, spawn sequencing and game over.

Every entry point is a synchronous, bounded-time computation that takes the
state from one consistent snapshot to the next. There are no error returns;
an input that cannot be honored simply leaves the state untouched.
*/

use std::time::Duration;

use rand_chacha::rand_core::SeedableRng;

use super::*;

impl Game {
    /// Applies a single input command to the game.
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::MoveLeft => self.shift(-1),
            Command::MoveRight => self.shift(1),
            Command::Rotate => self.rotate(),
            Command::SoftDrop => self.move_down(),
            Command::HardDrop => self.hard_drop(),
            Command::Start => self.start(),
            Command::Pause => self.toggle_pause(),
            Command::Reset => self.reset(),
        }
    }

    /// Advances the game by one gravity step.
    ///
    /// This is exactly [`Command::SoftDrop`]; the frontend calls it whenever
    /// the interval given by [`Game::gravity_interval`] elapses.
    pub fn tick(&mut self) {
        self.move_down();
    }

    /// The current delay between two gravity steps, or `None` while the
    /// gravity timer should be disarmed (paused or game over).
    ///
    /// The delay shrinks by 100ms per level and bottoms out at 100ms.
    /// Frontends re-read this after every transition, which re-arms their
    /// timer whenever the level, pause or game-over state changed.
    pub fn gravity_interval(&self) -> Option<Duration> {
        if self.state.paused || self.state.game_over {
            return None;
        }
        let millis = 1000u64
            .saturating_sub(u64::from(self.state.level) * 100)
            .max(100);
        Some(Duration::from_millis(millis))
    }

    /// The active piece, unless play commands are currently ignored.
    fn piece_in_play(&self) -> Option<&Piece> {
        if self.state.paused || self.state.game_over {
            return None;
        }
        self.state.piece.as_ref()
    }

    fn shift(&mut self, dx: i32) {
        let Some(piece) = self.piece_in_play() else {
            return;
        };
        let target = Position {
            x: self.state.position.x + dx,
            ..self.state.position
        };
        if piece.fits(&self.state.board, target) {
            self.state.position = target;
        }
    }

    fn rotate(&mut self) {
        let Some(piece) = self.piece_in_play() else {
            return;
        };
        let rotated = piece.rotated();
        // No wall kicks: a rotation that does not fit in place is rejected
        // and the original shape is kept.
        if rotated.fits(&self.state.board, self.state.position) {
            self.state.piece = Some(rotated);
        }
    }

    fn move_down(&mut self) {
        let Some(piece) = self.piece_in_play() else {
            return;
        };
        let below = Position {
            y: self.state.position.y + 1,
            ..self.state.position
        };
        if piece.fits(&self.state.board, below) {
            self.state.position = below;
        } else {
            // Blocked below means the piece has landed; this is the normal
            // end of a descent, not a failure.
            self.lock_piece();
        }
    }

    fn hard_drop(&mut self) {
        let Some(piece) = self.piece_in_play() else {
            return;
        };
        let mut resting = self.state.position;
        loop {
            let below = Position {
                y: resting.y + 1,
                ..resting
            };
            if !piece.fits(&self.state.board, below) {
                break;
            }
            resting = below;
        }
        self.state.position = resting;
        self.lock_piece();
    }

    /// Merges the active piece into the board, clears lines, scores them, and
    /// hands over to spawn sequencing.
    fn lock_piece(&mut self) {
        let Some(piece) = self.state.piece.take() else {
            return;
        };
        let merged = merge_piece(&self.state.board, &piece, self.state.position);
        let (swept, lines_cleared) = clear_lines(&merged);
        self.state.board = swept;
        self.state.score += score_for(lines_cleared, self.state.level);
        self.state.level = self.state.score / 1000;
        self.spawn_if_absent();
    }

    /// Introduces a new random piece at the spawn position whenever the piece
    /// slot is empty and the game is running.
    ///
    /// A blocked spawn is the terminal condition: the game flips to game over
    /// (pause forced on) and no piece is placed.
    fn spawn_if_absent(&mut self) {
        if self.state.piece.is_some() || self.state.paused || self.state.game_over {
            return;
        }
        let piece = Piece::random_with(&mut self.rng);
        if piece.fits(&self.state.board, Self::SPAWN_POSITION) {
            self.state.piece = Some(piece);
            self.state.position = Self::SPAWN_POSITION;
        } else {
            self.state.game_over = true;
            self.state.paused = true;
        }
    }

    fn start(&mut self) {
        if self.state.game_over || !self.state.paused {
            return;
        }
        self.state.paused = false;
        self.spawn_if_absent();
    }

    fn toggle_pause(&mut self) {
        if self.state.game_over {
            return;
        }
        self.state.paused = !self.state.paused;
        // Unpausing behaves like a start: make sure a piece is in play.
        self.spawn_if_absent();
    }

    /// Unconditionally replaces the state with the initial one, reseeding the
    /// PRNG so a seeded round replays the same piece sequence.
    fn reset(&mut self) {
        self.state = GameState::initial();
        self.rng = GameRng::seed_from_u64(self.seed);
    }
}
