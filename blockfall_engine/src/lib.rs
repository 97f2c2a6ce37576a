/*!
# Blockfall Engine

`blockfall_engine` is the game-state engine of a single-player falling-block
puzzle game: piece representation, movement/rotation validation, collision
detection, line clearing, scoring and the command-driven state machine.

The engine performs no I/O and owns no timers. A frontend drives it with
[`Command`]s and a periodic call to [`Game::tick`], and reads back a
[`Snapshot`] to render after every transition.

# Examples

```
use blockfall_engine::{Command, Game};

// A fresh game starts paused with an empty board.
let mut game = Game::builder().seed(42).build();

// Waking the game up spawns the first piece at the top of the board.
game.handle(Command::Start);
assert!(game.state().piece.is_some());

// Gravity ticks and player input go through the same transition rules.
game.tick();
game.handle(Command::MoveLeft);

// Read most recent game state; this is how a UI knows what to render.
let snapshot = game.snapshot();
assert_eq!(snapshot.score, 0);
```
*/

#![warn(missing_docs)]

mod catalog;
mod game_builder;
mod game_update;
mod placement;

use std::num::NonZeroU8;

use rand_chacha::ChaCha12Rng;

pub use game_builder::GameBuilder;
pub use placement::{clear_lines, empty_board, merge_piece, score_for};

/// Abstract identifier for which type of tile occupies a cell in the grid.
///
/// There is one id per [`Tetromino`] family; a frontend resolves ids to
/// display colors via its palette.
pub type TileTypeID = NonZeroU8;
/// The type of horizontal lines of the playing grid.
pub type Line = [Option<TileTypeID>; Game::WIDTH];
/// The type of the entire two-dimensional playing grid, indexed `[row][column]`
/// starting in the top left.
pub type Board = [Line; Game::HEIGHT];

/// The internal RNG used by a game.
pub type GameRng = ChaCha12Rng;

/// Represents one of the seven "Tetrominos";
///
/// A *tetromino* is a two-dimensional, geometric shape made by
/// connecting four squares (orthogonally / along the edges).
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tetromino {
    /// 'I'-Tetromino. Four squares connected as one straight line; `▄▄▄▄`.
    I = 0,
    /// 'O'-Tetromino. Four squares connected as one big square; `██`.
    O = 1,
    /// 'T'-Tetromino. Four squares connected in a 'T'-junction shape; `▄█▄`.
    T = 2,
    /// 'S'-Tetromino. Four squares connected in an 'S'-snaking manner; `▄█▀`.
    S = 3,
    /// 'Z'-Tetromino. Four squares connected in a 'Z'-snaking manner; `▀█▄`.
    Z = 4,
    /// 'J'-Tetromino. Four squares connected in a 'J'-shape; `█▄▄`.
    J = 5,
    /// 'L'-Tetromino. Four squares connected in an 'L'-shape; `▄▄█`.
    L = 6,
}

/// An active tetromino in play: its type tag and its current occupancy matrix.
///
/// The shape is a binary matrix relative to the piece origin, row `0` at the
/// top. It starts out as the catalog's canonical shape for the tetromino and
/// changes only through [`Piece::rotated`]. Invariant: at least one cell of
/// the shape is filled, and all rows have equal width.
#[derive(Eq, PartialEq, Clone, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    /// Type of tetromino the piece is.
    pub tetromino: Tetromino,
    /// Which cells the piece occupies, relative to its origin.
    pub shape: Vec<Vec<bool>>,
}

/// Offset of a piece's shape origin within the board's coordinate space.
///
/// `y` may be negative while a piece pokes out above the visible board;
/// placement rules only constrain the *filled* cells of a shape.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Column of the shape origin.
    pub x: i32,
    /// Row of the shape origin.
    pub y: i32,
}

/// A discrete input to the game state machine.
///
/// Commands never fail: an input that cannot be honored (blocked move,
/// blocked rotation, wrong phase) is ignored without any state change.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Shift the active piece one column to the left.
    MoveLeft,
    /// Shift the active piece one column to the right.
    MoveRight,
    /// Rotate the active piece 90° clockwise, keeping it as-is if the rotated
    /// shape does not fit (no wall kicks).
    Rotate,
    /// Drop the active piece down by one row, locking it onto the board if it
    /// cannot move further. Identical to one gravity tick.
    SoftDrop,
    /// Instantly drop the active piece to its lowest valid resting position
    /// and lock it there.
    HardDrop,
    /// Leave the initial/paused state and start play.
    Start,
    /// Toggle pause. While paused, gravity stops and play commands are
    /// ignored.
    Pause,
    /// Discard everything and return to the freshly-constructed initial
    /// state. The only command honored after a game over.
    Reset,
}

/// Struct storing the game state that changes over the course of play.
#[derive(Eq, PartialEq, Clone, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// The main playing grid storing empty (`None`) and filled, locked tiles.
    pub board: Board,
    /// The piece currently in play, if any.
    pub piece: Option<Piece>,
    /// Where the active piece's shape origin currently is.
    pub position: Position,
    /// The current total score the player has achieved in this round of play.
    pub score: u32,
    /// Difficulty tier, derived from score; drives the gravity speed ramp.
    pub level: u32,
    /// Whether the game is irreversibly over (except for [`Command::Reset`]).
    pub game_over: bool,
    /// Whether play is suspended.
    pub paused: bool,
}

/// A read-only payload handed to the presentation layer after a transition.
///
/// The grid is the board with the active piece's cells already composited in,
/// so a renderer needs no knowledge of pieces or positions.
#[derive(Eq, PartialEq, Clone, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Board cells overlaid with the active piece's cells.
    pub grid: Board,
    /// Current score.
    pub score: u32,
    /// Current level.
    pub level: u32,
    /// Whether the game has ended.
    pub game_over: bool,
    /// Whether play is suspended.
    pub paused: bool,
}

/// Main game struct representing a round of play.
#[derive(Clone, Debug)]
pub struct Game {
    seed: u64,
    rng: GameRng,
    state: GameState,
}

impl Tetromino {
    /// All `Tetromino` enum variants in order.
    ///
    /// Note that `Tetromino::VARIANTS[t as usize] == t` always holds.
    pub const VARIANTS: [Self; 7] = {
        use Tetromino::*;
        [I, O, T, S, Z, J, L]
    };

    /// Returns the convened-on tile id corresponding to the given tetromino.
    pub const fn tile_type_id(self) -> TileTypeID {
        use Tetromino::*;
        let id = match self {
            I => 1,
            O => 2,
            T => 3,
            S => 4,
            Z => 5,
            J => 6,
            L => 7,
        };
        // SAFETY: Ye, `id > 0`.
        unsafe { NonZeroU8::new_unchecked(id) }
    }
}

impl GameState {
    /// The state every game begins in: paused, empty board, no piece yet.
    pub fn initial() -> Self {
        Self {
            board: empty_board(),
            piece: None,
            position: Game::SPAWN_POSITION,
            score: 0,
            level: 0,
            game_over: false,
            paused: true,
        }
    }
}

impl Game {
    /// The game field width.
    pub const WIDTH: usize = 10;
    /// The game field height.
    pub const HEIGHT: usize = 20;
    /// Where every new piece's shape origin is placed.
    pub const SPAWN_POSITION: Position = Position { x: 3, y: 0 };

    /// Creates a blank new template representing a yet-to-be-started [`Game`]
    /// ready for configuration.
    pub fn builder() -> GameBuilder {
        GameBuilder::default()
    }

    /// Read accessor for the current game state.
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The value the game's PRNG was seeded with.
    ///
    /// Entering the same seed again replays the same sequence of pieces.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Composites the active piece over the board and copies out the scalar
    /// fields for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        let mut grid = self.state.board;
        if let Some(piece) = &self.state.piece {
            for (x, y) in piece.cells() {
                let column = self.state.position.x + x as i32;
                let row = self.state.position.y + y as i32;
                if (0..Self::WIDTH as i32).contains(&column)
                    && (0..Self::HEIGHT as i32).contains(&row)
                {
                    grid[row as usize][column as usize] = Some(piece.tile_type_id());
                }
            }
        }
        Snapshot {
            grid,
            score: self.state.score,
            level: self.state.level,
            game_over: self.state.game_over,
            paused: self.state.paused,
        }
    }
}
