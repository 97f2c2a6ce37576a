/*!
This module holds the placement rules of the game: where a piece may be, how
a landed piece is merged onto the board, how completed lines are cleared, and
how clears are scored.

Boards are treated as values: [`merge_piece`] and [`clear_lines`] return new
boards instead of mutating in place.
*/

use crate::{Board, Game, Line, Piece, Position, TileTypeID};

/// Returns an all-empty playing grid.
pub fn empty_board() -> Board {
    [Line::default(); Game::HEIGHT]
}

impl Piece {
    /// The tile id this piece stamps onto the board when it locks.
    pub fn tile_type_id(&self) -> TileTypeID {
        self.tetromino.tile_type_id()
    }

    /// Iterates over the `(x, y)` shape-local coordinates of all filled cells.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.shape.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(x, &filled)| filled.then_some((x, y)))
        })
    }

    /// Checks whether the piece fits at the given position onto the board.
    ///
    /// A filled cell is out of play if its column leaves `[0, W)` or its row
    /// reaches `H`, and it collides if it lands on an occupied board cell.
    /// Rows above the board (negative) are in bounds and never checked for
    /// occupancy, so a piece may hang off the top of the visible grid.
    pub fn fits(&self, board: &Board, position: Position) -> bool {
        self.cells().all(|(x, y)| {
            let column = position.x + x as i32;
            let row = position.y + y as i32;
            (0..Game::WIDTH as i32).contains(&column)
                && row < Game::HEIGHT as i32
                && (row < 0 || board[row as usize][column as usize].is_none())
        })
    }

    /// Produces the piece as it looks after a 90° clockwise rotation:
    /// transpose, then reverse each resulting row.
    ///
    /// No board validation happens here; the caller decides whether the
    /// rotated piece is allowed to replace the original. Non-square shapes
    /// rotate into a shape with swapped dimensions.
    pub fn rotated(&self) -> Self {
        let rows = self.shape.len();
        let columns = self.shape[0].len();
        let mut rotated = vec![vec![false; rows]; columns];
        for (y, row) in self.shape.iter().enumerate() {
            for (x, &filled) in row.iter().enumerate() {
                rotated[x][rows - 1 - y] = filled;
            }
        }
        Self {
            tetromino: self.tetromino,
            shape: rotated,
        }
    }
}

/// Produces a new board with the piece's tile id stamped at every filled cell.
///
/// Cells on rows above the board are silently dropped; this only occurs when
/// a piece locks while still hanging off the top, right before the game ends.
pub fn merge_piece(board: &Board, piece: &Piece, position: Position) -> Board {
    let mut merged = *board;
    for (x, y) in piece.cells() {
        let row = position.y + y as i32;
        if row < 0 {
            continue;
        }
        let column = (position.x + x as i32) as usize;
        merged[row as usize][column] = Some(piece.tile_type_id());
    }
    merged
}

/// Removes every full row from the board, preserving the order of the
/// remaining rows and refilling with empty rows at the top.
///
/// Returns the new board (always exactly `H` rows) and how many rows were
/// removed.
pub fn clear_lines(board: &Board) -> (Board, u32) {
    let mut cleared = empty_board();
    let mut write = Game::HEIGHT;
    for line in board.iter().rev() {
        if line.iter().all(Option::is_some) {
            continue;
        }
        write -= 1;
        cleared[write] = *line;
    }
    (cleared, write as u32)
}

/// Computes the score awarded for clearing `lines_cleared` rows at once.
///
/// Follows the fixed per-line-count table 0/40/100/300/1200, multiplied by
/// `level + 1`. A single piece spans at most 4 rows, so `lines_cleared` is
/// always in `[0, 4]`.
pub fn score_for(lines_cleared: u32, level: u32) -> u32 {
    const BASE_POINTS: [u32; 5] = [0, 40, 100, 300, 1200];
    BASE_POINTS[lines_cleared as usize] * (level + 1)
}

#[cfg(test)]
mod tests {
    use crate::Tetromino;

    use super::*;

    fn board_with(cells: &[(usize, usize)]) -> Board {
        let mut board = empty_board();
        for &(column, row) in cells {
            board[row][column] = Some(Tetromino::I.tile_type_id());
        }
        board
    }

    fn full_line() -> Line {
        [Some(Tetromino::O.tile_type_id()); Game::WIDTH]
    }

    #[test]
    fn piece_fits_on_fresh_board_at_spawn() {
        for tetromino in Tetromino::VARIANTS {
            let piece = Piece::new(tetromino);
            assert!(piece.fits(&empty_board(), Game::SPAWN_POSITION));
        }
    }

    #[test]
    fn piece_does_not_fit_outside_side_walls() {
        let piece = Piece::new(Tetromino::O);
        let board = empty_board();
        assert!(!piece.fits(&board, Position { x: -1, y: 5 }));
        assert!(piece.fits(&board, Position { x: 0, y: 5 }));
        assert!(piece.fits(&board, Position { x: 8, y: 5 }));
        assert!(!piece.fits(&board, Position { x: 9, y: 5 }));
    }

    #[test]
    fn piece_does_not_fit_below_floor() {
        let piece = Piece::new(Tetromino::O);
        let board = empty_board();
        assert!(piece.fits(&board, Position { x: 4, y: 18 }));
        assert!(!piece.fits(&board, Position { x: 4, y: 19 }));
    }

    #[test]
    fn piece_may_hang_above_the_board() {
        // Only the bottom row of the T shape is on the board; the row above
        // is at y = -1 and must not be bounds- or occupancy-checked.
        let piece = Piece::new(Tetromino::T);
        let board = board_with(&[(4, 1)]);
        assert!(piece.fits(&board, Position { x: 3, y: -1 }));
        assert!(!piece.fits(&board, Position { x: 3, y: 0 }));
    }

    #[test]
    fn piece_does_not_fit_on_occupied_cells() {
        let piece = Piece::new(Tetromino::O);
        let board = board_with(&[(5, 10)]);
        assert!(!piece.fits(&board, Position { x: 4, y: 9 }));
        assert!(!piece.fits(&board, Position { x: 5, y: 10 }));
        assert!(piece.fits(&board, Position { x: 3, y: 9 }));
    }

    #[test]
    fn merged_cells_are_occupied_afterwards() {
        let piece = Piece::new(Tetromino::S);
        let position = Position { x: 2, y: 7 };
        let board = empty_board();
        assert!(piece.fits(&board, position));
        let merged = merge_piece(&board, &piece, position);
        assert!(!piece.fits(&merged, position));
    }

    #[test]
    fn merge_stamps_the_piece_tile_id() {
        let piece = Piece::new(Tetromino::O);
        let merged = merge_piece(&empty_board(), &piece, Position { x: 0, y: 18 });
        assert_eq!(merged[18][0], Some(Tetromino::O.tile_type_id()));
        assert_eq!(merged[19][1], Some(Tetromino::O.tile_type_id()));
        assert_eq!(merged[18][2], None);
    }

    #[test]
    fn merge_drops_rows_above_the_board() {
        let piece = Piece::new(Tetromino::T);
        let merged = merge_piece(&empty_board(), &piece, Position { x: 3, y: -1 });
        // Top row of the T was at y = -1 and vanishes; bottom row remains.
        assert_eq!(merged[0][3], Some(Tetromino::T.tile_type_id()));
        assert_eq!(merged[0][4], Some(Tetromino::T.tile_type_id()));
        assert_eq!(merged[0][5], Some(Tetromino::T.tile_type_id()));
        assert_eq!(merged.iter().flatten().filter(|c| c.is_some()).count(), 3);
    }

    #[test]
    fn clear_lines_is_idempotent_without_full_rows() {
        let board = board_with(&[(0, 19), (3, 19), (9, 18)]);
        let (cleared, count) = clear_lines(&board);
        assert_eq!(count, 0);
        assert_eq!(cleared, board);
    }

    #[test]
    fn clear_lines_removes_full_rows_and_keeps_height() {
        let mut board = empty_board();
        board[19] = full_line();
        board[18][4] = Some(Tetromino::J.tile_type_id());
        let (cleared, count) = clear_lines(&board);
        assert_eq!(count, 1);
        assert_eq!(cleared.len(), Game::HEIGHT);
        // The leftover cell slides down into the vacated bottom row.
        assert_eq!(cleared[19][4], Some(Tetromino::J.tile_type_id()));
        assert!(cleared[18].iter().all(Option::is_none));
    }

    #[test]
    fn clear_lines_preserves_order_of_remaining_rows() {
        let mut board = empty_board();
        board[16][0] = Some(Tetromino::I.tile_type_id());
        board[17] = full_line();
        board[18][1] = Some(Tetromino::S.tile_type_id());
        board[19] = full_line();
        let (cleared, count) = clear_lines(&board);
        assert_eq!(count, 2);
        assert_eq!(cleared[18][0], Some(Tetromino::I.tile_type_id()));
        assert_eq!(cleared[19][1], Some(Tetromino::S.tile_type_id()));
    }

    #[test]
    fn clear_lines_handles_an_entirely_full_board() {
        let board = [full_line(); Game::HEIGHT];
        let (cleared, count) = clear_lines(&board);
        assert_eq!(count, Game::HEIGHT as u32);
        assert_eq!(cleared, empty_board());
    }

    #[test]
    fn rotation_four_times_restores_the_shape() {
        for tetromino in Tetromino::VARIANTS {
            let piece = Piece::new(tetromino);
            let once = piece.rotated();
            let back = once.rotated().rotated().rotated();
            assert_eq!(back, piece);
            // A quarter turn swaps the dimensions of non-square shapes.
            assert_eq!(once.shape.len(), piece.shape[0].len());
            assert_eq!(once.shape[0].len(), piece.shape.len());
        }
    }

    #[test]
    fn rotation_turns_clockwise() {
        let piece = Piece::new(Tetromino::T);
        let rotated = piece.rotated();
        // Stem up becomes stem pointing right:
        //  .#.          #.
        //  ###    =>    ##
        //               #.
        assert_eq!(
            rotated.shape,
            vec![
                vec![true, false],
                vec![true, true],
                vec![true, false],
            ]
        );
    }

    #[test]
    fn score_table_matches_per_line_awards() {
        for level in 0..12 {
            assert_eq!(score_for(0, level), 0);
        }
        assert_eq!(score_for(1, 0), 40);
        assert_eq!(score_for(2, 0), 100);
        assert_eq!(score_for(3, 0), 300);
        assert_eq!(score_for(4, 0), 1200);
        assert_eq!(score_for(2, 3), 400);
        assert_eq!(score_for(4, 2), 3600);
    }
}
