//! Full-round gameplay tests driving a [`Game`] exclusively through its
//! public command API, the way a frontend would.

use blockfall_engine::{empty_board, Board, Command, Game, GameState};

fn full_rows(board: &Board) -> usize {
    board
        .iter()
        .filter(|row| row.iter().all(Option::is_some))
        .count()
}

#[test]
fn a_seeded_round_plays_to_game_over() {
    let mut game = Game::builder().seed(2026).build();
    game.handle(Command::Start);

    let mut drops = 0;
    let mut last_score = 0;
    while !game.state().game_over {
        game.handle(Command::HardDrop);
        drops += 1;
        assert!(drops < 10_000, "round did not terminate");

        // Score never decreases, and the level tracks it.
        let state = game.state();
        assert!(state.score >= last_score);
        assert_eq!(state.level, state.score / 1000);
        last_score = state.score;

        // The board never holds a full row between transitions.
        assert_eq!(full_rows(&game.state().board), 0);
    }

    // Terminal condition: pause forced on, piece slot empty, commands dead.
    assert!(game.state().paused);
    assert!(game.state().piece.is_none());
    let over = game.state().clone();
    game.handle(Command::Start);
    game.handle(Command::SoftDrop);
    assert_eq!(*game.state(), over);
}

#[test]
fn gravity_alone_lands_and_respawns_pieces() {
    let mut game = Game::builder().seed(3).build();
    game.handle(Command::Start);

    // Enough ticks to walk the first piece down the entire board and lock it.
    for _ in 0..=Game::HEIGHT {
        game.tick();
    }
    let snapshot = game.snapshot();
    let occupied = snapshot
        .grid
        .iter()
        .flatten()
        .filter(|cell| cell.is_some())
        .count();
    // Four locked cells plus the four of the freshly spawned piece.
    assert_eq!(occupied, 8);
    assert!(!game.state().game_over);
}

#[test]
fn pausing_freezes_the_round_exactly() {
    let mut game = Game::builder().seed(11).build();
    game.handle(Command::Start);
    game.handle(Command::SoftDrop);
    game.handle(Command::Pause);

    let frozen = game.state().clone();
    for _ in 0..100 {
        game.tick();
    }
    game.handle(Command::MoveRight);
    assert_eq!(*game.state(), frozen);

    // Resuming picks play back up where it stopped.
    game.handle(Command::Pause);
    game.tick();
    assert_eq!(game.state().position.y, frozen.position.y + 1);
}

#[test]
fn reset_discards_a_whole_round() {
    let mut game = Game::builder().seed(500).build();
    game.handle(Command::Start);
    for _ in 0..25 {
        game.handle(Command::MoveLeft);
        game.handle(Command::HardDrop);
    }
    game.handle(Command::Reset);

    assert_eq!(*game.state(), GameState::initial());
    assert_eq!(game.state().board, empty_board());
    assert_eq!(game.gravity_interval(), None);
}

#[test]
fn snapshots_expose_exactly_the_render_payload() {
    let mut game = Game::builder().seed(8).build();
    let before = game.snapshot();
    assert!(before.paused);
    assert!(!before.game_over);
    assert_eq!(before.grid, empty_board());

    game.handle(Command::Start);
    let after = game.snapshot();
    let piece_cells = after
        .grid
        .iter()
        .flatten()
        .filter(|cell| cell.is_some())
        .count();
    assert_eq!(piece_cells, 4);
    assert_eq!(after.score, 0);
    assert_eq!(after.level, 0);
}
