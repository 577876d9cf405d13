use libgame::{Game, board::GameBoard, pattern::Pattern, pos::Position};

fn stamped(name: &str, rows: usize, cols: usize, origin: Position) -> GameBoard {
    let mut board = GameBoard::new(rows, cols);
    Pattern::find(name).unwrap().place_at(&mut board, origin);
    board
}

#[test]
fn block_is_stable() {
    let board = stamped("block", 6, 6, Position::new(2, 2));
    let mut game = Game::new(board.clone());

    for _ in 0..50 {
        game.tick();
        assert_eq!(game.board(), &board);
    }

    assert_eq!(game.generation(), 50);
}

#[test]
fn glider_moves_one_diagonal_every_four_generations() {
    let mut game = Game::new(stamped("glider", 10, 10, Position::new(1, 1)));

    for step in 1..=3 {
        for _ in 0..4 {
            game.tick();
            assert_eq!(game.live_cells(), 5);
        }

        let expected = stamped("glider", 10, 10, Position::new(1 + step, 1 + step));
        assert_eq!(game.board(), &expected, "after {} generations", step * 4);
    }
}

#[test]
fn glider_intermediate_phases() {
    let mut game = Game::new(GameBoard::from_rows(&[
        "......",
        "..#...",
        "...#..",
        ".###..",
        "......",
        "......",
    ]));

    let phases: [&[&str]; 3] = [
        &["......", "......", ".#.#..", "..##..", "..#...", "......"],
        &["......", "......", "...#..", ".#.#..", "..##..", "......"],
        &["......", "......", "..#...", "...##.", "..##..", "......"],
    ];

    for phase in phases {
        game.tick();
        assert_eq!(game.board(), &GameBoard::from_rows(phase));
    }
}

#[test]
fn blinker_oscillates() {
    let start = stamped("blinker", 5, 5, Position::new(2, 1));
    let mut game = Game::new(start.clone());

    game.tick();
    assert_ne!(game.board(), &start);
    assert_eq!(game.live_cells(), 3);

    game.tick();
    assert_eq!(game.board(), &start);
}

#[test]
fn pattern_against_the_edge_loses_cells() {
    // Neighbors past the border are absent, so a blinker on the top edge dies
    // out instead of oscillating.
    let mut game = Game::new(stamped("blinker", 4, 5, Position::new(0, 1)));

    game.tick();
    assert_eq!(game.board(), &GameBoard::from_rows(&["..#..", "..#..", ".....", "....."]));

    game.tick();
    assert_eq!(game.live_cells(), 0);
}
