use std::mem;

use board::{GameBoard, TileState};
use pos::Position;
use rule::Fate;

pub mod board;
pub mod pattern;
pub mod pos;
pub mod rule;

/// A board plus the bookkeeping needed to step it forward.
///
/// `tick` reads only from `board` and writes only into `next`, then swaps the
/// two, so every tile of a generation sees the same frozen predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: GameBoard,
    next: GameBoard,
    generation: u64,
}

impl Game {
    pub fn new(board: GameBoard) -> Self {
        let next = GameBoard::new(board.rows(), board.cols());

        Self {
            board,
            next,
            generation: 0,
        }
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_cells(&self) -> usize {
        self.board.count_alive()
    }

    pub fn tick(&mut self) {
        let Self {
            board,
            next,
            generation,
        } = self;

        let current: &GameBoard = board;
        for ((tile_pos, tile), next_tile) in current.enumerate_tiles().zip(next.tiles_mut()) {
            *next_tile = Self::tick_tile(current, tile_pos, *tile);
        }

        mem::swap(board, next);
        *generation += 1;
    }

    fn tick_tile(board: &GameBoard, tile_pos: Position, tile: TileState) -> TileState {
        let alive_neighbor_count = board.alive_neighbors(tile_pos);

        Fate::of(tile, alive_neighbor_count).next_state()
    }
}
