use rand::Rng;

use super::pos::Position;

/// Relative positions of the eight cells around a tile.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Fixed-size grid of tiles stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameBoard {
    rows: usize,
    cols: usize,
    tiles: Vec<TileState>,
}

impl GameBoard {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            tiles: vec![TileState::default(); rows * cols],
        }
    }

    /// Builds a board from `rows` strings where `#` marks an alive tile.
    ///
    /// Short rows are padded with dead tiles; the widest row sets the width.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Self {
        let cols = rows
            .iter()
            .map(|row| row.as_ref().chars().count())
            .max()
            .unwrap_or(0);

        let mut board = Self::new(rows.len(), cols);

        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.as_ref().chars().enumerate() {
                board.set_alive(Position { row, col }, ch == '#');
            }
        }

        board
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    pub fn tile<P>(&self, pos: P) -> Option<&TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get(index)
    }

    pub fn tile_mut<P>(&mut self, pos: P) -> Option<&mut TileState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.tiles.get_mut(index)
    }

    /// Returns `false` when `pos` lies outside the board.
    pub fn set_alive<P>(&mut self, pos: P, alive: bool) -> bool
    where
        P: Into<Position>,
    {
        match self.tile_mut(pos) {
            Some(tile) => {
                *tile = TileState::from(alive);
                true
            }
            None => false,
        }
    }

    pub fn is_alive<P>(&self, pos: P) -> bool
    where
        P: Into<Position>,
    {
        self.tile(pos).is_some_and(|tile| tile.is_alive())
    }

    pub fn enumerate_tiles(&self) -> impl Iterator<Item = (Position, &TileState)> {
        self.tiles
            .iter()
            .enumerate()
            .map(|(index, tile)| (self.index_to_pos(index), tile))
    }

    pub fn row_tiles(&self, row: usize) -> Option<&[TileState]> {
        if row >= self.rows {
            return None;
        }

        let start = row * self.cols;
        self.tiles.get(start..start + self.cols)
    }

    pub fn count_alive(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_alive()).count()
    }

    /// Counts alive tiles among the eight neighbors of `pos`.
    ///
    /// Neighbors past any edge count as dead, there is no wraparound.
    pub fn alive_neighbors<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        let pos = pos.into();

        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(d_row, d_col)| pos.offset(d_row, d_col))
            .filter(|&neighbor| self.is_alive(neighbor))
            .count()
    }

    /// Marks `count` randomly picked tiles alive. Picks are made with
    /// replacement, so the same tile may be hit more than once.
    ///
    /// Returns how many tiles went from dead to alive.
    pub fn seed_random<R>(&mut self, rng: &mut R, count: usize) -> usize
    where
        R: Rng + ?Sized,
    {
        if self.area() == 0 {
            return 0;
        }

        let mut revived = 0;

        for _ in 0..count {
            let pos = Position {
                row: rng.random_range(0..self.rows),
                col: rng.random_range(0..self.cols),
            };

            // SAFETY: Both coordinates were drawn from inside the board.
            let tile = self.tile_mut(pos).unwrap();
            if !tile.is_alive() {
                *tile = TileState::Alive;
                revived += 1;
            }
        }

        revived
    }

    pub(crate) fn tiles_mut(&mut self) -> &mut [TileState] {
        &mut self.tiles
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.rows {
            return None;
        }

        if col >= self.cols {
            return None;
        }

        Some(col + (row * self.cols))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.cols;
        let col = index % self.cols;
        Position { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileState {
    Alive,

    #[default]
    Dead,
}

impl TileState {
    pub fn is_alive(self) -> bool {
        self == TileState::Alive
    }
}

impl From<bool> for TileState {
    fn from(alive: bool) -> Self {
        if alive {
            TileState::Alive
        } else {
            TileState::Dead
        }
    }
}
