use thiserror::Error;

use crate::{board::GameBoard, pos::Position};

/// A named arrangement of alive cells, given as `(row, col)` offsets from its
/// top-left corner.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "r-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern `{name}` needs {height}x{width} cells but the board is {rows}x{cols}")]
    DoesNotFit {
        name: &'static str,
        height: usize,
        width: usize,
        rows: usize,
        cols: usize,
    },
}

impl Pattern {
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS
            .iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        PATTERNS.iter().map(|pattern| pattern.name)
    }

    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(row, _)| row + 1).max().unwrap_or(0)
    }

    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, col)| col + 1).max().unwrap_or(0)
    }

    /// Stamps the pattern with its top-left corner at `origin`. Cells that land
    /// outside the board are dropped.
    pub fn place_at(&self, board: &mut GameBoard, origin: Position) {
        for &(row, col) in self.cells {
            let pos = Position {
                row: origin.row + row,
                col: origin.col + col,
            };
            board.set_alive(pos, true);
        }
    }

    pub fn place_centered(&self, board: &mut GameBoard) -> Result<Position, PatternError> {
        let (height, width) = (self.height(), self.width());

        if height > board.rows() || width > board.cols() {
            return Err(PatternError::DoesNotFit {
                name: self.name,
                height,
                width,
                rows: board.rows(),
                cols: board.cols(),
            });
        }

        let origin = Position {
            row: (board.rows() - height) / 2,
            col: (board.cols() - width) / 2,
        };
        self.place_at(board, origin);

        Ok(origin)
    }
}
