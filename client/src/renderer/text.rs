use std::io::Write;

use anyhow::Context;
use libgame::{board::TileState, Game};

use super::Renderer;

const ALIVE_CHAR: char = '#';
const DEAD_CHAR: char = '.';

/// Prints every generation as rows of characters, one per cell.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, game: &Game) -> anyhow::Result<()> {
        let board = game.board();

        writeln!(
            self.out,
            "generation {} | live cells {}",
            game.generation(),
            game.live_cells()
        )?;

        for row in 0..board.rows() {
            let line = board
                .row_tiles(row)
                .unwrap_or_default()
                .iter()
                .map(|tile| match tile {
                    TileState::Alive => ALIVE_CHAR,
                    TileState::Dead => DEAD_CHAR,
                })
                .collect::<String>();

            writeln!(self.out, "{line}")?;
        }

        writeln!(self.out)?;
        self.out.flush().context("Flushing text frame")
    }
}
