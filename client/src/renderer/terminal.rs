use std::{
    io::{self, Stdout, Write},
    time::Duration,
};

use anyhow::Context;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use libgame::Game;
use rand::{rngs::ThreadRng, Rng};
use tracing::{debug, warn};

use super::Renderer;

/// Rows taken by the statistics panel above the grid.
pub const INFO_HEIGHT: u16 = 8;
/// Rows and columns between the grid and the edge of its area.
pub const GRID_PADDING: u16 = 2;

const GRID_TOP: u16 = INFO_HEIGHT + GRID_PADDING / 2;
const GRID_LEFT: u16 = GRID_PADDING / 2;

// (row, column) inside the info panel.
const TITLE_AT: (u16, u16) = (2, 4);
const LIVE_CELLS_AT: (u16, u16) = (5, 4);
const GENERATION_AT: (u16, u16) = (6, 4);

const TITLE: &str = "Conway's Game of Life";

const CELL_COLORS: [Color; 7] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

/// Grid dimensions that fit in a terminal of the given size, as `(rows, cols)`.
///
/// Returns `None` when not even a single cell fits below the info panel.
pub fn grid_size(width: u16, height: u16) -> Option<(usize, usize)> {
    let rows = height.checked_sub(INFO_HEIGHT + GRID_PADDING)?;
    let cols = width.checked_sub(GRID_PADDING)?;

    if rows == 0 || cols == 0 {
        return None;
    }

    Some((rows as usize, cols as usize))
}

/// Full-screen view on the alternate screen. Restores the terminal on drop.
pub struct TerminalRenderer {
    out: Stdout,
    width: u16,
    height: u16,
    rng: ThreadRng,
    raw: bool,
    alt_screen_active: bool,
}

impl TerminalRenderer {
    pub fn enter() -> anyhow::Result<Self> {
        let (width, height) = terminal::size().context("Reading terminal size")?;

        let mut renderer = Self {
            out: io::stdout(),
            width,
            height,
            rng: rand::rng(),
            raw: false,
            alt_screen_active: false,
        };

        enable_raw_mode().context("Enabling raw mode")?;
        renderer.raw = true;

        execute!(renderer.out, EnterAlternateScreen, Hide, Clear(ClearType::All))
            .context("Entering alternate screen")?;
        renderer.alt_screen_active = true;

        debug!(width, height, "terminal ready");
        Ok(renderer)
    }

    /// `(rows, cols)` of the grid this terminal can show.
    pub fn grid_size(&self) -> Option<(usize, usize)> {
        grid_size(self.width, self.height)
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, game: &Game) -> anyhow::Result<()> {
        draw_frame(&mut self.out, &mut self.rng, game, self.width).context("Drawing frame")
    }

    fn quit_requested(&mut self) -> anyhow::Result<bool> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                let ctrl_c =
                    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);

                if ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    debug!(code = ?key.code, "quit key pressed");
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if self.alt_screen_active {
            if let Err(err) = execute!(self.out, ResetColor, Show, LeaveAlternateScreen) {
                warn!(%err, "failed to leave alternate screen");
            }
        }
        let _ = self.out.flush();
        if self.raw {
            let _ = disable_raw_mode();
        }
    }
}

/// Queues one whole frame and flushes it.
pub fn draw_frame<W, R>(out: &mut W, rng: &mut R, game: &Game, width: u16) -> io::Result<()>
where
    W: Write,
    R: Rng + ?Sized,
{
    queue!(out, ResetColor, Clear(ClearType::All))?;

    draw_info_panel(out, game, width)?;

    queue!(out, SetForegroundColor(Color::Black))?;
    for (pos, tile) in game.board().enumerate_tiles() {
        if !tile.is_alive() {
            continue;
        }

        let color = CELL_COLORS[rng.random_range(0..CELL_COLORS.len())];
        queue!(
            out,
            MoveTo(GRID_LEFT + pos.col as u16, GRID_TOP + pos.row as u16),
            SetBackgroundColor(color),
            Print(' ')
        )?;
    }

    queue!(out, ResetColor)?;
    out.flush()
}

fn draw_info_panel<W: Write>(out: &mut W, game: &Game, width: u16) -> io::Result<()> {
    draw_box(out, width, INFO_HEIGHT)?;

    let lines = [
        (TITLE_AT, TITLE.to_owned()),
        (LIVE_CELLS_AT, format!("Live cells: {}", game.live_cells())),
        (
            GENERATION_AT,
            format!("Generation iteration: {}", game.generation()),
        ),
    ];

    for ((row, col), text) in lines {
        queue!(out, MoveTo(col, row), Print(text))?;
    }

    Ok(())
}

fn draw_box<W: Write>(out: &mut W, width: u16, height: u16) -> io::Result<()> {
    if width < 2 || height < 2 {
        return Ok(());
    }

    let horizontal = "─".repeat(width as usize - 2);

    queue!(out, MoveTo(0, 0), Print(format!("┌{horizontal}┐")))?;
    for row in 1..height - 1 {
        queue!(
            out,
            MoveTo(0, row),
            Print('│'),
            MoveTo(width - 1, row),
            Print('│')
        )?;
    }
    queue!(out, MoveTo(0, height - 1), Print(format!("└{horizontal}┘")))?;

    Ok(())
}
