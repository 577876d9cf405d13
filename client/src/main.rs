use std::{
    io,
    sync::{atomic::AtomicBool, Arc},
};

use anyhow::Context;
use clap::Parser;
use libgame::{board::GameBoard, Game};
use rand::{rngs::StdRng, RngCore, SeedableRng};
use signal_hook::{consts::TERM_SIGNALS, flag};
use tracing::info;

use cli::Cli;
use renderer::{terminal::TerminalRenderer, text::TextRenderer, Renderer};
use ticker::Ticker;

mod cli;
mod logging;
mod renderer;
mod ticker;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.logging.to_config(cli.headless.enabled)).context("Setting up logging")?;

    let quit = Arc::new(AtomicBool::new(false));
    for &signal in TERM_SIGNALS {
        flag::register(signal, Arc::clone(&quit))
            .with_context(|| format!("Registering handler for signal {signal}"))?;
    }

    let mut rng: Box<dyn RngCore> = match cli.seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::rng()),
    };

    let ticker =
        Ticker::new(quit, cli.generation_interval()).with_generation_limit(cli.generations);

    if cli.headless.enabled {
        let board = seed_board(&cli, cli.headless.rows, cli.headless.cols, &mut *rng)?;
        let mut renderer = TextRenderer::new(io::stdout().lock());

        run(&ticker, board, &mut renderer)
    } else {
        let mut renderer = TerminalRenderer::enter()?;
        let (rows, cols) = renderer
            .grid_size()
            .context("Terminal too small to fit the info panel and grid")?;
        let board = seed_board(&cli, rows, cols, &mut *rng)?;

        run(&ticker, board, &mut renderer)
    }
}

fn seed_board(
    cli: &Cli,
    rows: usize,
    cols: usize,
    rng: &mut dyn RngCore,
) -> anyhow::Result<GameBoard> {
    let mut board = GameBoard::new(rows, cols);

    match cli.pattern {
        Some(pattern) => {
            let origin = pattern.place_centered(&mut board)?;
            info!(
                pattern = pattern.name,
                row = origin.row,
                col = origin.col,
                "placed pattern"
            );
        }
        None => {
            let revived = board.seed_random(rng, cli.live_cells);
            info!(requested = cli.live_cells, revived, rows, cols, "seeded board");
        }
    }

    Ok(board)
}

fn run<R: Renderer>(ticker: &Ticker, board: GameBoard, renderer: &mut R) -> anyhow::Result<()> {
    let mut game = Game::new(board);
    ticker.run(&mut game, renderer)?;
    Ok(())
}
