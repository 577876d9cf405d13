use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use libgame::Game;
use tracing::{debug, info};

use crate::renderer::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminating,
}

/// Drives a game: render, wait, advance, until asked to stop.
///
/// The quit flag is only looked at between iterations. A render or sleep that
/// is already underway always finishes.
pub struct Ticker {
    quit: Arc<AtomicBool>,
    interval: Duration,
    generation_limit: Option<u64>,
}

impl Ticker {
    pub fn new(quit: Arc<AtomicBool>, interval: Duration) -> Self {
        Self {
            quit,
            interval,
            generation_limit: None,
        }
    }

    pub fn with_generation_limit(mut self, limit: Option<u64>) -> Self {
        self.generation_limit = limit;
        self
    }

    pub fn state(&self, game: &Game) -> LoopState {
        let limit_reached = self
            .generation_limit
            .is_some_and(|limit| game.generation() >= limit);

        if limit_reached || self.quit.load(Ordering::SeqCst) {
            LoopState::Terminating
        } else {
            LoopState::Running
        }
    }

    /// Runs until the quit flag is set or the generation limit is reached.
    /// Returns how many generations were advanced.
    pub fn run<R>(&self, game: &mut Game, renderer: &mut R) -> anyhow::Result<u64>
    where
        R: Renderer + ?Sized,
    {
        let mut iterations = 0;

        info!(
            interval_ms = self.interval.as_millis() as u64,
            limit = ?self.generation_limit,
            "ticker started"
        );

        loop {
            if renderer.quit_requested()? {
                self.quit.store(true, Ordering::SeqCst);
            }

            if self.state(game) == LoopState::Terminating {
                break;
            }

            renderer.render(game)?;
            spin_sleep::sleep(self.interval);
            game.tick();
            iterations += 1;

            debug!(
                generation = game.generation(),
                live_cells = game.live_cells(),
                "generation advanced"
            );
        }

        info!(iterations, generation = game.generation(), "ticker stopped");
        Ok(iterations)
    }
}

#[cfg(test)]
mod tests {
    use libgame::board::GameBoard;

    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct Frame {
        generation: u64,
        reported_live: usize,
        counted_live: usize,
    }

    /// Records every frame and asks to quit after `quit_after` of them.
    struct Recorder {
        frames: Vec<Frame>,
        quit_after: usize,
    }

    impl Recorder {
        fn new(quit_after: usize) -> Self {
            Self {
                frames: Vec::new(),
                quit_after,
            }
        }
    }

    impl Renderer for Recorder {
        fn render(&mut self, game: &Game) -> anyhow::Result<()> {
            let counted_live = game
                .board()
                .enumerate_tiles()
                .filter(|(_, tile)| tile.is_alive())
                .count();

            self.frames.push(Frame {
                generation: game.generation(),
                reported_live: game.live_cells(),
                counted_live,
            });
            Ok(())
        }

        fn quit_requested(&mut self) -> anyhow::Result<bool> {
            Ok(self.frames.len() >= self.quit_after)
        }
    }

    fn r_pentomino() -> Game {
        Game::new(GameBoard::from_rows(&[
            "........",
            "...##...",
            "..##....",
            "...#....",
            "........",
            "........",
        ]))
    }

    #[test]
    fn generation_advances_by_one_per_iteration() {
        let quit = Arc::new(AtomicBool::new(false));
        let ticker = Ticker::new(quit.clone(), Duration::ZERO);
        let mut game = r_pentomino();
        let mut recorder = Recorder::new(6);

        let iterations = ticker.run(&mut game, &mut recorder).unwrap();

        assert_eq!(iterations, 6);
        assert_eq!(game.generation(), 6);
        assert!(quit.load(Ordering::SeqCst));

        let generations = recorder
            .frames
            .iter()
            .map(|frame| frame.generation)
            .collect::<Vec<_>>();
        assert_eq!(generations, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn reported_live_count_matches_grid() {
        let ticker = Ticker::new(Arc::new(AtomicBool::new(false)), Duration::ZERO);
        let mut game = r_pentomino();
        let mut recorder = Recorder::new(10);

        ticker.run(&mut game, &mut recorder).unwrap();

        assert_eq!(recorder.frames.len(), 10);
        assert_eq!(recorder.frames[0].reported_live, 5);
        for frame in &recorder.frames {
            assert_eq!(frame.reported_live, frame.counted_live);
        }
    }

    #[test]
    fn quit_before_start_renders_nothing() {
        let ticker = Ticker::new(Arc::new(AtomicBool::new(true)), Duration::ZERO);
        let mut game = r_pentomino();
        let mut recorder = Recorder::new(usize::MAX);

        assert_eq!(ticker.run(&mut game, &mut recorder).unwrap(), 0);
        assert!(recorder.frames.is_empty());
        assert_eq!(game.generation(), 0);
    }

    #[test]
    fn generation_limit_stops_the_loop() {
        let quit = Arc::new(AtomicBool::new(false));
        let ticker = Ticker::new(quit.clone(), Duration::ZERO).with_generation_limit(Some(3));
        let mut game = r_pentomino();
        let mut recorder = Recorder::new(usize::MAX);

        assert_eq!(ticker.run(&mut game, &mut recorder).unwrap(), 3);
        assert_eq!(ticker.state(&game), LoopState::Terminating);
        assert!(!quit.load(Ordering::SeqCst));
    }

    #[test]
    fn render_errors_propagate() {
        struct Broken;

        impl Renderer for Broken {
            fn render(&mut self, _game: &Game) -> anyhow::Result<()> {
                anyhow::bail!("screen went away")
            }
        }

        let ticker = Ticker::new(Arc::new(AtomicBool::new(false)), Duration::ZERO);
        let mut game = r_pentomino();

        let err = ticker.run(&mut game, &mut Broken).unwrap_err();
        assert_eq!(err.to_string(), "screen went away");
        assert_eq!(game.generation(), 0);
    }
}
