use libgame::Game;

pub mod terminal;
pub mod text;

/// Something that can show a game. Renderers only read the game; the ticker
/// owns it and is the only one that advances it.
pub trait Renderer {
    fn render(&mut self, game: &Game) -> anyhow::Result<()>;

    /// Checked once per loop iteration, before rendering.
    fn quit_requested(&mut self) -> anyhow::Result<bool> {
        Ok(false)
    }
}
