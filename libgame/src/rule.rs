use crate::board::TileState;

/// What happens to a single cell during one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    /// Alive with fewer than two alive neighbors.
    Underpopulation,
    /// Alive with two or three alive neighbors.
    Survival,
    /// Alive with more than three alive neighbors.
    Overcrowding,
    /// Dead with exactly three alive neighbors.
    CreationOfLife,
    /// Dead with any other neighbor count.
    StaysDead,
}

impl Fate {
    pub fn of(tile: TileState, alive_neighbors: usize) -> Self {
        match (tile, alive_neighbors) {
            (TileState::Alive, 0..=1) => Fate::Underpopulation,
            (TileState::Alive, 2..=3) => Fate::Survival,
            (TileState::Alive, _) => Fate::Overcrowding,
            (TileState::Dead, 3) => Fate::CreationOfLife,
            (TileState::Dead, _) => Fate::StaysDead,
        }
    }

    pub fn next_state(self) -> TileState {
        match self {
            Fate::Survival | Fate::CreationOfLife => TileState::Alive,
            Fate::Underpopulation | Fate::Overcrowding | Fate::StaysDead => TileState::Dead,
        }
    }
}
