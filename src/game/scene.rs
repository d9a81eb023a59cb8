use super::position::Position;
use super::state::GameState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Obstacle,
    Goal,
    Player,
}

impl Layer {
    pub fn fill(self) -> &'static str {
        match self {
            Layer::Obstacle => "red",
            Layer::Goal => "gold",
            Layer::Player => "blue",
        }
    }
}

pub const BACKGROUND: &str = "#fff";
pub const GRID_LINE: &str = "#ccc";

/// Cells to paint, back to front: obstacles, then goal, then player on top.
pub fn cells(state: &GameState) -> impl Iterator<Item = (Position, Layer)> + '_ {
    state
        .obstacles()
        .iter()
        .map(|&o| (o, Layer::Obstacle))
        .chain(std::iter::once((state.goal(), Layer::Goal)))
        .chain(std::iter::once((state.player(), Layer::Player)))
}

/// Square canvas edge for a viewport, capped at `max_px`.
pub fn canvas_size(viewport_w: f64, viewport_h: f64, max_px: u32) -> f64 {
    viewport_w.min(viewport_h).min(max_px as f64).max(0.0).floor()
}
