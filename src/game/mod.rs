//! Pure game logic: no browser types in here, so it runs under native `cargo test`.

pub mod input;
pub mod obstacles;
pub mod position;
pub mod scene;
pub mod state;

pub use position::{Direction, Position};
pub use state::{GameState, Outcome};
