//! Host-independent mapping from key names and swipes to moves.

use super::position::Direction;

/// Map a `KeyboardEvent.key` value to a move. Arrow keys and WASD.
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Direction::Up),
        "ArrowDown" | "s" | "S" => Some(Direction::Down),
        "ArrowLeft" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}

/// In-progress single-finger swipe.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    start: Option<(f64, f64)>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64, y: f64) {
        self.start = Some((x, y));
    }

    /// Finish the swipe at `(x, y)`. Returns `None` for a tap or when no
    /// swipe was started. The tracker is cleared either way.
    pub fn finish(&mut self, x: f64, y: f64) -> Option<Direction> {
        let (sx, sy) = self.start.take()?;
        swipe_direction(sx - x, sy - y)
    }
}

/// Classify a displacement measured as `start - end` on the dominant axis.
/// Ties go to the vertical axis.
pub fn swipe_direction(diff_x: f64, diff_y: f64) -> Option<Direction> {
    if diff_x.abs() > diff_y.abs() {
        if diff_x > 0.0 { Some(Direction::Left) } else { Some(Direction::Right) }
    } else if diff_y > 0.0 {
        Some(Direction::Up)
    } else if diff_y < 0.0 {
        Some(Direction::Down)
    } else {
        None
    }
}
