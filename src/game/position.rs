use serde::{Deserialize, Serialize};

/// One grid cell. Coordinates are always inside `[0, grid_count)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Neighbouring cell in `dir`, or `None` if it falls off a `grid_count` board.
    pub fn step(self, dir: Direction, grid_count: u8) -> Option<Position> {
        let (dx, dy) = dir.delta();
        let nx = self.x as i16 + dx as i16;
        let ny = self.y as i16 + dy as i16;
        if nx < 0 || ny < 0 || nx >= grid_count as i16 || ny >= grid_count as i16 {
            return None;
        }
        Some(Position::new(nx as u8, ny as u8))
    }

    pub fn in_bounds(self, grid_count: u8) -> bool {
        self.x < grid_count && self.y < grid_count
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Screen-space delta; y grows downward.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stays_on_board() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Up, 5), None);
        assert_eq!(corner.step(Direction::Left, 5), None);
        assert_eq!(corner.step(Direction::Right, 5), Some(Position::new(1, 0)));
        assert_eq!(corner.step(Direction::Down, 5), Some(Position::new(0, 1)));

        let far = Position::new(4, 4);
        assert_eq!(far.step(Direction::Right, 5), None);
        assert_eq!(far.step(Direction::Down, 5), None);
    }

    #[test]
    fn in_bounds_checks_both_axes() {
        assert!(Position::new(4, 4).in_bounds(5));
        assert!(!Position::new(5, 0).in_bounds(5));
        assert!(!Position::new(0, 5).in_bounds(5));
    }
}
