//! Obstacle placement and the per-tick random walk.

use std::collections::HashSet;

use rand::Rng;

use super::position::{Direction, Position};

/// Cells on a `grid_count` x `grid_count` board.
pub fn capacity(grid_count: u8) -> usize {
    grid_count as usize * grid_count as usize
}

/// Obstacles on `level`, capped so the player and goal cells always stay free.
pub fn obstacle_count(level: usize, base: usize, grid_count: u8) -> usize {
    level.saturating_add(base).min(capacity(grid_count).saturating_sub(2))
}

/// Rejection-sample `count` distinct cells avoiding `player` and `goal`.
///
/// There is no attempt limit; callers must keep `count` within
/// [`obstacle_count`]'s cap or this will not terminate.
pub fn place<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    grid_count: u8,
    player: Position,
    goal: Position,
) -> Vec<Position> {
    debug_assert!(count <= capacity(grid_count).saturating_sub(2));
    let mut obstacles: Vec<Position> = Vec::with_capacity(count);
    let mut taken: HashSet<Position> = HashSet::with_capacity(count + 2);
    taken.insert(player);
    taken.insert(goal);
    while obstacles.len() < count {
        let cell = Position::new(rng.gen_range(0..grid_count), rng.gen_range(0..grid_count));
        if taken.insert(cell) {
            obstacles.push(cell);
        }
    }
    obstacles
}

/// Move every obstacle one random step, in list order.
///
/// A rejected step leaves the obstacle where it was. Each obstacle checks
/// against the already-moved positions of those before it in this tick.
/// Returns how many obstacles actually moved.
pub fn wander<R: Rng + ?Sized>(
    rng: &mut R,
    obstacles: &mut [Position],
    grid_count: u8,
    player: Position,
    goal: Position,
) -> usize {
    wander_with(obstacles, grid_count, player, goal, || {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    })
}

/// [`wander`] with the step direction for each obstacle supplied by `pick`.
pub fn wander_with(
    obstacles: &mut [Position],
    grid_count: u8,
    player: Position,
    goal: Position,
    mut pick: impl FnMut() -> Direction,
) -> usize {
    let mut moved = 0;
    for i in 0..obstacles.len() {
        let dir = pick();
        let Some(next) = obstacles[i].step(dir, grid_count) else {
            continue;
        };
        if next == player || next == goal {
            continue;
        }
        if obstacles.iter().enumerate().any(|(j, o)| j != i && *o == next) {
            continue;
        }
        obstacles[i] = next;
        moved += 1;
    }
    moved
}
