use log::{info, trace, warn};
use rand::Rng;
use serde::Serialize;

use super::obstacles;
use super::position::{Direction, Position};
use crate::config::GameConfig;

/// What a resolve step decided. Anything but `Continue` means the board was rebuilt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// Player walked into an obstacle; back to level 0.
    GameOver,
    /// `message` belongs to the level just cleared; `level` is the new index.
    LevelComplete { message: String, level: usize },
    /// Last message revealed; back to level 0.
    GameComplete { message: String },
}

impl Outcome {
    pub fn resets_board(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }

    /// Message to show in the message area, if this outcome reveals one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::LevelComplete { message, .. } | Outcome::GameComplete { message } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Whole game state. Every mutation goes through the methods below; the RNG
/// is supplied by the caller.
#[derive(Clone, Debug)]
pub struct GameState {
    config: GameConfig,
    player: Position,
    goal: Position,
    obstacles: Vec<Position>,
    level: usize,
}

#[derive(Serialize)]
pub struct Snapshot<'a> {
    pub grid_count: u8,
    pub level: usize,
    pub levels: usize,
    pub player: Position,
    pub goal: Position,
    pub obstacles: &'a [Position],
}

impl GameState {
    /// Fresh game at level 0 with obstacles already placed.
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        let mut state = Self {
            config,
            player: Position::default(),
            goal: Position::default(),
            obstacles: Vec::new(),
            level: 0,
        };
        state.reset_level(rng);
        state
    }

    /// Build a state from explicit parts, bypassing random placement.
    /// Obstacles outside the grid, on the player, on the goal or repeated are dropped.
    pub fn with_layout(config: GameConfig, level: usize, player: Position, obstacles: Vec<Position>) -> Self {
        let n = config.grid_count;
        let goal = Position::new(n.saturating_sub(1), n.saturating_sub(1));
        let player = if player.in_bounds(n) { player } else { Position::default() };
        let mut kept: Vec<Position> = Vec::with_capacity(obstacles.len());
        for o in obstacles {
            if o.in_bounds(n) && o != goal && o != player && !kept.contains(&o) {
                kept.push(o);
            }
        }
        let level = level.min(config.level_texts.len().saturating_sub(1));
        Self {
            player,
            goal,
            obstacles: kept,
            level,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn obstacles(&self) -> &[Position] {
        &self.obstacles
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn level_count(&self) -> usize {
        self.config.level_texts.len()
    }

    pub fn grid_count(&self) -> u8 {
        self.config.grid_count
    }

    /// Put player and goal on their corners and lay out this level's obstacles.
    pub fn reset_level<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let n = self.config.grid_count;
        self.player = Position::new(0, 0);
        self.goal = Position::new(n.saturating_sub(1), n.saturating_sub(1));
        let count = obstacles::obstacle_count(self.level, self.config.base_obstacles, n);
        self.obstacles = obstacles::place(rng, count, n, self.player, self.goal);
        info!("level {} ready with {} obstacles", self.level + 1, self.obstacles.len());
    }

    /// Back to level 0.
    pub fn reset_game<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.level = 0;
        self.reset_level(rng);
    }

    /// Move the player one cell. Returns false when the move would leave the grid.
    pub fn move_player(&mut self, dir: Direction) -> bool {
        match self.player.step(dir, self.config.grid_count) {
            Some(next) => {
                self.player = next;
                true
            }
            None => false,
        }
    }

    /// Apply collision and goal rules to the current state.
    pub fn resolve<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Outcome {
        if self.obstacles.contains(&self.player) {
            warn!("player hit an obstacle at {:?} on level {}", self.player, self.level + 1);
            self.reset_game(rng);
            return Outcome::GameOver;
        }
        if self.player != self.goal {
            return Outcome::Continue;
        }
        let message = self.config.level_texts.get(self.level).cloned().unwrap_or_default();
        self.level += 1;
        if self.level < self.level_count() {
            self.reset_level(rng);
            Outcome::LevelComplete { message, level: self.level }
        } else {
            info!("all {} levels complete", self.level_count());
            self.reset_game(rng);
            Outcome::GameComplete { message }
        }
    }

    /// Move then resolve; one input event.
    pub fn apply_move<R: Rng + ?Sized>(&mut self, dir: Direction, rng: &mut R) -> Outcome {
        self.move_player(dir);
        self.resolve(rng)
    }

    /// Random-walk every obstacle one step. Returns how many moved.
    pub fn move_obstacles<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let moved = obstacles::wander(rng, &mut self.obstacles, self.config.grid_count, self.player, self.goal);
        trace!("tick moved {moved}/{} obstacles", self.obstacles.len());
        moved
    }

    /// One obstacle-movement tick followed by the usual resolve.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Outcome {
        self.move_obstacles(rng);
        self.resolve(rng)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid_count: self.config.grid_count,
            level: self.level,
            levels: self.level_count(),
            player: self.player,
            goal: self.goal,
            obstacles: &self.obstacles,
        }
    }
}
