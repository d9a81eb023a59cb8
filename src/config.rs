//! Runtime configuration, read from JSON embedded in the host page.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Reward strings revealed when a level is cleared, in level order.
pub const DEFAULT_LEVEL_TEXTS: &[&str] = &[
    "Congratulations! You've unlocked week 1's topic: Data-Centric AI",
    "Great job! Next up, week 2: Generative AI in Business",
    "Well done! Discover on week 3: AI-Gedreven Customer Experience",
    "Awesome! Here's week 4: Customization of AI Models",
    "You're a star! Final topic on week 5: Human-AI Collaboration",
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cells per side of the square play area.
    pub grid_count: u8,
    /// Obstacles placed on level 0; each later level adds one.
    pub base_obstacles: usize,
    /// Obstacle tick period in milliseconds.
    pub tick_ms: u32,
    /// When false obstacles stay where they were placed and no timer runs.
    pub animate_obstacles: bool,
    /// Upper bound on the canvas edge in CSS pixels.
    pub max_canvas_px: u32,
    pub level_texts: Vec<String>,
    pub canvas_id: String,
    pub message_id: String,
    pub level_id: String,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_count: 5,
            base_obstacles: 3,
            tick_ms: 1000,
            animate_obstacles: true,
            max_canvas_px: 500,
            level_texts: DEFAULT_LEVEL_TEXTS.iter().map(|s| s.to_string()).collect(),
            canvas_id: "gameCanvas".into(),
            message_id: "message".into(),
            level_id: "level".into(),
            log_level: "info".into(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_count < 2 {
            return Err(GameError::InvalidConfig(format!(
                "grid_count must be at least 2, got {}",
                self.grid_count
            )));
        }
        let cap = self.capacity().saturating_sub(2);
        if self.base_obstacles > cap {
            return Err(GameError::InvalidConfig(format!(
                "base_obstacles must be at most {cap} on a {0}x{0} grid, got {1}",
                self.grid_count, self.base_obstacles
            )));
        }
        if self.tick_ms == 0 {
            return Err(GameError::InvalidConfig("tick_ms must be positive".into()));
        }
        if self.max_canvas_px == 0 {
            return Err(GameError::InvalidConfig("max_canvas_px must be positive".into()));
        }
        if self.level_texts.is_empty() {
            return Err(GameError::InvalidConfig("level_texts must not be empty".into()));
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| GameError::InvalidConfig(format!("unknown log_level '{}'", self.log_level)))
    }

    /// Number of cells on the board.
    pub fn capacity(&self) -> usize {
        crate::game::obstacles::capacity(self.grid_count)
    }
}
