//! Goal Grid core crate.
//!
//! A player token walks a small square grid toward the bottom-right goal cell
//! while obstacles wander around it. Each cleared level reveals the next
//! weekly topic message; touching an obstacle starts over from level 0.
//!
//! Game rules live in [`game`] and run natively; the browser side (canvas,
//! DOM text, listeners, timer) is the private `board` module.

use wasm_bindgen::prelude::*;

mod board;
pub mod config;
pub mod error;
pub mod game;
mod logging;

pub use config::{DEFAULT_LEVEL_TEXTS, GameConfig};
pub use error::GameError;
pub use game::{Direction, GameState, Outcome, Position};

/// Id of the optional `<script type="application/json">` element holding a config.
pub const CONFIG_ELEMENT_ID: &str = "goal-grid-config";

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Start with the page's embedded config, or the defaults when there is none.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    let embedded = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    let config = match embedded {
        Some(json) if !json.trim().is_empty() => GameConfig::from_json(&json)?,
        _ => GameConfig::default(),
    };
    boot(config)
}

#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    boot(GameConfig::from_json(json)?)
}

/// JSON view of the running board (player, goal, obstacles, level).
#[wasm_bindgen]
pub fn board_snapshot() -> Option<String> {
    board::snapshot_json()
}

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn boot(config: GameConfig) -> Result<(), JsValue> {
    logging::init(config.level_filter()?);
    board::start_board_mode(config)?;
    Ok(())
}
