// Browser tests; run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn boots_and_exposes_snapshot() {
    goal_grid::start_game_with_config(r#"{ "grid_count": 6, "animate_obstacles": false }"#).unwrap();
    let snap: serde_json::Value = serde_json::from_str(&goal_grid::board_snapshot().unwrap()).unwrap();
    assert_eq!(snap["grid_count"], 6);
    assert_eq!(snap["level"], 0);
    assert_eq!(snap["goal"]["x"], 5);
    assert_eq!(snap["obstacles"].as_array().unwrap().len(), 3);

    let doc = web_sys::window().unwrap().document().unwrap();
    assert!(doc.get_element_by_id("gameCanvas").is_some());
    assert_eq!(doc.get_element_by_id("level").unwrap().text_content().unwrap(), "Level: 1 / 5");
}

#[wasm_bindgen_test]
fn bad_config_is_rejected() {
    assert!(goal_grid::start_game_with_config(r#"{ "grid_count": 0 }"#).is_err());
}

#[wasm_bindgen_test]
fn boots_with_moving_obstacles() {
    goal_grid::start_game_with_config(r#"{ "tick_ms": 60000 }"#).unwrap();
    let snap: serde_json::Value = serde_json::from_str(&goal_grid::board_snapshot().unwrap()).unwrap();
    assert_eq!(snap["grid_count"], 5);
    assert_eq!(snap["player"]["x"], 0);
}
