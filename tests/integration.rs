// Integration tests (native) for the `goal-grid` crate.
// These drive the public game API only and never touch wasm/browser APIs, so
// they run under a plain `cargo test` on the host.

use std::collections::HashSet;

use goal_grid::game::obstacles::obstacle_count;
use goal_grid::{Direction, GameConfig, GameState, Outcome, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_board_ok(state: &GameState) {
    let n = state.grid_count();
    let cells: HashSet<Position> = state.obstacles().iter().copied().collect();
    assert_eq!(cells.len(), state.obstacles().len(), "duplicate obstacle");
    assert!(state.obstacles().iter().all(|o| o.in_bounds(n)));
    assert!(state.player().in_bounds(n));
    assert!(!cells.contains(&state.goal()), "obstacle on goal");
}

// Worked example: 5x5, level 0, player one step left of the goal.
#[test]
fn stepping_onto_goal_reveals_first_message() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut state = GameState::with_layout(GameConfig::default(), 0, Position::new(3, 4), vec![]);
    assert_eq!(state.goal(), Position::new(4, 4));

    let outcome = state.apply_move(Direction::Right, &mut rng);
    assert_eq!(outcome.message(), Some(goal_grid::DEFAULT_LEVEL_TEXTS[0]));
    assert_eq!(state.level(), 1);
}

#[test]
fn fresh_levels_respect_cap_and_never_overlap() {
    for grid in 2u8..=7 {
        let config = GameConfig { grid_count: grid, base_obstacles: 3, ..GameConfig::default() };
        let texts = config.level_texts.len();
        let mut rng = StdRng::seed_from_u64(grid as u64);
        let mut state = GameState::new(config, &mut rng);
        for level in 0..texts {
            let cap = grid as usize * grid as usize - 2;
            assert!(state.obstacles().len() <= cap);
            assert_eq!(state.obstacles().len(), obstacle_count(level, 3, grid));
            assert!(!state.obstacles().contains(&state.player()));
            assert_board_ok(&state);

            // Teleport the player next to the goal on an empty board to advance.
            let config = state.config().clone();
            state = GameState::with_layout(config, level, Position::new(grid - 2, grid - 1), vec![]);
            state.apply_move(Direction::Right, &mut rng);
        }
    }
}

#[test]
fn random_walks_stay_on_board() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut state = GameState::new(GameConfig::default(), &mut rng);
    for _ in 0..2_000 {
        let dir = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
        let level_before = state.level();
        match state.apply_move(dir, &mut rng) {
            Outcome::Continue => assert_eq!(state.level(), level_before),
            Outcome::GameOver => assert_eq!(state.level(), 0),
            Outcome::LevelComplete { level, .. } => {
                assert_eq!(level, level_before + 1);
                assert_eq!(state.level(), level);
            }
            Outcome::GameComplete { .. } => {
                assert_eq!(level_before, state.level_count() - 1);
                assert_eq!(state.level(), 0);
            }
        }
        if rng.gen_bool(0.3) {
            state.tick(&mut rng);
        }
        assert_board_ok(&state);
    }
}

#[test]
fn every_obstacle_cell_is_fatal() {
    let mut rng = StdRng::seed_from_u64(5);
    let obstacles = vec![Position::new(2, 1), Position::new(1, 3), Position::new(3, 3)];
    for &target in &obstacles {
        for dir in Direction::ALL {
            // Stand on the cell the move comes from, if it is free and on the board.
            let (dx, dy) = dir.delta();
            let from_x = target.x as i16 - dx as i16;
            let from_y = target.y as i16 - dy as i16;
            if !(0..5).contains(&from_x) || !(0..5).contains(&from_y) {
                continue;
            }
            let from = Position::new(from_x as u8, from_y as u8);
            if obstacles.contains(&from) {
                continue;
            }
            let mut state = GameState::with_layout(GameConfig::default(), 2, from, obstacles.clone());
            assert_eq!(state.apply_move(dir, &mut rng), Outcome::GameOver);
            assert_eq!(state.level(), 0);
            assert_eq!(state.player(), Position::new(0, 0));
        }
    }
}

#[test]
fn full_run_wraps_back_to_level_zero() {
    let mut rng = StdRng::seed_from_u64(8);
    let config = GameConfig::default();
    let levels = config.level_texts.len();
    let mut seen = Vec::new();
    let mut level = 0;
    loop {
        let mut state = GameState::with_layout(config.clone(), level, Position::new(4, 3), vec![]);
        let outcome = state.apply_move(Direction::Down, &mut rng);
        seen.push(outcome.message().map(str::to_owned));
        if let Outcome::GameComplete { .. } = outcome {
            assert_eq!(state.level(), 0);
            break;
        }
        level = state.level();
    }
    assert_eq!(seen.len(), levels);
    assert!(seen.iter().all(Option::is_some));
}

#[test]
fn ticks_only_rearrange_obstacles() {
    let mut rng = StdRng::seed_from_u64(1234);
    let config = GameConfig { grid_count: 4, base_obstacles: 10, ..GameConfig::default() };
    let mut state = GameState::new(config, &mut rng);
    let count = state.obstacles().len();
    for _ in 0..1_000 {
        assert_eq!(state.tick(&mut rng), Outcome::Continue);
        assert_eq!(state.obstacles().len(), count);
        assert_eq!(state.level(), 0);
        assert_board_ok(&state);
    }
}

#[test]
fn static_variant_config_parses() {
    let config = GameConfig::from_json(r#"{ "animate_obstacles": false, "level_texts": ["only one"] }"#).unwrap();
    assert!(!config.animate_obstacles);
    let mut rng = StdRng::seed_from_u64(0);
    let mut state = GameState::with_layout(config, 0, Position::new(3, 4), vec![]);
    assert_eq!(
        state.apply_move(Direction::Right, &mut rng),
        Outcome::GameComplete { message: "only one".into() }
    );
}
