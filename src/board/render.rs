use web_sys::CanvasRenderingContext2d;

use crate::game::GameState;
use crate::game::scene::{self, BACKGROUND, GRID_LINE};

/// Repaint the whole board onto a square canvas of edge `size`.
pub fn render(ctx: &CanvasRenderingContext2d, state: &GameState, size: f64) {
    let n = state.grid_count() as f64;
    let cell = size / n;

    ctx.clear_rect(0.0, 0.0, size, size);
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, size, size);

    ctx.set_stroke_style_str(GRID_LINE);
    ctx.set_line_width(1.0);
    for i in 0..=state.grid_count() {
        let at = i as f64 * cell;
        line(ctx, at, 0.0, at, size);
        line(ctx, 0.0, at, size, at);
    }

    for (pos, layer) in scene::cells(state) {
        ctx.set_fill_style_str(layer.fill());
        ctx.fill_rect(pos.x as f64 * cell, pos.y as f64 * cell, cell, cell);
    }
}

fn line(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}
