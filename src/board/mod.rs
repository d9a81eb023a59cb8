//! Browser glue for the grid game.
//!
//! A single session lives in a thread-local: the game state, its RNG, the canvas
//! and the two DOM text regions. Keyboard, touch, resize and timer callbacks all
//! borrow it, run to completion, and release it before any blocking `alert`.
//!
//! Per event the order is: mutate, redraw, resolve collisions, announce, redraw.
//! The obstacle ticker is stopped whenever the board is rebuilt and started
//! again once the new level's obstacles are in place.

use std::cell::{Cell, RefCell};

use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, window};

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::game::input::{SwipeTracker, direction_for_key};
use crate::game::scene::canvas_size;
use crate::game::{Direction, GameState, Outcome};

mod render;
mod ticker;

use ticker::Ticker;

pub const GAME_OVER_ALERT: &str = "You hit an obstacle! Game over.";
pub const LEVEL_COMPLETE_ALERT: &str = "Level Complete! Weekly AI Update topic revealed.";
pub const GAME_COMPLETE_ALERT: &str = "You have completed all levels! Well done.";

struct Session {
    state: GameState,
    rng: StdRng,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    message_el: Element,
    level_el: Element,
    size: f64,
    swipe: SwipeTracker,
}

impl Session {
    fn render(&self) {
        render::render(&self.ctx, &self.state, self.size);
    }

    /// Fit the canvas to the viewport and repaint.
    fn resize(&mut self) {
        let max = self.state.config().max_canvas_px;
        let (w, h) = window()
            .map(|win| {
                let w = win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(max as f64);
                let h = win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(max as f64);
                (w, h)
            })
            .unwrap_or((max as f64, max as f64));
        self.size = canvas_size(w, h, max);
        self.canvas.set_width(self.size as u32);
        self.canvas.set_height(self.size as u32);
        self.render();
    }

    fn show_level(&self) {
        let text = format!("Level: {} / {}", self.state.level() + 1, self.state.level_count());
        self.level_el.set_text_content(Some(&text));
    }

    fn show_message(&self, text: &str) {
        self.message_el.set_text_content(Some(text));
    }
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
    static TICKER: RefCell<Option<Ticker>> = const { RefCell::new(None) };
    static LISTENERS: Cell<bool> = const { Cell::new(false) };
}

fn with_session<T>(f: impl FnOnce(&mut Session) -> T) -> Option<T> {
    SESSION.with(|cell| cell.borrow_mut().as_mut().map(f))
}

pub fn start_board_mode(config: GameConfig) -> Result<()> {
    let win = window().ok_or(GameError::NoWindow)?;
    let doc = win.document().ok_or(GameError::NoDocument)?;

    let canvas = canvas_element(&doc, &config.canvas_id)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(GameError::NoContext)?
        .dyn_into()
        .map_err(|_| GameError::NoContext)?;
    let message_el = text_region(&doc, &config.message_id, "margin-top:12px; font-family:sans-serif; font-size:18px; text-align:center;")?;
    let level_el = text_region(&doc, &config.level_id, "margin-top:6px; font-family:sans-serif; font-size:15px; color:#555; text-align:center;")?;

    stop_ticker();
    let mut rng = StdRng::from_entropy();
    let animate = config.animate_obstacles;
    let tick_ms = config.tick_ms;
    let state = GameState::new(config, &mut rng);
    let mut session = Session {
        state,
        rng,
        canvas: canvas.clone(),
        ctx,
        message_el,
        level_el,
        size: 0.0,
        swipe: SwipeTracker::default(),
    };
    session.show_message("");
    session.show_level();
    session.resize();
    SESSION.with(|cell| cell.replace(Some(session)));

    if !LISTENERS.with(Cell::get) {
        install_listeners(&win, &doc, &canvas)?;
        LISTENERS.with(|flag| flag.set(true));
    }

    TICKER.with(|cell| cell.replace(animate.then(|| Ticker::new(tick_ms, on_tick))));
    start_ticker();
    info!("board started ({} ms ticks, ticking: {})", tick_ms, ticker_running());
    Ok(())
}

/// JSON snapshot of the running game, if one is running.
pub fn snapshot_json() -> Option<String> {
    with_session(|s| serde_json::to_string(&s.state.snapshot()))
        .and_then(|r| r.map_err(|e| error!("snapshot failed: {e}")).ok())
}

fn canvas_element(doc: &Document, id: &str) -> Result<HtmlCanvasElement> {
    if let Some(el) = doc.get_element_by_id(id) {
        return el
            .dyn_into()
            .map_err(|_| GameError::Js(format!("element '{id}' is not a canvas")));
    }
    let c: HtmlCanvasElement = doc
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| GameError::Js("created element is not a canvas".into()))?;
    c.set_id(id);
    c.set_attribute("style", "display:block; margin:0 auto; touch-action:none;")?;
    doc.body().ok_or(GameError::NoBody)?.append_child(&c)?;
    Ok(c)
}

fn text_region(doc: &Document, id: &str, style: &str) -> Result<Element> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el);
    }
    let div = doc.create_element("div")?;
    div.set_id(id);
    div.set_attribute("style", style)?;
    doc.body().ok_or(GameError::NoBody)?.append_child(&div)?;
    Ok(div)
}

fn install_listeners(win: &web_sys::Window, doc: &Document, canvas: &HtmlCanvasElement) -> Result<()> {
    // Keyboard
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            if let Some(dir) = direction_for_key(&evt.key()) {
                evt.prevent_default();
                handle_move(dir);
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // Swipe start
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            if let Some(t) = evt.touches().get(0) {
                let (x, y) = (t.client_x() as f64, t.client_y() as f64);
                with_session(|s| s.swipe.begin(x, y));
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // Keep the page from scrolling under a swipe
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            evt.prevent_default();
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // Swipe end
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            let Some(t) = evt.changed_touches().get(0) else {
                return;
            };
            let (x, y) = (t.client_x() as f64, t.client_y() as f64);
            if let Some(dir) = with_session(|s| s.swipe.finish(x, y)).flatten() {
                handle_move(dir);
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    // Resize
    {
        let closure = Closure::wrap(Box::new(move || {
            with_session(Session::resize);
        }) as Box<dyn FnMut()>);
        win.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn handle_move(dir: Direction) {
    let moved = with_session(|s| {
        let moved = s.state.move_player(dir);
        if moved {
            s.render();
        }
        moved
    });
    if moved == Some(true) {
        resolve();
    }
}

fn on_tick() {
    let moved = with_session(|s| {
        let moved = s.state.move_obstacles(&mut s.rng);
        if moved > 0 {
            s.render();
        }
        moved
    });
    if moved.is_some_and(|n| n > 0) {
        resolve();
    }
}

/// Collision check after any mutation, then announce and rebuild as needed.
fn resolve() {
    resolve_with(alert);
}

/// [`resolve`] with the blocking announcement supplied by the caller.
fn resolve_with(announce: impl FnOnce(&str)) {
    let Some(outcome) = with_session(|s| s.state.resolve(&mut s.rng)) else {
        return;
    };
    if !outcome.resets_board() {
        return;
    }
    stop_ticker();
    if let Some(text) = outcome.message() {
        with_session(|s| s.show_message(text));
    }
    announce(match &outcome {
        Outcome::GameOver => GAME_OVER_ALERT,
        Outcome::LevelComplete { .. } => LEVEL_COMPLETE_ALERT,
        Outcome::GameComplete { .. } => GAME_COMPLETE_ALERT,
        Outcome::Continue => return,
    });
    with_session(|s| {
        if matches!(outcome, Outcome::GameOver | Outcome::GameComplete { .. }) {
            s.show_message("");
        }
        s.show_level();
        s.render();
    });
    start_ticker();
}

fn alert(text: &str) {
    if let Some(win) = window() {
        if let Err(e) = win.alert_with_message(text) {
            error!("alert failed: {}", GameError::from(e));
        }
    }
}

fn start_ticker() {
    TICKER.with(|cell| {
        if let Some(t) = cell.borrow_mut().as_mut() {
            if let Err(e) = t.start() {
                error!("could not start obstacle ticker: {e}");
            }
        }
    });
}

fn ticker_running() -> bool {
    TICKER.with(|cell| cell.borrow().as_ref().is_some_and(Ticker::is_running))
}

fn stop_ticker() {
    TICKER.with(|cell| {
        if let Some(t) = cell.borrow_mut().as_mut() {
            t.stop();
        }
    });
}
