//! Fixed-period obstacle tick backed by `setInterval`.

use log::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::error::{GameError, Result};

/// Restartable interval task. The JS callback is created once and kept for
/// the ticker's lifetime, so stopping from inside the callback is safe.
pub struct Ticker {
    callback: Closure<dyn FnMut()>,
    period_ms: i32,
    handle: Option<i32>,
}

impl Ticker {
    pub fn new(period_ms: u32, on_tick: impl FnMut() + 'static) -> Self {
        Self {
            callback: Closure::wrap(Box::new(on_tick) as Box<dyn FnMut()>),
            period_ms: period_ms.min(i32::MAX as u32) as i32,
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Start ticking; no-op while already running.
    pub fn start(&mut self) -> Result<()> {
        if self.is_running() {
            return Ok(());
        }
        let win = window().ok_or(GameError::NoWindow)?;
        let id = win.set_interval_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            self.period_ms,
        )?;
        debug!("ticker started ({} ms)", self.period_ms);
        self.handle = Some(id);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(win) = window() {
                win.clear_interval_with_handle(id);
            }
            debug!("ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
