//! Browser bindings (`web` feature).
//!
//! Exposes a [`Session`] to JavaScript so the browser-side tracking SDK can
//! forward its visible / not-visible callbacks and the page can forward
//! button presses, then read back the door and button state each frame.

use std::time::Duration;

use wasm_bindgen::prelude::*;

use crate::input::{SessionEvent, TrackingObserver};
use crate::options::Options;
use crate::session::Session;
use crate::util::frame_timing::FrameClock;

/// Route `log` output to the browser console and install the panic hook.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        log::warn!("console logger not installed: {e}");
    }
}

/// A door session driven from JavaScript.
#[wasm_bindgen]
pub struct WebSession {
    session: Session,
    clock: FrameClock,
}

#[wasm_bindgen]
impl WebSession {
    /// Session from optional TOML options.
    #[wasm_bindgen(constructor)]
    pub fn new(options_toml: Option<String>) -> Result<WebSession, JsError> {
        let options = match options_toml {
            Some(toml_str) => Options::from_toml_str(&toml_str)
                .map_err(|e| JsError::new(&e.to_string()))?,
            None => Options::default(),
        };
        let clock = FrameClock::new(options.session.target_fps);
        Ok(Self {
            session: Session::with_options(options),
            clock,
        })
    }

    /// Tracking callback: target in view.
    #[wasm_bindgen(js_name = targetVisible)]
    pub fn target_visible(&mut self) {
        self.session.events_mut().on_target_visible();
    }

    /// Tracking callback: target out of view.
    #[wasm_bindgen(js_name = targetLost)]
    pub fn target_lost(&mut self) {
        self.session.events_mut().on_target_lost();
    }

    /// Trigger button pressed.
    pub fn trigger(&mut self) {
        self.session.push_event(SessionEvent::Trigger);
    }

    /// Abort the running cycle.
    pub fn reset(&mut self) {
        self.session.push_event(SessionEvent::Reset);
    }

    /// Keyboard input (`KeyboardEvent.code`). Returns whether it was bound.
    pub fn key(&mut self, code: &str) -> bool {
        self.session.handle_key(code).is_some()
    }

    /// Whether the frame limiter allows rendering now.
    #[wasm_bindgen(js_name = shouldRender)]
    pub fn should_render(&self) -> bool {
        self.clock.should_render()
    }

    /// Run one frame timed by the session's own clock.
    pub fn tick(&mut self) {
        let dt = self.clock.tick();
        self.session.frame(dt);
    }

    /// Run one frame with an explicit elapsed time in milliseconds.
    pub fn frame(&mut self, elapsed_ms: f64) {
        let dt = Duration::try_from_secs_f64(elapsed_ms / 1000.0)
            .unwrap_or(Duration::ZERO);
        self.session.frame(dt);
    }

    /// Smoothed frames per second of [`tick`](Self::tick).
    pub fn fps(&self) -> f32 {
        self.clock.fps()
    }

    /// Whether the door group should be shown.
    #[wasm_bindgen(getter, js_name = doorsVisible)]
    pub fn doors_visible(&self) -> bool {
        self.session.presentation().doors_visible
    }

    /// Whether the trigger button should be shown.
    #[wasm_bindgen(getter, js_name = triggerEnabled)]
    pub fn trigger_enabled(&self) -> bool {
        self.session.presentation().trigger_enabled
    }

    /// Door progress (0 = closed, 1 = open).
    #[wasm_bindgen(getter, js_name = doorProgress)]
    pub fn door_progress(&self) -> f32 {
        self.session.presentation().door_progress
    }

    /// Y rotation of each leaf in radians.
    #[wasm_bindgen(js_name = leafAngles)]
    pub fn leaf_angles(&self) -> Vec<f32> {
        self.session
            .hinges()
            .leaf_angles(self.door_progress())
            .to_vec()
    }

    /// Both leaf model matrices, column-major, 32 floats.
    #[wasm_bindgen(js_name = doorMatrices)]
    pub fn door_matrices(&self) -> Vec<f32> {
        self.session
            .door_transforms()
            .iter()
            .flat_map(|m| m.to_cols_array())
            .collect()
    }

    /// Current session snapshot as JSON.
    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> Result<String, JsError> {
        serde_json::to_string(&self.session.snapshot())
            .map_err(|e| JsError::new(&e.to_string()))
    }
}
