//! Browser driver
//!
//! The page owns the canvas and calls `frame()` from requestAnimationFrame;
//! each call runs one tick and hands back the snapshot as JSON for drawing.

use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

use crate::config::GameConfig;
use crate::input::{Key, KeyboardState};
use crate::sim::GameSession;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Lane Runner (web) loaded");
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// A session plus the keyboard state feeding it
#[wasm_bindgen]
pub struct WebSession {
    session: GameSession,
    keyboard: KeyboardState,
}

#[wasm_bindgen]
impl WebSession {
    /// New session seeded from the clock
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebSession {
        Self::with_seed(js_sys::Date::now() as u64)
    }

    pub fn with_seed(seed: u64) -> WebSession {
        WebSession {
            session: GameSession::new(seed),
            keyboard: KeyboardState::default(),
        }
    }

    /// Session with tuning from a JSON string
    pub fn with_config(json: &str, seed: u64) -> Result<WebSession, JsValue> {
        let config = GameConfig::from_json(json).map_err(to_js_error)?;
        let session = GameSession::with_config(config, seed).map_err(to_js_error)?;
        Ok(WebSession {
            session,
            keyboard: KeyboardState::default(),
        })
    }

    pub fn key_down(&mut self, event: &KeyboardEvent) {
        if let Some(key) = Key::from_code(&event.code()) {
            // Keep Space/ArrowUp from scrolling the page
            if key == Key::Jump {
                event.prevent_default();
            }
            self.keyboard.key_down(key);
        }
    }

    pub fn key_up(&mut self, event: &KeyboardEvent) {
        if let Some(key) = Key::from_code(&event.code()) {
            self.keyboard.key_up(key);
        }
    }

    /// Window lost focus
    pub fn blur(&mut self) {
        self.keyboard.release_all();
    }

    pub fn start(&mut self) -> bool {
        self.session.start()
    }

    pub fn restart(&mut self) -> bool {
        self.keyboard.release_all();
        self.session.restart()
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Run one tick and return the snapshot JSON
    pub fn frame(&mut self) -> Result<String, JsValue> {
        let input = self.keyboard.take_input();
        self.session.tick(&input);
        serde_json::to_string(&self.session.snapshot()).map_err(to_js_error)
    }

    /// Snapshot JSON without advancing (initial draw)
    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.snapshot()).map_err(to_js_error)
    }

    /// Game-over summary JSON
    pub fn summary(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.summary()).map_err(to_js_error)
    }

    pub fn is_running(&self) -> bool {
        self.session.is_running()
    }

    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }
}

impl Default for WebSession {
    fn default() -> Self {
        Self::new()
    }
}
