use wasm_bindgen::JsValue;

use crate::compat::{String, format};
use crate::config::HistoryMode;
use crate::environment::{Environment, HistoryState};
use crate::error::{HistoryError, Result};

/// The browser window's `location` and `history`.
///
/// Reads `location.pathname` and `location.search`, and writes through
/// `history.replaceState` / `history.pushState`. The state argument is a fresh
/// empty object.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowEnvironment;

impl WindowEnvironment {
    pub fn new() -> Self {
        Self
    }

    fn location() -> Option<web_sys::Location> {
        web_sys::window().map(|window| window.location())
    }
}

impl Environment for WindowEnvironment {
    fn pathname(&self) -> String {
        Self::location()
            .and_then(|location| location.pathname().ok())
            .unwrap_or_default()
    }

    fn search(&self) -> String {
        Self::location()
            .and_then(|location| location.search().ok())
            .unwrap_or_default()
    }

    fn write_entry(
        &self,
        mode: HistoryMode,
        _state: &HistoryState,
        title: &str,
        url: &str,
    ) -> Result<()> {
        let window = web_sys::window().ok_or(HistoryError::Unavailable)?;
        let history = window.history().map_err(|_| HistoryError::Unavailable)?;
        let state = JsValue::from(js_sys::Object::new());

        let written = match mode {
            HistoryMode::Replace => history.replace_state_with_url(&state, title, Some(url)),
            HistoryMode::Push => history.push_state_with_url(&state, title, Some(url)),
        };
        written.map_err(|err| HistoryError::Rejected(format!("{err:?}")))
    }
}
