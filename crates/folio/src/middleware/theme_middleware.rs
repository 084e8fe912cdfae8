//! Theme Middleware
//!
//! Persists the theme preference whenever the viewer changes it. Saving is
//! best effort: a failure is logged and the session continues with the new
//! theme.

use std::path::PathBuf;

use folio_config::{Preferences, ThemeMode};

use crate::actions::{Action, ThemeAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct ThemeMiddleware {
    /// Where preferences are stored; `None` disables persistence
    path: Option<PathBuf>,
}

impl ThemeMiddleware {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    fn persist(&self, mode: ThemeMode) {
        let Some(path) = &self.path else {
            return;
        };
        let preferences = Preferences { theme_pref: mode };
        match preferences.save_to_path(path) {
            Ok(()) => log::debug!("Saved theme preference {} to {}", mode, path.display()),
            Err(err) => log::warn!("Failed to save theme preference: {err:#}"),
        }
    }
}

impl Middleware for ThemeMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        if let Action::Theme(ThemeAction::Cycle) = action {
            self.persist(state.theme_mode.next());
        }
        true
    }
}
