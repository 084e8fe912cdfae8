//! Translation Middleware
//!
//! Translates generic Navigation and TextInput actions into view-specific
//! actions using the active view's translate methods.
//!
//! Translated actions are dispatched, so they go through the full middleware chain.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that translates generic actions via the active view
pub struct TranslationMiddleware;

impl TranslationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TranslationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for TranslationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let translated = match action {
            Action::Navigate(nav) => state
                .active_view()
                .and_then(|view| view.translate_navigation(*nav)),
            Action::TextInput(input) => state
                .active_view()
                .and_then(|view| view.translate_text_input(input.clone())),
            _ => return true,
        };

        match translated {
            Some(translated) => {
                log::debug!(
                    "TranslationMiddleware: Translating {:?} to {:?}",
                    action,
                    translated
                );
                dispatcher.dispatch(translated);
            }
            None => log::debug!("Action not handled by active view: {:?}", action),
        }

        // Generic actions never reach the reducer
        false
    }
}
