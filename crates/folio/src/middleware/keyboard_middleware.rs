//! KeyboardMiddleware - translates keyboard events into context-aware actions
//!
//! This middleware uses a three-layer approach to handle keyboard input:
//!
//! ## Layer 1: Priority Keys
//! Keys that always work regardless of context (Ctrl+C, Ctrl/Cmd+K, Esc).
//! These are handled directly before any other processing.
//!
//! ## Layer 2: Capabilities
//! Route keys based on view capabilities. Views with TEXT_INPUT capability
//! route character keys to text input rather than keybindings.
//!
//! ## Layer 3: Keymap + Gating
//! Look up keys in the keymap, then check if the active view accepts the action.

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::{Action, CommandPaletteAction, GlobalAction, NavigationAction, TextInputAction};
use crate::command_id::CommandId;
use crate::dispatcher::Dispatcher;
use crate::keybindings::PendingKey;
use crate::middleware::Middleware;
use crate::state::AppState;

/// KeyboardMiddleware handles keyboard input using a three-layer approach
pub struct KeyboardMiddleware {
    /// Pending key for two-key sequences
    pending_key: Option<PendingKey>,
}

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self { pending_key: None }
    }

    /// Handle a key event using the three-layer approach
    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let view = state.active_view();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 1: Priority keys (always work)
        // ═══════════════════════════════════════════════════════════════════

        // Ctrl+C: Emergency quit - always works
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return false;
        }

        // Ctrl/Cmd+K: toggles the palette even while its input has focus
        if state
            .keymap
            .is_bound_to(&normalize_shortcut(key), CommandId::PaletteToggle)
        {
            log::debug!("Layer 1: palette shortcut - dispatching Toggle");
            self.pending_key = None;
            dispatcher.dispatch(Action::CommandPalette(CommandPaletteAction::Toggle));
            return false;
        }

        // Esc: views with text input decide what it means, elsewhere it only
        // dismisses an open palette
        if key.code == KeyCode::Esc {
            self.pending_key = None;
            if capabilities.accepts_text_input() {
                log::debug!("Layer 1: Esc - routing to TextInput::Escape (view has TEXT_INPUT)");
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else if state.command_palette.is_open() {
                dispatcher.dispatch(Action::CommandPalette(CommandPaletteAction::DismissEscape));
            }
            return false;
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 2: Capability-based routing
        // ═══════════════════════════════════════════════════════════════════

        if capabilities.accepts_text_input() {
            // Clear any pending sequence when in text input mode
            self.pending_key = None;

            if let KeyCode::Char(c) = key.code {
                // Route character keys to text input (unless Ctrl/Alt/Cmd modifier)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
                {
                    log::debug!("Layer 2: TEXT_INPUT - routing char '{}' to TextInput", c);
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Char(c)));
                    return false;
                }

                // Ctrl+U - Unix line kill (clear line)
                if key.modifiers.contains(KeyModifiers::CONTROL) && c == 'u' {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::ClearLine));
                    return false;
                }
            }

            match key.code {
                KeyCode::Backspace => {
                    if key.modifiers.contains(KeyModifiers::SUPER) {
                        // Cmd+Backspace on Mac - clear entire line
                        dispatcher.dispatch(Action::TextInput(TextInputAction::ClearLine));
                    } else {
                        dispatcher.dispatch(Action::TextInput(TextInputAction::Backspace));
                    }
                    return false;
                }
                KeyCode::Enter => {
                    dispatcher.dispatch(Action::TextInput(TextInputAction::Confirm));
                    return false;
                }
                _ => {}
            }

            if capabilities.supports_item_navigation() {
                let nav = match key.code {
                    KeyCode::Down => Some(NavigationAction::Next),
                    KeyCode::Up => Some(NavigationAction::Previous),
                    KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
                        Some(NavigationAction::Previous)
                    }
                    KeyCode::Tab => Some(NavigationAction::Next),
                    KeyCode::BackTab => Some(NavigationAction::Previous),
                    _ => None,
                };
                if let Some(nav) = nav {
                    dispatcher.dispatch(Action::Navigate(nav));
                    return false;
                }
            }

            // Other keys in text input mode fall through to the keymap
        }

        // ═══════════════════════════════════════════════════════════════════
        // LAYER 3: Keymap lookup + Gating
        // ═══════════════════════════════════════════════════════════════════

        let matched = state.keymap.match_key(&key, self.pending_key.as_ref());
        self.pending_key = None;

        if let Some(pending_char) = matched.pending {
            self.pending_key = Some(PendingKey {
                key: pending_char,
                timestamp: Instant::now(),
            });
            log::debug!(
                "Layer 3: Waiting for second key in sequence (first: {})",
                pending_char
            );
            return false;
        }

        // Try each matched command until the active view accepts one
        for cmd_id in matched.commands {
            let action = cmd_id.to_action();

            match view {
                Some(view) if view.accepts_action(&action) => {
                    log::debug!("Layer 3: Command {:?} accepted by view, dispatching", cmd_id);
                    dispatcher.dispatch(action);
                    return false;
                }
                Some(view) => {
                    log::debug!(
                        "Layer 3: Command {:?} rejected by view {:?}, trying next",
                        cmd_id,
                        view.view_id()
                    );
                }
                None => {
                    dispatcher.dispatch(action);
                    return false;
                }
            }
        }

        // Unhandled keys are consumed (not passed through)
        false
    }
}

/// Terminals report Ctrl+Shift+K as an uppercase char with SHIFT set;
/// the shortcut should fire either way.
fn normalize_shortcut(key: KeyEvent) -> KeyEvent {
    match key.code {
        KeyCode::Char(c)
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER) =>
        {
            KeyEvent::new(
                KeyCode::Char(c.to_ascii_lowercase()),
                key.modifiers - KeyModifiers::SHIFT,
            )
        }
        _ => key,
    }
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        // Only intercept Global KeyPressed actions
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            return self.handle_key(*key, state, dispatcher);
        }

        // All other actions pass through
        true
    }
}
