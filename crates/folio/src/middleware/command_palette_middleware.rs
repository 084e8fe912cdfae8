//! Command Palette Middleware
//!
//! Requests input focus after the palette opens. The focus action is queued,
//! so it is reduced only after the open itself has been reduced.

use crate::actions::{Action, CommandPaletteAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// Middleware that schedules palette input focus
pub struct CommandPaletteMiddleware;

impl CommandPaletteMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CommandPaletteMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for CommandPaletteMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let opening = match action {
            Action::CommandPalette(CommandPaletteAction::Open) => true,
            Action::CommandPalette(CommandPaletteAction::Toggle) => {
                !state.command_palette.is_open()
            }
            _ => false,
        };

        if opening {
            dispatcher.dispatch(Action::CommandPalette(CommandPaletteAction::FocusInput));
        }

        true
    }
}
