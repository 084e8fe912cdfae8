//! Command palette reducer
//!
//! Handles CommandPalette-specific actions except activation, which also
//! moves the page and is therefore reduced at the app level.

use crate::actions::CommandPaletteAction;
use crate::state::{CommandPaletteState, SelectionMove};

/// Reducer for command palette state.
///
/// This is a pure state transformation - no side effects or dispatching.
pub fn reduce(mut state: CommandPaletteState, action: &CommandPaletteAction) -> CommandPaletteState {
    match action {
        CommandPaletteAction::Open => state.open(),
        CommandPaletteAction::Toggle => state.toggle_via_shortcut(),
        CommandPaletteAction::DismissEscape => state.dismiss_via_escape(),
        CommandPaletteAction::FocusInput => state.focus_input(),

        CommandPaletteAction::NavigateNext => state.move_selection(SelectionMove::Down),
        CommandPaletteAction::NavigatePrev => state.move_selection(SelectionMove::Up),

        CommandPaletteAction::Char(c) => state.push_char(*c),
        CommandPaletteAction::Backspace => state.pop_char(),
        CommandPaletteAction::Clear => state.clear_query(),

        CommandPaletteAction::Activate(_) => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PaletteEntry;
    use crate::state::InputFocus;

    fn palette() -> CommandPaletteState {
        CommandPaletteState::new(vec![
            PaletteEntry::new("Home", "#home"),
            PaletteEntry::new("About", "#about"),
            PaletteEntry::new("Projects", "#projects"),
        ])
    }

    #[test]
    fn test_typing_filters_and_backspace_restores() {
        let mut state = reduce(palette(), &CommandPaletteAction::Open);
        state = reduce(state, &CommandPaletteAction::Char('P'));
        state = reduce(state, &CommandPaletteAction::Char('r'));
        assert_eq!(state.visible_len(), 1);
        assert_eq!(state.selected_entry().unwrap().label, "Projects");

        state = reduce(state, &CommandPaletteAction::Backspace);
        state = reduce(state, &CommandPaletteAction::Backspace);
        assert_eq!(state.query(), "");
        assert_eq!(state.visible_len(), 3);
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_clear_keeps_palette_open() {
        let mut state = reduce(palette(), &CommandPaletteAction::Open);
        state = reduce(state, &CommandPaletteAction::Char('x'));
        assert_eq!(state.visible_len(), 0);

        state = reduce(state, &CommandPaletteAction::Clear);
        assert!(state.is_open());
        assert_eq!(state.visible_len(), 3);
    }

    #[test]
    fn test_navigation_clamps() {
        let mut state = reduce(palette(), &CommandPaletteAction::Open);
        for _ in 0..5 {
            state = reduce(state, &CommandPaletteAction::NavigateNext);
        }
        assert_eq!(state.selected_index(), Some(2));

        for _ in 0..5 {
            state = reduce(state, &CommandPaletteAction::NavigatePrev);
        }
        assert_eq!(state.selected_index(), Some(0));
    }

    #[test]
    fn test_toggle_and_escape() {
        let mut state = reduce(palette(), &CommandPaletteAction::Toggle);
        assert!(state.is_open());
        assert_eq!(state.focus(), InputFocus::Pending);

        state = reduce(state, &CommandPaletteAction::FocusInput);
        assert_eq!(state.focus(), InputFocus::Focused);

        state = reduce(state, &CommandPaletteAction::DismissEscape);
        assert!(!state.is_open());

        state = reduce(state, &CommandPaletteAction::DismissEscape);
        assert!(!state.is_open());
    }
}
