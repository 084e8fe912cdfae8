use std::sync::Arc;

use ratatui::layout::Rect;

use crate::actions::{Action, CommandPaletteAction, GlobalAction};
use crate::layout::ScreenLayout;
use crate::reducers::{
    command_palette_reducer, page_reducer, project_filter_reducer, theme_reducer,
};
use crate::state::AppState;
use crate::views::{CommandPaletteView, ViewId};

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(global) => reduce_global(&mut state, global),

        Action::CommandPalette(CommandPaletteAction::Activate(row)) => {
            activate_palette_entry(&mut state, *row);
        }
        Action::CommandPalette(palette_action) => {
            state.command_palette =
                command_palette_reducer::reduce(state.command_palette, palette_action);
        }

        Action::Page(page_action) => {
            state.page = page_reducer::reduce(state.page, page_action, &state.nav_links);
        }

        Action::ProjectFilter(filter_action) => {
            let previous = state.project_filter.active;
            state.project_filter =
                project_filter_reducer::reduce(state.project_filter, filter_action);
            if state.project_filter.active != previous {
                state.relayout_page();
            }
        }

        Action::Theme(theme_action) => {
            state = theme_reducer::reduce(state, theme_action);
        }

        // Generic actions are translated by middleware and never reduced
        Action::Navigate(_) | Action::TextInput(_) => {}
    }

    sync_view_stack(&mut state);
    state
}

fn reduce_global(state: &mut AppState, action: &GlobalAction) {
    match action {
        GlobalAction::Quit => {
            state.running = false;
        }
        GlobalAction::Resize(width, height) => {
            state.screen = Rect::new(0, 0, *width, *height);
            let body = ScreenLayout::new(state.screen).body;
            let portfolio = Arc::clone(&state.portfolio);
            state.page.resize(
                &portfolio,
                state.project_filter.active_filter(),
                body.width,
                body.height,
            );
            log::debug!(
                "Resized to {}x{}, page is {} lines",
                width,
                height,
                state.page.content_height()
            );
        }
        GlobalAction::Tick(now) => {
            if state.page.is_animating() {
                state.page.animate();
            }
            state.typewriter.advance(*now);
        }
        // Raw input is consumed by middleware
        GlobalAction::KeyPressed(_) | GlobalAction::Mouse(_) => {}
    }
}

/// Activate the visible entry at `row`, or the current selection
fn activate_palette_entry(state: &mut AppState, row: Option<usize>) {
    let entry = match row {
        Some(row) => match state.command_palette.visible_entry(row) {
            Some(entry) => Some(entry.clone()),
            None => {
                log::debug!("No visible palette entry at row {}", row);
                return;
            }
        },
        None => None,
    };

    state.command_palette.activate(entry, &mut state.page);
}

/// The palette overlay is on the view stack exactly while it is open
fn sync_view_stack(state: &mut AppState) {
    let on_stack = state
        .view_stack
        .iter()
        .any(|view| view.view_id() == ViewId::CommandPalette);

    if state.command_palette.is_open() && !on_stack {
        log::debug!("Pushing view onto stack: {:?}", ViewId::CommandPalette);
        state.view_stack.push(Box::new(CommandPaletteView::new()));
    } else if !state.command_palette.is_open() && on_stack {
        log::debug!("Removing view from stack: {:?}", ViewId::CommandPalette);
        state
            .view_stack
            .retain(|view| view.view_id() != ViewId::CommandPalette);
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use folio_config::ThemeMode;

    use super::*;
    use crate::actions::{PageAction, ProjectFilterAction};
    use crate::content::Portfolio;

    fn state() -> AppState {
        let state = AppState::new(Portfolio::sample().unwrap(), ThemeMode::Auto);
        reduce(state, &Action::Global(GlobalAction::Resize(80, 24)))
    }

    fn palette(state: AppState, action: CommandPaletteAction) -> AppState {
        reduce(state, &Action::CommandPalette(action))
    }

    fn settle(mut state: AppState) -> AppState {
        let now = Instant::now();
        for i in 0..200 {
            state = reduce(
                state,
                &Action::Global(GlobalAction::Tick(now + Duration::from_millis(i * 50))),
            );
        }
        state
    }

    #[test]
    fn test_quit() {
        let state = reduce(state(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_resize_lays_out_page_for_body() {
        let state = state();
        assert_eq!(state.screen, Rect::new(0, 0, 80, 24));
        assert_eq!(state.page.width, 80);
        assert_eq!(state.page.viewport_height, 21);
        assert!(state.page.content_height() > 0);
    }

    #[test]
    fn test_palette_view_follows_open_state() {
        let state = palette(state(), CommandPaletteAction::Open);
        assert_eq!(state.view_stack.len(), 2);
        assert_eq!(
            state.active_view().map(|v| v.view_id()),
            Some(ViewId::CommandPalette)
        );

        // Opening twice does not stack two overlays
        let state = palette(state, CommandPaletteAction::Open);
        assert_eq!(state.view_stack.len(), 2);

        let state = palette(state, CommandPaletteAction::DismissEscape);
        assert_eq!(state.view_stack.len(), 1);
        assert_eq!(
            state.active_view().map(|v| v.view_id()),
            Some(ViewId::Portfolio)
        );
    }

    #[test]
    fn test_activate_selection_closes_and_scrolls() {
        let state = palette(state(), CommandPaletteAction::Open);
        let state = palette(state, CommandPaletteAction::Char('c'));
        let state = palette(state, CommandPaletteAction::Char('o'));
        let state = palette(state, CommandPaletteAction::Char('n'));
        assert_eq!(state.command_palette.selected_entry().unwrap().label, "Contact");

        let state = palette(state, CommandPaletteAction::Activate(None));
        assert!(!state.command_palette.is_open());
        assert!(state.page.is_animating());

        let state = settle(state);
        let expected = (state.page.document.anchor("#contact").unwrap().line as f32)
            .min(state.page.max_scroll());
        assert_eq!(state.page.scroll_top, expected);
    }

    #[test]
    fn test_activate_row_uses_visible_entries() {
        let state = palette(state(), CommandPaletteAction::Open);
        let label = state.command_palette.visible_entry(1).unwrap().label.clone();
        let target = state.command_palette.visible_entry(1).unwrap().target.clone();
        assert_eq!(label, "About");

        let state = palette(state, CommandPaletteAction::Activate(Some(1)));
        assert!(!state.command_palette.is_open());
        let expected =
            (state.page.document.anchor(&target).unwrap().line as f32).min(state.page.max_scroll());
        assert_eq!(state.page.scroll_target, Some(expected));
    }

    #[test]
    fn test_activate_invalid_row_is_noop() {
        let state = palette(state(), CommandPaletteAction::Open);
        let state = palette(state, CommandPaletteAction::Activate(Some(99)));
        assert!(state.command_palette.is_open());
        assert!(!state.page.is_animating());
    }

    #[test]
    fn test_activate_without_matches_keeps_palette_open() {
        let state = palette(state(), CommandPaletteAction::Open);
        let state = palette(state, CommandPaletteAction::Char('z'));
        let state = palette(state, CommandPaletteAction::Char('z'));
        assert_eq!(state.command_palette.visible_len(), 0);

        let state = palette(state, CommandPaletteAction::Activate(None));
        assert!(state.command_palette.is_open());
        assert!(!state.page.is_animating());
        assert_eq!(state.view_stack.len(), 2);
    }

    #[test]
    fn test_filter_change_relayouts_page() {
        let state = state();
        let before = state.page.content_height();
        let state = reduce(state, &Action::ProjectFilter(ProjectFilterAction::Next));
        assert_ne!(state.project_filter.active_filter(), "all");
        assert!(state.page.content_height() < before);
    }

    #[test]
    fn test_tick_advances_typewriter() {
        let state = state();
        assert!(!state.typewriter.is_complete());
        let state = settle(state);
        assert!(state.typewriter.is_complete());
        assert_eq!(state.typewriter.visible_text(), state.portfolio.headline);
    }

    #[test]
    fn test_nav_link_records_location() {
        let state = reduce(state(), &Action::Page(PageAction::FollowLink(0)));
        assert_eq!(state.page.location.as_deref(), Some("#home"));
    }
}
