//! MouseMiddleware - hit tests raw mouse events
//!
//! Uses the same geometry as rendering (see `crate::layout`) to turn clicks
//! and wheel events into targeted actions.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::actions::{
    Action, CommandPaletteAction, GlobalAction, PageAction, ProjectFilterAction, ThemeAction,
};
use crate::dispatcher::Dispatcher;
use crate::document::{LineKind, PAGE_PADDING};
use crate::layout::{self, HeaderButtons, PaletteLayout, ScreenLayout};
use crate::middleware::Middleware;
use crate::state::AppState;

/// Lines scrolled per wheel notch
const WHEEL_LINES: i32 = 3;

pub struct MouseMiddleware;

impl MouseMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_mouse(&self, mouse: MouseEvent, state: &AppState, dispatcher: &Dispatcher) {
        let (column, row) = (mouse.column, mouse.row);

        if state.command_palette.is_open() {
            // Only rows of the result list react while the palette is open
            if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                let palette = PaletteLayout::new(state.screen);
                let offset = layout::list_offset(
                    state.command_palette.selected_index(),
                    palette.list.height as usize,
                );
                if let Some(index) = palette
                    .row_at(column, row, offset)
                    .filter(|index| *index < state.command_palette.visible_len())
                {
                    log::debug!("Mouse: palette row {} clicked", index);
                    dispatcher.dispatch(Action::CommandPalette(CommandPaletteAction::Activate(
                        Some(index),
                    )));
                }
            }
            return;
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => {
                dispatcher.dispatch(Action::Page(PageAction::ScrollBy(WHEEL_LINES)));
            }
            MouseEventKind::ScrollUp => {
                dispatcher.dispatch(Action::Page(PageAction::ScrollBy(-WHEEL_LINES)));
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let screen = ScreenLayout::new(state.screen);
                let buttons = HeaderButtons::new(screen.header, state.theme_mode.label());
                if layout::contains(buttons.palette, column, row) {
                    log::debug!("Mouse: palette button clicked");
                    dispatcher.dispatch(Action::CommandPalette(CommandPaletteAction::Open));
                } else if layout::contains(buttons.theme, column, row) {
                    log::debug!("Mouse: theme button clicked");
                    dispatcher.dispatch(Action::Theme(ThemeAction::Cycle));
                } else if layout::contains(screen.body, column, row) {
                    if let Some(action) = body_click(state, screen.body, column, row) {
                        dispatcher.dispatch(action);
                    }
                }
            }
            _ => {}
        }
    }
}

/// Nav links and filter buttons inside the page body
fn body_click(state: &AppState, body: Rect, column: u16, row: u16) -> Option<Action> {
    let index = state.page.top_line() + (row - body.y) as usize;
    let line = state.page.document.lines.get(index)?;
    let x = (column - body.x).checked_sub(PAGE_PADDING)? as usize;

    match line.kind {
        LineKind::Nav => {
            let widths = state.nav_links.iter().enumerate().map(|(i, link)| {
                let (number, label) = layout::nav_link_label(i, &link.label);
                number.chars().count() + label.chars().count()
            });
            let link = layout::segment_at(widths, layout::NAV_LINK_GAP, x)?;
            log::debug!("Mouse: nav link {} clicked", link);
            Some(Action::Page(PageAction::FollowLink(link)))
        }
        LineKind::FilterBar => {
            let widths = state
                .project_filter
                .filters
                .iter()
                .map(|f| layout::filter_button_label(f).chars().count());
            let filter = layout::segment_at(widths, layout::FILTER_BUTTON_GAP, x)?;
            log::debug!("Mouse: filter button {} clicked", filter);
            Some(Action::ProjectFilter(ProjectFilterAction::Select(filter)))
        }
        _ => None,
    }
}

impl Default for MouseMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for MouseMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::Mouse(mouse)) = action {
            self.handle_mouse(*mouse, state, dispatcher);
            return false;
        }
        true
    }
}
