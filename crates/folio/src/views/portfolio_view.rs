//! Portfolio page view
//!
//! The base view: progress bar, header with the palette and theme buttons,
//! the scrolled page and a status bar.

use ratatui::{
    layout::{Alignment, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::actions::{
    Action, CommandPaletteAction, NavigationAction, PageAction, ProjectFilterAction,
};
use crate::capabilities::PanelCapabilities;
use crate::layout::{HeaderButtons, ScreenLayout};
use crate::state::AppState;
use crate::view_models::PortfolioViewModel;
use crate::views::{View, ViewId};

#[derive(Debug, Clone)]
pub struct PortfolioView;

impl PortfolioView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PortfolioView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for PortfolioView {
    fn view_id(&self) -> ViewId {
        ViewId::Portfolio
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        // Keys go through the keymap
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => Action::Page(PageAction::ScrollBy(1)),
            NavigationAction::Previous => Action::Page(PageAction::ScrollBy(-1)),
            NavigationAction::ToTop => Action::Page(PageAction::ScrollToTop),
            NavigationAction::ToBottom => Action::Page(PageAction::ScrollToBottom),
            // Left/right walk the project filter buttons
            NavigationAction::Left => Action::ProjectFilter(ProjectFilterAction::Previous),
            NavigationAction::Right => Action::ProjectFilter(ProjectFilterAction::Next),
        };
        Some(action)
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Navigate(_)
                | Action::Page(_)
                | Action::ProjectFilter(_)
                | Action::Theme(_)
                | Action::CommandPalette(CommandPaletteAction::Open | CommandPaletteAction::Toggle)
                | Action::Global(_)
        )
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let vm = PortfolioViewModel::from_state(state);
    let layout = ScreenLayout::new(area);

    f.render_widget(Block::default().style(theme.page_background()), area);

    // Scroll progress
    let filled = (layout.progress.width as f64 * vm.progress_ratio).round() as usize;
    let rest = (layout.progress.width as usize).saturating_sub(filled);
    let progress = Line::from(vec![
        Span::styled("━".repeat(filled), theme.progress()),
        Span::styled("─".repeat(rest), theme.muted()),
    ]);
    f.render_widget(Paragraph::new(progress), layout.progress);

    // Header
    f.render_widget(Block::default().style(theme.panel_background()), layout.header);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!(" {}", vm.title),
            theme.panel_title(),
        ))),
        layout.header,
    );
    let buttons = HeaderButtons::new(layout.header, vm.theme_label);
    let palette_style = if vm.palette_open {
        theme.button_active()
    } else {
        theme.button()
    };
    f.render_widget(
        Paragraph::new(Span::styled(vm.palette_button, palette_style)),
        buttons.palette,
    );
    f.render_widget(
        Paragraph::new(Span::styled(format!(" {} ", vm.theme_label), theme.button()))
            .alignment(Alignment::Center),
        buttons.theme,
    );

    // Page
    f.render_widget(Paragraph::new(vm.body), layout.body);

    // Status bar
    let mut hints = vec![Span::raw(" ")];
    for (hint, title) in &vm.status_hints {
        hints.push(Span::styled(hint.clone(), theme.key_hint().bold()));
        hints.push(Span::styled(format!(" {title}  "), theme.muted()));
    }
    f.render_widget(Block::default().style(theme.panel_background()), layout.status);
    f.render_widget(Paragraph::new(Line::from(hints)), layout.status);
    f.render_widget(
        Paragraph::new(Span::styled(format!("{} ", vm.status_right), theme.text_secondary()))
            .alignment(Alignment::Right),
        layout.status,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ThemeAction;

    #[test]
    fn test_navigation_scrolls_page() {
        let view = PortfolioView::new();
        assert!(matches!(
            view.translate_navigation(NavigationAction::Next),
            Some(Action::Page(PageAction::ScrollBy(1)))
        ));
        assert!(matches!(
            view.translate_navigation(NavigationAction::Right),
            Some(Action::ProjectFilter(ProjectFilterAction::Next))
        ));
    }

    #[test]
    fn test_palette_internals_are_gated() {
        let view = PortfolioView::new();
        assert!(view.accepts_action(&Action::Theme(ThemeAction::Cycle)));
        assert!(view.accepts_action(&Action::CommandPalette(CommandPaletteAction::Open)));
        assert!(!view.accepts_action(&Action::CommandPalette(CommandPaletteAction::NavigateNext)));
    }

    #[test]
    fn test_page_keys_use_the_keymap() {
        let state = AppState::new(
            crate::content::Portfolio::sample().unwrap(),
            folio_config::ThemeMode::Auto,
        );
        let caps = PortfolioView::new().capabilities(&state);
        assert!(!caps.accepts_text_input());
        assert!(!caps.supports_item_navigation());
    }
}
