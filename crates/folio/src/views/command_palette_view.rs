use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::actions::{Action, CommandPaletteAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::layout::PaletteLayout;
use crate::state::AppState;
use crate::view_models::CommandPaletteViewModel;
use crate::views::{View, ViewId};

/// Command palette view - searchable list of page targets
#[derive(Debug, Clone)]
pub struct CommandPaletteView;

impl CommandPaletteView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CommandPaletteView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for CommandPaletteView {
    fn view_id(&self) -> ViewId {
        ViewId::CommandPalette
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        // TEXT_INPUT means character keys go to the input field, not keybindings
        // ITEM_NAVIGATION enables arrow key navigation through results
        PanelCapabilities::TEXT_INPUT | PanelCapabilities::ITEM_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => CommandPaletteAction::NavigateNext,
            NavigationAction::Previous => CommandPaletteAction::NavigatePrev,
            // Command palette only supports up/down navigation
            NavigationAction::Left
            | NavigationAction::Right
            | NavigationAction::ToTop
            | NavigationAction::ToBottom => return None,
        };
        Some(Action::CommandPalette(action))
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => CommandPaletteAction::Char(c),
            TextInputAction::Backspace => CommandPaletteAction::Backspace,
            TextInputAction::ClearLine => CommandPaletteAction::Clear,
            TextInputAction::Escape => CommandPaletteAction::DismissEscape,
            TextInputAction::Confirm => CommandPaletteAction::Activate(None),
        };
        Some(Action::CommandPalette(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::CommandPalette(_)
                | Action::Navigate(_)
                | Action::TextInput(_)
                | Action::Global(_)
        )
    }
}

/// Render the command palette as a centered floating panel
fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let layout = PaletteLayout::new(area);

    // Build view model - all data preparation happens here
    let vm = CommandPaletteViewModel::from_state(state, layout.list.height as usize);

    // Dim the page underneath
    f.render_widget(
        Block::default().style(Style::default().add_modifier(Modifier::DIM)),
        area,
    );
    f.render_widget(Clear, layout.popup);

    let footer_hint = Line::from(vec![
        Span::styled(" Enter", theme.key_hint().bold()),
        Span::styled(" jump  ", theme.muted()),
        Span::styled("↑/↓", theme.key_hint().bold()),
        Span::styled(" select  ", theme.muted()),
        Span::styled(vm.footer_hints.close.clone(), theme.key_hint().bold()),
        Span::styled("/", theme.muted()),
        Span::styled(vm.footer_hints.toggle.clone(), theme.key_hint().bold()),
        Span::styled(" close ", theme.muted()),
    ]);

    let title = format!(" Jump to ({}/{}) ", vm.match_count, vm.total_entries);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(theme.panel_title())
        .title_bottom(footer_hint)
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border())
        .style(theme.panel_background());
    f.render_widget(block, layout.popup);

    // Input box
    let input_text = if vm.input_is_empty {
        Line::from(Span::styled("Type to filter sections...", theme.muted().italic()))
    } else {
        Line::from(Span::styled(vm.input_text.clone(), theme.text()))
    };
    let input_border = if vm.input_focused {
        theme.panel_border()
    } else {
        theme.muted()
    };
    f.render_widget(
        Paragraph::new(input_text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(input_border)
                .style(theme.panel_background()),
        ),
        layout.input,
    );
    if vm.input_focused {
        let typed = vm.input_text.chars().count() as u16;
        let max_x = layout.input.right().saturating_sub(2);
        f.set_cursor_position(Position::new(
            (layout.input.x + 1 + typed).min(max_x),
            layout.input.y + 1,
        ));
    }

    // Results
    if vm.visible_rows.is_empty() {
        f.render_widget(
            Paragraph::new("No matching sections")
                .style(theme.muted())
                .alignment(Alignment::Center),
            layout.list,
        );
    } else {
        let rows: Vec<Line> = vm
            .visible_rows
            .iter()
            .map(|row| {
                let style = if row.is_selected {
                    theme.selected()
                } else {
                    theme.text()
                };
                Line::from(vec![
                    Span::styled(row.indicator, style),
                    Span::styled(row.label.clone(), style),
                ])
                .style(style)
            })
            .collect();
        f.render_widget(Paragraph::new(rows), layout.list);
    }

    if let Some(target) = vm.selected_target {
        f.render_widget(
            Paragraph::new(Span::styled(target, theme.text_secondary())),
            layout.details,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::PageAction;

    #[test]
    fn test_text_input_translation() {
        let view = CommandPaletteView::new();
        assert!(matches!(
            view.translate_text_input(TextInputAction::Confirm),
            Some(Action::CommandPalette(CommandPaletteAction::Activate(None)))
        ));
        assert!(matches!(
            view.translate_text_input(TextInputAction::Escape),
            Some(Action::CommandPalette(CommandPaletteAction::DismissEscape))
        ));
        assert!(matches!(
            view.translate_text_input(TextInputAction::Char('a')),
            Some(Action::CommandPalette(CommandPaletteAction::Char('a')))
        ));
    }

    #[test]
    fn test_page_actions_do_not_leak_into_palette() {
        let view = CommandPaletteView::new();
        assert!(!view.accepts_action(&Action::Page(PageAction::ScrollBy(1))));
        assert!(view.translate_navigation(NavigationAction::Left).is_none());
    }
}
