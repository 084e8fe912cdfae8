//! View model for command palette
//!
//! Pre-computes all display data for the command palette view, separating
//! data preparation from rendering logic.

use crate::command_id::CommandId;
use crate::layout::list_offset;
use crate::state::{AppState, InputFocus};

/// View model for the command palette
#[derive(Debug, Clone)]
pub struct CommandPaletteViewModel {
    /// Total number of entries (before filtering)
    pub total_entries: usize,
    /// Number of entries matching the query
    pub match_count: usize,
    /// Pre-formatted input text for display
    pub input_text: String,
    /// Is input empty (for placeholder styling)
    pub input_is_empty: bool,
    /// Whether the input shows a cursor
    pub input_focused: bool,
    /// Rows that fit into the list, scrolled to keep the selection visible
    pub visible_rows: Vec<PaletteRow>,
    /// Target of the selected entry
    pub selected_target: Option<String>,
    /// Footer hints for navigation
    pub footer_hints: FooterHints,
}

/// Pre-computed footer hints for keyboard shortcuts
#[derive(Debug, Clone)]
pub struct FooterHints {
    /// Hint for closing (e.g., "Esc")
    pub close: String,
    /// Hint for the palette shortcut (e.g., "Ctrl+K")
    pub toggle: String,
}

/// A single row in the entry list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteRow {
    /// Is this row selected?
    pub is_selected: bool,
    /// Selection indicator ("> " or "  ")
    pub indicator: &'static str,
    pub label: String,
}

impl CommandPaletteViewModel {
    /// Build view model from application state for a list `list_height` rows tall
    pub fn from_state(state: &AppState, list_height: usize) -> Self {
        let palette = &state.command_palette;
        let selected = palette.selected_index();
        let offset = list_offset(selected, list_height);

        let visible_rows = palette
            .visible_entries()
            .enumerate()
            .skip(offset)
            .take(list_height)
            .map(|(idx, entry)| {
                let is_selected = Some(idx) == selected;
                PaletteRow {
                    is_selected,
                    indicator: if is_selected { "> " } else { "  " },
                    label: entry.label.clone(),
                }
            })
            .collect();

        let footer_hints = FooterHints {
            close: "Esc".to_string(),
            toggle: state
                .keymap
                .hint_for_command(CommandId::PaletteToggle)
                .unwrap_or("Ctrl+K")
                .to_string(),
        };

        Self {
            total_entries: palette.entries().len(),
            match_count: palette.visible_len(),
            input_text: palette.query().to_string(),
            input_is_empty: palette.query().is_empty(),
            input_focused: palette.focus() == InputFocus::Focused,
            visible_rows,
            selected_target: palette.selected_entry().map(|e| e.target.clone()),
            footer_hints,
        }
    }
}
