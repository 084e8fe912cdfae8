//! Command Palette State
//!
//! The palette is a two-state machine (closed/open) over a fixed list of
//! entries. While open, the query narrows the entries down to the ones whose
//! label contains it (case-insensitive, original order kept) and a selection
//! walks the visible entries without wrapping.
//!
//! Every operation is infallible: an empty entry list, a filter without
//! matches or a target missing from the page all degrade to no-ops.

use std::sync::Arc;

use crate::content::PaletteEntry;

/// Something that can bring a page target into view
///
/// Returns `false` when the target does not exist; callers treat that as a
/// silent no-op.
pub trait Viewport {
    fn scroll_into_view(&mut self, target: &str) -> bool;
}

/// Focus of the search input
///
/// Opening the palette only requests focus; it is granted by a follow-up
/// action once the open has been rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    #[default]
    Unfocused,
    Pending,
    Focused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMove {
    Up,
    Down,
}

#[derive(Debug, Clone)]
pub struct CommandPaletteState {
    entries: Arc<[PaletteEntry]>,
    is_open: bool,
    query: String,
    /// Indices into `entries` matching `query`, ascending
    visible: Vec<usize>,
    /// Index into `visible`
    selected: Option<usize>,
    focus: InputFocus,
}

impl Default for CommandPaletteState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CommandPaletteState {
    pub fn new(entries: Vec<PaletteEntry>) -> Self {
        let visible = (0..entries.len()).collect();
        Self {
            entries: entries.into(),
            is_open: false,
            query: String::new(),
            visible,
            selected: None,
            focus: InputFocus::Unfocused,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn focus(&self) -> InputFocus {
        self.focus
    }

    /// The full entry set, in original order
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Entries matching the current query, in original order
    pub fn visible_entries(&self) -> impl Iterator<Item = &PaletteEntry> + '_ {
        self.visible.iter().map(|&i| &self.entries[i])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Visible entry at `row`
    pub fn visible_entry(&self, row: usize) -> Option<&PaletteEntry> {
        self.visible.get(row).map(|&i| &self.entries[i])
    }

    /// Selected row within the visible entries
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&PaletteEntry> {
        self.selected.and_then(|row| self.visible_entry(row))
    }

    /// Open with a fresh query and the first entry selected
    pub fn open(&mut self) {
        self.is_open = true;
        self.focus = InputFocus::Pending;
        self.set_query("");
        log::debug!(
            "Command palette opened with {} entries",
            self.entries.len()
        );
    }

    /// Close the palette
    ///
    /// Query and selection are left as they are; the next `open` resets them.
    pub fn close(&mut self) {
        if self.is_open {
            log::debug!("Command palette closed");
        }
        self.is_open = false;
        self.focus = InputFocus::Unfocused;
    }

    /// Grant the focus requested by `open`
    pub fn focus_input(&mut self) {
        if self.is_open && self.focus == InputFocus::Pending {
            self.focus = InputFocus::Focused;
        }
    }

    /// Replace the query and refilter
    ///
    /// The selection always moves to the first visible entry, never keeping
    /// a row that may now point somewhere else.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        let needle = self.query.to_lowercase();
        self.visible = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.label.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();
        self.selected = if self.visible.is_empty() {
            None
        } else {
            Some(0)
        };
    }

    pub fn push_char(&mut self, c: char) {
        let mut query = std::mem::take(&mut self.query);
        query.push(c);
        self.set_query(query);
    }

    pub fn pop_char(&mut self) {
        let mut query = std::mem::take(&mut self.query);
        query.pop();
        self.set_query(query);
    }

    pub fn clear_query(&mut self) {
        self.set_query("");
    }

    /// Move the selection one row, clamped to the visible entries
    pub fn move_selection(&mut self, direction: SelectionMove) {
        if !self.is_open || self.visible.is_empty() {
            return;
        }
        let last = self.visible.len() as isize - 1;
        let current = self.selected.map(|i| i as isize).unwrap_or(-1);
        let next = match direction {
            SelectionMove::Up => current - 1,
            SelectionMove::Down => current + 1,
        };
        self.selected = Some(next.clamp(0, last) as usize);
    }

    /// Close and bring `entry` (or the current selection) into view
    ///
    /// Returns `false` without touching anything when there is nothing to
    /// activate. An unknown target still closes the palette; only the scroll
    /// is skipped.
    pub fn activate<V>(&mut self, entry: Option<PaletteEntry>, viewport: &mut V) -> bool
    where
        V: Viewport + ?Sized,
    {
        let Some(entry) = entry.or_else(|| self.selected_entry().cloned()) else {
            log::debug!("Command palette: nothing selected to activate");
            return false;
        };

        self.close();
        if !viewport.scroll_into_view(&entry.target) {
            log::debug!("Command palette: target {} not on page", entry.target);
        }
        true
    }

    /// Ctrl/Cmd+K
    pub fn toggle_via_shortcut(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Escape
    pub fn dismiss_via_escape(&mut self) {
        if self.is_open {
            self.close();
        }
    }
}
