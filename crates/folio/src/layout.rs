//! Screen geometry
//!
//! Rendering and mouse hit testing must agree on where things are, so both
//! go through the functions in this module.

use ratatui::layout::{Constraint, Direction, Layout, Margin, Position, Rect};

/// Label of the header button that opens the command palette
pub const PALETTE_BUTTON_LABEL: &str = " ⌕ Ctrl+K ";

/// Rows of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub progress: Rect,
    pub header: Rect,
    pub body: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Scroll progress
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Page body
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            progress: chunks[0],
            header: chunks[1],
            body: chunks[2],
            status: chunks[3],
        }
    }
}

/// Clickable buttons on the right of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderButtons {
    pub palette: Rect,
    pub theme: Rect,
}

impl HeaderButtons {
    /// Lay out `[palette][ ][theme][ ]` right-aligned in the header
    pub fn new(header: Rect, theme_label: &str) -> Self {
        let theme_width = (theme_label.chars().count() as u16 + 2).min(header.width);
        let palette_width = PALETTE_BUTTON_LABEL.chars().count() as u16;

        let right = header.x + header.width;
        let theme_x = right.saturating_sub(theme_width + 1).max(header.x);
        let palette_x = theme_x.saturating_sub(palette_width + 1).max(header.x);

        Self {
            palette: Rect::new(palette_x, header.y, palette_width.min(theme_x - palette_x), 1),
            theme: Rect::new(theme_x, header.y, theme_width, 1),
        }
    }
}

fn percent_of(value: u16, percent: u32) -> u16 {
    (u32::from(value) * percent / 100) as u16
}

/// Areas of the command palette popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    pub popup: Rect,
    pub input: Rect,
    pub list: Rect,
    pub details: Rect,
}

impl PaletteLayout {
    /// Centered popup, 60% wide and up to 20 rows tall
    pub fn new(area: Rect) -> Self {
        let popup_width = percent_of(area.width, 60).clamp(area.width.min(30), 80);
        let popup_height = percent_of(area.height, 60).clamp(area.height.min(10), 20);
        let popup = Rect {
            x: area.x + area.width.saturating_sub(popup_width) / 2,
            y: area.y + area.height.saturating_sub(popup_height) / 3,
            width: popup_width,
            height: popup_height,
        };

        let inner = popup.inner(Margin {
            horizontal: 2,
            vertical: 1,
        });
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Input box
                Constraint::Min(1),    // Results list
                Constraint::Length(1), // Selected target
            ])
            .split(inner);

        Self {
            popup,
            input: chunks[0],
            list: chunks[1],
            details: chunks[2],
        }
    }

    /// Visible row under the given screen cell, if any
    pub fn row_at(&self, column: u16, row: u16, offset: usize) -> Option<usize> {
        if !self.list.contains(Position::new(column, row)) {
            return None;
        }
        Some(offset + (row - self.list.y) as usize)
    }
}

/// First row to show so that the selection stays inside a list of `height` rows
pub fn list_offset(selected: Option<usize>, height: usize) -> usize {
    match selected {
        Some(selected) if height > 0 && selected >= height => selected + 1 - height,
        _ => 0,
    }
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    rect.contains(Position::new(column, row))
}

/// Spaces between two nav links
pub const NAV_LINK_GAP: usize = 2;

/// Spaces between two filter buttons
pub const FILTER_BUTTON_GAP: usize = 1;

/// Nav link label as drawn, e.g. `2 About`
pub fn nav_link_label(index: usize, label: &str) -> (String, String) {
    (format!("{} ", index + 1), label.to_string())
}

/// Filter button as drawn, e.g. ` rust `
pub fn filter_button_label(filter: &str) -> String {
    format!(" {filter} ")
}

/// Index of the segment under column `x` of a row of segments separated by `gap`
pub fn segment_at(widths: impl IntoIterator<Item = usize>, gap: usize, x: usize) -> Option<usize> {
    let mut start = 0;
    for (index, width) in widths.into_iter().enumerate() {
        if x < start {
            // Inside the gap before this segment
            return None;
        }
        if x < start + width {
            return Some(index);
        }
        start += width + gap;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_layout_rows() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.progress.y, 0);
        assert_eq!(layout.header.y, 1);
        assert_eq!(layout.body.y, 2);
        assert_eq!(layout.body.height, 21);
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_header_buttons_right_aligned() {
        let header = Rect::new(0, 1, 80, 1);
        let buttons = HeaderButtons::new(header, "Dark");
        assert_eq!(buttons.theme.width, 6);
        assert_eq!(buttons.theme.x + buttons.theme.width, 79);
        assert!(buttons.palette.x + buttons.palette.width < buttons.theme.x);
        assert!(contains(buttons.theme, buttons.theme.x, 1));
        assert!(!contains(buttons.theme, buttons.theme.x, 2));
    }

    #[test]
    fn test_palette_rows() {
        let layout = PaletteLayout::new(Rect::new(0, 0, 100, 40));
        let list = layout.list;
        assert_eq!(layout.row_at(list.x, list.y, 0), Some(0));
        assert_eq!(layout.row_at(list.x + 1, list.y + 2, 3), Some(5));
        assert_eq!(layout.row_at(0, 0, 0), None);
    }

    #[test]
    fn test_palette_layout_on_huge_terminal() {
        let wide = PaletteLayout::new(Rect::new(0, 0, 1200, 50));
        assert_eq!(wide.popup.width, 80);
        assert_eq!(wide.popup.x, 560);

        let tall = PaletteLayout::new(Rect::new(0, 0, 100, 2000));
        assert_eq!(tall.popup.height, 20);
        assert!(tall.list.height > 0);
    }

    #[test]
    fn test_segment_at() {
        // "1 Home  2 About"
        let widths = [6, 7];
        assert_eq!(segment_at(widths, 2, 0), Some(0));
        assert_eq!(segment_at(widths, 2, 5), Some(0));
        assert_eq!(segment_at(widths, 2, 6), None);
        assert_eq!(segment_at(widths, 2, 8), Some(1));
        assert_eq!(segment_at(widths, 2, 14), Some(1));
        assert_eq!(segment_at(widths, 2, 15), None);
        assert_eq!(segment_at(Vec::<usize>::new(), 2, 0), None);
    }

    #[test]
    fn test_list_offset_keeps_selection_visible() {
        assert_eq!(list_offset(None, 5), 0);
        assert_eq!(list_offset(Some(4), 5), 0);
        assert_eq!(list_offset(Some(5), 5), 1);
        assert_eq!(list_offset(Some(12), 5), 8);
        assert_eq!(list_offset(Some(3), 0), 0);
    }
}
