//! View model for the portfolio page
//!
//! Turns the laid out document, the viewport and the animation state into
//! styled lines, so the view only has to place them.

use std::collections::HashMap;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::command_id::CommandId;
use crate::content::target_id;
use crate::document::{DocLine, LineKind, PAGE_PADDING};
use crate::layout::{
    filter_button_label, nav_link_label, FILTER_BUTTON_GAP, NAV_LINK_GAP, PALETTE_BUTTON_LABEL,
};
use crate::state::AppState;

/// Shown after the typed part of the headline while typing
const TYPE_CURSOR: &str = "▌";

#[derive(Debug, Clone)]
pub struct PortfolioViewModel {
    /// Filled share of the progress bar, 0.0 to 1.0
    pub progress_ratio: f64,
    pub title: String,
    pub palette_button: &'static str,
    /// Palette button is highlighted while the palette is open
    pub palette_open: bool,
    pub theme_label: &'static str,
    /// Lines inside the viewport
    pub body: Vec<Line<'static>>,
    pub status_hints: Vec<(String, &'static str)>,
    /// e.g. `#about  42%`
    pub status_right: String,
}

impl PortfolioViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let page = &state.page;
        let theme = &state.theme;

        // Section index -> whether it is still hidden
        let hidden: HashMap<usize, bool> = page
            .document
            .anchors
            .iter()
            .map(|a| (a.section, a.reveal && !page.is_revealed(&a.id)))
            .collect();

        let headline = HeadlineRows::new(state);
        let padding = " ".repeat(PAGE_PADDING as usize);
        let body = page
            .document
            .lines
            .iter()
            .enumerate()
            .skip(page.top_line())
            .take(page.viewport_height as usize)
            .map(|(index, line)| {
                let mut styled = match line.kind {
                    LineKind::Headline => headline.line(state, index, line),
                    _ => style_line(state, line),
                };
                let is_hidden = line
                    .section
                    .and_then(|s| hidden.get(&s).copied())
                    .unwrap_or(false);
                if is_hidden {
                    styled.spans = styled
                        .spans
                        .into_iter()
                        .map(|span| span.patch_style(theme.unrevealed()))
                        .collect();
                }
                styled.spans.insert(0, Span::raw(padding.clone()));
                styled
            })
            .collect();

        let status_hints = [
            CommandId::PaletteToggle,
            CommandId::NavigateNext,
            CommandId::FilterNext,
            CommandId::ThemeCycle,
            CommandId::Quit,
        ]
        .into_iter()
        .filter_map(|cmd| {
            state
                .keymap
                .compact_hint_for_command(cmd)
                .map(|hint| (hint, cmd.title()))
        })
        .chain(
            (!state.nav_links.is_empty())
                .then(|| (format!("1-{}", state.nav_links.len()), CommandId::FollowLink(0).title())),
        )
        .collect();

        let percent = format!("{:>3.0}%", page.progress());
        let status_right = match &page.location {
            Some(location) => format!("{location}  {percent}"),
            None => percent,
        };

        Self {
            progress_ratio: page.progress() / 100.0,
            title: state.portfolio.name.clone(),
            palette_button: PALETTE_BUTTON_LABEL,
            palette_open: state.command_palette.is_open(),
            theme_label: state.theme_mode.label(),
            body,
            status_hints,
            status_right,
        }
    }
}

/// Maps the typed prefix of the headline onto its wrapped rows
struct HeadlineRows {
    /// Document line index -> char offset of the row in the headline
    starts: HashMap<usize, usize>,
    /// Row that shows the cursor while typing
    cursor_row: Option<usize>,
}

impl HeadlineRows {
    fn new(state: &AppState) -> Self {
        let headline: Vec<char> = state
            .portfolio
            .headline
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .chars()
            .collect();
        let typed = state.typewriter.typed_len();

        let mut starts = HashMap::new();
        let mut cursor_row = None;
        let mut pos = 0;
        for (index, line) in state.page.document.lines.iter().enumerate() {
            if line.kind != LineKind::Headline {
                continue;
            }
            starts.insert(index, pos);
            if pos <= typed {
                cursor_row = Some(index);
            }
            pos += line.text.chars().count();
            // Rows broken at a word boundary drop the space
            if headline.get(pos) == Some(&' ') {
                pos += 1;
            }
        }

        Self { starts, cursor_row }
    }

    fn line(&self, state: &AppState, index: usize, line: &DocLine) -> Line<'static> {
        let theme = &state.theme;
        let start = self.starts.get(&index).copied().unwrap_or(0);
        let shown = state.typewriter.typed_len().saturating_sub(start);
        let text: String = line.text.chars().take(shown).collect();

        let mut spans = vec![Span::styled(text, theme.text())];
        if !state.typewriter.is_complete() && self.cursor_row == Some(index) {
            spans.push(Span::styled(TYPE_CURSOR, theme.key_hint()));
        }
        Line::from(spans)
    }
}

fn style_line(state: &AppState, line: &DocLine) -> Line<'static> {
    let theme = &state.theme;
    match line.kind {
        LineKind::Blank => Line::default(),
        LineKind::Title => Line::styled(
            line.text.clone(),
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        ),
        LineKind::Headline => Line::styled(line.text.clone(), theme.text()),
        LineKind::Tagline => Line::styled(line.text.clone(), theme.text_secondary()),
        LineKind::Nav => nav_line(state),
        LineKind::SectionTitle => Line::styled(line.text.clone(), theme.section_header()),
        LineKind::Body => Line::styled(line.text.clone(), theme.text()),
        LineKind::FilterBar => filter_line(state),
        LineKind::ProjectName => Line::styled(
            line.text.clone(),
            Style::default()
                .fg(theme.accent_secondary)
                .add_modifier(Modifier::BOLD),
        ),
        LineKind::ProjectBody => Line::styled(line.text.clone(), theme.text_secondary()),
        LineKind::ProjectTags | LineKind::Footer => Line::styled(line.text.clone(), theme.muted()),
    }
}

/// `1 Home  2 About ...`, the last followed link highlighted
fn nav_line(state: &AppState) -> Line<'static> {
    let theme = &state.theme;
    let current = state.page.location.as_deref().map(target_id);
    let mut spans = Vec::new();
    for (i, link) in state.nav_links.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" ".repeat(NAV_LINK_GAP)));
        }
        let label_style = if current == Some(target_id(&link.target)) {
            theme.button_active()
        } else {
            theme.text()
        };
        let (number, label) = nav_link_label(i, &link.label);
        spans.push(Span::styled(number, theme.key_hint()));
        spans.push(Span::styled(label, label_style));
    }
    Line::from(spans)
}

/// Filter buttons, the active one highlighted
fn filter_line(state: &AppState) -> Line<'static> {
    let theme = &state.theme;
    let mut spans = Vec::new();
    for (i, filter) in state.project_filter.filters.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" ".repeat(FILTER_BUTTON_GAP)));
        }
        let style = if i == state.project_filter.active {
            theme.button_active()
        } else {
            theme.button()
        };
        spans.push(Span::styled(filter_button_label(filter), style));
    }
    Line::from(spans)
}
