//! Application State

use std::sync::Arc;
use std::time::Instant;

use chrono::Datelike;
use folio_config::ThemeMode;
use folio_theme::{Appearance, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::layout::Rect;

use crate::content::{Link, Portfolio};
use crate::keymap::{default_keymap, Keymap};
use crate::views::{PortfolioView, View};

use super::{CommandPaletteState, PageState, ProjectFilterState, TypewriterState};

/// Application state
pub struct AppState {
    pub running: bool,
    /// Stack of views - bottom view is the base, top views are floating overlays
    /// Views are rendered bottom-up, so the last view in the stack renders on top
    pub view_stack: Vec<Box<dyn View>>,
    /// Last known terminal area
    pub screen: Rect,
    pub portfolio: Arc<Portfolio>,
    pub nav_links: Vec<Link>,
    pub command_palette: CommandPaletteState,
    pub page: PageState,
    pub project_filter: ProjectFilterState,
    pub typewriter: TypewriterState,
    pub theme_mode: ThemeMode,
    /// What `ThemeMode::Auto` resolves to on this terminal
    pub auto_appearance: Appearance,
    pub theme: Theme,
    /// The keymap containing all keybindings
    pub keymap: Keymap,
}

impl AppState {
    /// Build the initial state for a portfolio
    pub fn new(portfolio: Portfolio, theme_mode: ThemeMode) -> Self {
        let auto_appearance = Appearance::detect();
        let year = chrono::Local::now().year();
        let typewriter = TypewriterState::new(
            &portfolio.headline,
            Instant::now(),
            StdRng::from_entropy(),
        );

        Self {
            running: true,
            view_stack: vec![Box::new(PortfolioView::new())],
            screen: Rect::default(),
            nav_links: portfolio.nav_links(),
            command_palette: CommandPaletteState::new(portfolio.palette_entries()),
            page: PageState::new(year),
            project_filter: ProjectFilterState::new(portfolio.filters()),
            typewriter,
            theme_mode,
            auto_appearance,
            theme: Theme::for_appearance(resolve_appearance(theme_mode, auto_appearance)),
            keymap: default_keymap(),
            portfolio: Arc::new(portfolio),
        }
    }

    /// Get the top-most (active) view from the stack
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|v| v.as_ref())
    }

    /// Re-run the page layout with the current filter
    pub fn relayout_page(&mut self) {
        let portfolio = Arc::clone(&self.portfolio);
        self.page
            .relayout(&portfolio, self.project_filter.active_filter());
    }
}

/// Resolve a theme mode into the appearance to draw with
pub fn resolve_appearance(mode: ThemeMode, auto: Appearance) -> Appearance {
    match mode {
        ThemeMode::Auto => auto,
        ThemeMode::Dark => Appearance::Dark,
        ThemeMode::Light => Appearance::Light,
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("running", &self.running)
            .field("view_stack", &format!("{} views", self.view_stack.len()))
            .field("screen", &self.screen)
            .field("portfolio", &self.portfolio.name)
            .field("command_palette", &self.command_palette)
            .field("page", &format!("{} lines", self.page.content_height()))
            .field("project_filter", &self.project_filter)
            .field("theme_mode", &self.theme_mode)
            .field("theme", &"<theme>")
            .finish()
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        Self {
            running: self.running,
            view_stack: self.view_stack.clone(),
            screen: self.screen,
            portfolio: Arc::clone(&self.portfolio),
            nav_links: self.nav_links.clone(),
            command_palette: self.command_palette.clone(),
            page: self.page.clone(),
            project_filter: self.project_filter.clone(),
            typewriter: self.typewriter.clone(),
            theme_mode: self.theme_mode,
            auto_appearance: self.auto_appearance,
            theme: self.theme.clone(),
            keymap: self.keymap.clone(),
        }
    }
}
