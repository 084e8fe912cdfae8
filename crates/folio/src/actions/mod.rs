//! Actions module
//!
//! Actions are organized by:
//! - Generic actions (Navigation, TextInput) that views translate to screen-specific actions
//! - Global actions that affect the entire application
//! - Feature-specific actions that are already targeted to a particular reducer

// Shared action types
pub mod global;
pub mod navigation;
pub mod text_input;

// Feature-specific action types
pub mod command_palette;
pub mod page;
pub mod project_filter;
pub mod theme;

pub use command_palette::CommandPaletteAction;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use page::PageAction;
pub use project_filter::ProjectFilterAction;
pub use text_input::TextInputAction;
pub use theme::ThemeAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - will be translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - will be translated by active view
    TextInput(TextInputAction),

    // Global actions (no translation needed)
    Global(GlobalAction),

    // Feature-specific actions (already targeted)
    CommandPalette(CommandPaletteAction),
    Page(PageAction),
    ProjectFilter(ProjectFilterAction),
    Theme(ThemeAction),
}

impl Action {
    /// Whether this action fires on every animation tick
    ///
    /// Used to keep high-frequency actions out of the debug log.
    pub fn is_tick(&self) -> bool {
        matches!(self, Action::Global(GlobalAction::Tick(_)))
    }
}
