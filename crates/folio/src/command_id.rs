//! Command identifiers
//!
//! Commands are the semantic actions users can trigger from the keyboard.
//! Each command has a unique ID that keybindings refer to.

use serde::{Deserialize, Serialize};

use crate::actions::{
    Action, CommandPaletteAction, GlobalAction, NavigationAction, PageAction, ProjectFilterAction,
    ThemeAction,
};

/// Unique identifier for each command in the application.
///
/// The enum is serialized as snake_case (e.g., `PaletteToggle` -> `"palette_toggle"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Command palette ===
    /// Open or close the command palette
    PaletteToggle,
    /// Open the command palette
    PaletteOpen,

    // === Navigation ===
    NavigateNext,
    NavigatePrevious,
    NavigateLeft,
    NavigateRight,
    NavigateToTop,
    NavigateToBottom,

    // === Scrolling ===
    ScrollPageDown,
    ScrollPageUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,

    // === Page ===
    /// Follow the nav link with the given zero-based index
    FollowLink(u8),
    FilterNext,
    FilterPrevious,
    ThemeCycle,

    // === General ===
    Quit,
}

impl CommandId {
    /// Convert this command ID to an Action
    pub fn to_action(self) -> Action {
        match self {
            Self::PaletteToggle => Action::CommandPalette(CommandPaletteAction::Toggle),
            Self::PaletteOpen => Action::CommandPalette(CommandPaletteAction::Open),

            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateLeft => Action::Navigate(NavigationAction::Left),
            Self::NavigateRight => Action::Navigate(NavigationAction::Right),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),

            Self::ScrollPageDown => Action::Page(PageAction::ScrollPage { down: true }),
            Self::ScrollPageUp => Action::Page(PageAction::ScrollPage { down: false }),
            Self::ScrollHalfPageDown => Action::Page(PageAction::ScrollHalfPage { down: true }),
            Self::ScrollHalfPageUp => Action::Page(PageAction::ScrollHalfPage { down: false }),

            Self::FollowLink(index) => Action::Page(PageAction::FollowLink(index as usize)),
            Self::FilterNext => Action::ProjectFilter(ProjectFilterAction::Next),
            Self::FilterPrevious => Action::ProjectFilter(ProjectFilterAction::Previous),
            Self::ThemeCycle => Action::Theme(ThemeAction::Cycle),

            Self::Quit => Action::Global(GlobalAction::Quit),
        }
    }

    /// Short title for hints
    pub fn title(&self) -> &'static str {
        match self {
            Self::PaletteToggle => "palette",
            Self::PaletteOpen => "search",
            Self::NavigateNext => "down",
            Self::NavigatePrevious => "up",
            Self::NavigateLeft => "left",
            Self::NavigateRight => "right",
            Self::NavigateToTop => "top",
            Self::NavigateToBottom => "bottom",
            Self::ScrollPageDown => "page down",
            Self::ScrollPageUp => "page up",
            Self::ScrollHalfPageDown => "half page down",
            Self::ScrollHalfPageUp => "half page up",
            Self::FollowLink(_) => "jump",
            Self::FilterNext => "filter",
            Self::FilterPrevious => "previous filter",
            Self::ThemeCycle => "theme",
            Self::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_link_carries_index() {
        match CommandId::FollowLink(3).to_action() {
            Action::Page(PageAction::FollowLink(index)) => assert_eq!(index, 3),
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_serde_snake_case() {
        #[derive(Deserialize)]
        struct Binding {
            command: CommandId,
        }
        let parsed: Binding = toml::from_str(r#"command = "palette_toggle""#).unwrap();
        assert_eq!(parsed.command, CommandId::PaletteToggle);
    }
}
