//! Command Palette actions

/// Actions for the command palette overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandPaletteAction {
    /// Open the palette (header button)
    Open,
    /// Ctrl/Cmd+K: open when closed, close when open
    Toggle,
    /// Escape while the palette is open
    DismissEscape,
    /// Apply the focus requested by `Open`/`Toggle`
    FocusInput,

    // Navigation (translated from NavigationAction)
    /// Select the next visible entry
    NavigateNext,
    /// Select the previous visible entry
    NavigatePrev,

    // Text input (translated from TextInputAction)
    /// Character typed into search field
    Char(char),
    /// Backspace pressed in search field
    Backspace,
    /// Clear entire query
    Clear,

    /// Activate the visible entry at the given row, or the selection
    Activate(Option<usize>),
}
