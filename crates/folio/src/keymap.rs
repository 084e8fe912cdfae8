pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let mut bindings = vec![
        // Command palette
        KeyBinding::new("ctrl+k", "Ctrl+K", PaletteToggle),
        // Needs a terminal with keyboard enhancement, see main
        KeyBinding::new("super+k", "Cmd+K", PaletteToggle),
        KeyBinding::new("/", "/", PaletteOpen),
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("h", "h", NavigateLeft),
        KeyBinding::new("left", "←", NavigateLeft),
        KeyBinding::new("l", "l", NavigateRight),
        KeyBinding::new("right", "→", NavigateRight),
        KeyBinding::new("g g", "gg", NavigateToTop),
        KeyBinding::new("home", "Home", NavigateToTop),
        KeyBinding::new("G", "G", NavigateToBottom),
        KeyBinding::new("end", "End", NavigateToBottom),
        // Scrolling
        KeyBinding::new("pagedown", "PgDn", ScrollPageDown),
        KeyBinding::new("space", "Space", ScrollPageDown),
        KeyBinding::new("pageup", "PgUp", ScrollPageUp),
        KeyBinding::new("ctrl+d", "Ctrl+D", ScrollHalfPageDown),
        KeyBinding::new("ctrl+u", "Ctrl+U", ScrollHalfPageUp),
        // Page
        KeyBinding::new("f", "f", FilterNext),
        KeyBinding::new("F", "F", FilterPrevious),
        KeyBinding::new("t", "t", ThemeCycle),
        // General
        KeyBinding::new("q", "q", Quit),
        KeyBinding::new("ctrl+c", "Ctrl+C", Quit),
    ];

    // Number keys follow the nav links
    bindings.extend((1..=9u8).map(|n| {
        let key = n.to_string();
        KeyBinding::new(key.clone(), key, FollowLink(n - 1))
    }));

    Keymap::new(bindings)
}
