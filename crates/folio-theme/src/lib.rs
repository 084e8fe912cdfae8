//! Color themes for folio
//!
//! Two palettes exist, one per terminal appearance. The viewer's theme mode
//! (auto/dark/light) is resolved into an [`Appearance`] before a [`Theme`]
//! is built.

use ratatui::{prelude::*, style::palette::tailwind};

/// Resolved terminal appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Dark,
    Light,
}

impl Appearance {
    /// Guess the terminal background from `COLORFGBG` (`"fg;bg"`)
    ///
    /// Backgrounds 7 and 15 are the light greys/whites; anything else, or no
    /// variable at all, counts as dark.
    pub fn detect() -> Self {
        Self::from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }

    pub fn from_colorfgbg(value: Option<&str>) -> Self {
        let bg = value
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());
        match bg {
            Some(7) | Some(15) => Self::Light,
            _ => Self::Dark,
        }
    }
}

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    pub appearance: Appearance,

    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,
    pub accent_secondary: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub active_fg: Color,

    // Scroll progress bar
    pub progress_fg: Color,
    pub progress_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::dark(),
            Appearance::Light => Self::light(),
        }
    }

    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            appearance: Appearance::Dark,
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c800,
            text_primary: tailwind::SLATE.c100,
            text_secondary: tailwind::SLATE.c200,
            text_muted: tailwind::SLATE.c400,
            accent_primary: tailwind::CYAN.c400,
            accent_secondary: tailwind::CYAN.c600,
            selected_bg: tailwind::BLUE.c400,
            selected_fg: Color::White,
            active_fg: tailwind::YELLOW.c400,
            progress_fg: tailwind::CYAN.c400,
            progress_bg: tailwind::SLATE.c900,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            appearance: Appearance::Light,
            bg_primary: tailwind::SLATE.c50,
            bg_panel: tailwind::SLATE.c200,
            text_primary: tailwind::SLATE.c900,
            text_secondary: tailwind::SLATE.c700,
            text_muted: tailwind::SLATE.c500,
            accent_primary: tailwind::BLUE.c700,
            accent_secondary: tailwind::BLUE.c500,
            selected_bg: tailwind::BLUE.c600,
            selected_fg: Color::White,
            active_fg: tailwind::AMBER.c700,
            progress_fg: tailwind::BLUE.c600,
            progress_bg: tailwind::SLATE.c200,
        }
    }

    // Prebuilt styles for common use cases

    /// Style for the page background
    pub fn page_background(&self) -> Style {
        Style::default().bg(self.bg_primary)
    }

    /// Style for panel backgrounds (header, palette)
    pub fn panel_background(&self) -> Style {
        Style::default().bg(self.bg_panel)
    }

    /// Style for panel borders
    pub fn panel_border(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for panel titles
    pub fn panel_title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for section headers
    pub fn section_header(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for key hints (e.g., "Enter" in "Enter open")
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for clickable buttons in the header
    pub fn button(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .bg(self.accent_secondary)
    }

    /// Style for the active filter button
    pub fn button_active(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected palette row
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.active_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for sections that have not been scrolled into view yet
    pub fn unrevealed(&self) -> Style {
        Style::default()
            .fg(self.text_muted)
            .add_modifier(Modifier::DIM)
    }

    /// Style for the filled part of the scroll progress bar
    pub fn progress(&self) -> Style {
        Style::default().fg(self.progress_fg).bg(self.progress_bg)
    }

    /// Style for muted/helper text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for primary text
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary text
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorfgbg_light_backgrounds() {
        assert_eq!(Appearance::from_colorfgbg(Some("0;15")), Appearance::Light);
        assert_eq!(Appearance::from_colorfgbg(Some("0;7")), Appearance::Light);
        assert_eq!(
            Appearance::from_colorfgbg(Some("0;default;15")),
            Appearance::Light
        );
    }

    #[test]
    fn test_colorfgbg_dark_or_missing() {
        assert_eq!(Appearance::from_colorfgbg(Some("15;0")), Appearance::Dark);
        assert_eq!(Appearance::from_colorfgbg(Some("garbage")), Appearance::Dark);
        assert_eq!(Appearance::from_colorfgbg(None), Appearance::Dark);
    }

    #[test]
    fn test_for_appearance() {
        assert_eq!(
            Theme::for_appearance(Appearance::Light).appearance,
            Appearance::Light
        );
        assert_eq!(Theme::default().appearance, Appearance::Dark);
    }
}
