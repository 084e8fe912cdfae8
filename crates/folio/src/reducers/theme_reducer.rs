//! Theme reducer

use folio_theme::Theme;

use crate::actions::ThemeAction;
use crate::state::{resolve_appearance, AppState};

pub fn reduce(mut state: AppState, action: &ThemeAction) -> AppState {
    match action {
        ThemeAction::Cycle => state.theme_mode = state.theme_mode.next(),
    }
    state.theme = Theme::for_appearance(resolve_appearance(state.theme_mode, state.auto_appearance));
    log::info!(
        "Theme mode {} ({:?})",
        state.theme_mode,
        state.theme.appearance
    );
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;
    use folio_config::ThemeMode;
    use folio_theme::Appearance;

    fn state(auto: Appearance) -> AppState {
        let mut state =
            AppState::new(Portfolio::sample().unwrap(), ThemeMode::Auto);
        state.auto_appearance = auto;
        state
    }

    #[test]
    fn test_cycle_walks_auto_dark_light() {
        let state = reduce(state(Appearance::Light), &ThemeAction::Cycle);
        assert_eq!(state.theme_mode, ThemeMode::Dark);
        assert_eq!(state.theme.appearance, Appearance::Dark);

        let state = reduce(state, &ThemeAction::Cycle);
        assert_eq!(state.theme_mode, ThemeMode::Light);
        assert_eq!(state.theme.appearance, Appearance::Light);

        let state = reduce(state, &ThemeAction::Cycle);
        assert_eq!(state.theme_mode, ThemeMode::Auto);
        assert_eq!(state.theme.appearance, Appearance::Light);
    }

    #[test]
    fn test_auto_follows_terminal() {
        let mut state = reduce(state(Appearance::Dark), &ThemeAction::Cycle);
        state = reduce(state, &ThemeAction::Cycle);
        assert_eq!(state.theme.appearance, Appearance::Light);

        let state = reduce(state, &ThemeAction::Cycle);
        assert_eq!(state.theme_mode, ThemeMode::Auto);
        assert_eq!(state.theme.appearance, Appearance::Dark);
    }
}
