use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgAction, Parser};
use folio_config::ThemeMode;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Browse a portfolio in the terminal, jump around with Ctrl+K."
)]
pub struct Cli {
    /// Portfolio content file (TOML). Overrides `content` from folio.toml.
    #[arg(value_name = "PATH")]
    pub content: Option<PathBuf>,

    /// Theme for this session: auto, dark or light. Not saved.
    #[arg(long, value_parser = parse_theme)]
    pub theme: Option<ThemeMode>,

    /// Do not capture the mouse.
    #[arg(long = "no-mouse", action = ArgAction::SetTrue)]
    pub no_mouse: bool,
}

fn parse_theme(value: &str) -> Result<ThemeMode, String> {
    ThemeMode::from_str(value).map_err(|_| format!("unknown theme {value:?}, expected auto, dark or light"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["folio"]).unwrap();
        assert_eq!(cli.content, None);
        assert_eq!(cli.theme, None);
        assert!(!cli.no_mouse);
    }

    #[test]
    fn test_all_arguments() {
        let cli =
            Cli::try_parse_from(["folio", "me.toml", "--theme", "Light", "--no-mouse"]).unwrap();
        assert_eq!(cli.content, Some(PathBuf::from("me.toml")));
        assert_eq!(cli.theme, Some(ThemeMode::Light));
        assert!(cli.no_mouse);
    }

    #[test]
    fn test_unknown_theme_is_rejected() {
        assert!(Cli::try_parse_from(["folio", "--theme", "sepia"]).is_err());
    }
}
