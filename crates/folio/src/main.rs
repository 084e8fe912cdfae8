use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use folio_config::{AppConfig, Preferences};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{
            self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
            KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
        },
        execute,
        terminal::{
            disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
            LeaveAlternateScreen,
        },
    },
    Terminal,
};

mod actions;
mod capabilities;
mod cli;
mod command_id;
mod content;
mod dispatcher;
mod document;
mod keybindings;
mod keymap;
mod layout;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod view_models;
mod views;

use actions::{Action, GlobalAction};
use content::Portfolio;
use middleware::{
    command_palette_middleware::CommandPaletteMiddleware,
    keyboard_middleware::KeyboardMiddleware, logging_middleware::LoggingMiddleware,
    mouse_middleware::MouseMiddleware, theme_middleware::ThemeMiddleware,
    translation_middleware::TranslationMiddleware,
};
use state::AppState;
use store::Store;

/// Escape-coded keys carry the Super modifier, so Cmd+K reaches the keymap.
/// Release events stay off; the loop only handles presses.
const KEYBOARD_FLAGS: KeyboardEnhancementFlags =
    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let log_file = logger::init()?;

    log::info!("Starting folio, logging to {:?}", log_file);

    let app_config = AppConfig::load();
    let portfolio = load_portfolio(cli.content.clone(), &app_config)?;
    let theme_mode = cli.theme.unwrap_or_else(|| Preferences::load().theme_pref);
    let mouse = app_config.mouse && !cli.no_mouse;
    let tick_rate = Duration::from_millis(app_config.tick_rate_ms.max(1));

    // Initialize store with middleware
    let mut store = Store::new(AppState::new(portfolio, theme_mode));

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(MouseMiddleware::new()));
    store.add_middleware(Box::new(TranslationMiddleware::new()));
    store.add_middleware(Box::new(CommandPaletteMiddleware::new()));
    store.add_middleware(Box::new(ThemeMiddleware::new(
        folio_config::paths::preferences_path().ok(),
    )));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);
    if keyboard_enhanced {
        execute!(stdout, PushKeyboardEnhancementFlags(KEYBOARD_FLAGS))?;
    } else {
        log::debug!("Terminal has no keyboard enhancement, Cmd+K is unavailable");
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main event loop
    let result = run_app(&mut terminal, &mut store, tick_rate);

    // Restore terminal
    if keyboard_enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Exited with error: {:#}", err);
    }

    log::info!("Exiting folio");
    result
}

/// Content path from the command line, then the config file, then the sample
fn load_portfolio(cli_path: Option<PathBuf>, config: &AppConfig) -> Result<Portfolio> {
    match cli_path.or_else(|| config.content.clone()) {
        Some(path) => {
            log::info!("Loading portfolio from {:?}", path);
            Portfolio::load(&path).context("Could not load portfolio")
        }
        None => {
            log::info!("No portfolio configured, showing the sample");
            Portfolio::sample().context("Built-in sample portfolio is invalid")
        }
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    tick_rate: Duration,
) -> Result<()> {
    let size = terminal.size()?;
    store.dispatch(Action::Global(GlobalAction::Resize(size.width, size.height)));

    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(store.state(), area, frame);
        })?;

        if !store.state().running {
            break;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (ignore key release)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    store.dispatch(Action::Global(GlobalAction::KeyPressed(key)));
                }
                Event::Mouse(mouse) => {
                    store.dispatch(Action::Global(GlobalAction::Mouse(mouse)));
                }
                Event::Resize(width, height) => {
                    store.dispatch(Action::Global(GlobalAction::Resize(width, height)));
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
            store.dispatch(Action::Global(GlobalAction::Tick(last_tick)));
        }
    }

    Ok(())
}
