//! Global actions - not tied to any specific screen

use ratatui::crossterm::event::{KeyEvent, MouseEvent};
use std::time::Instant;

/// Global actions that affect the entire application
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key pressed (before translation)
    KeyPressed(KeyEvent),
    /// Raw mouse event (before hit testing)
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows)
    Resize(u16, u16),
    /// Periodic tick for animations
    Tick(Instant),
    /// Quit the application
    Quit,
}
