//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod app;
pub mod command_palette;
pub mod page;
mod project_filter;
pub mod typewriter;

pub use app::{resolve_appearance, AppState};
pub use command_palette::{CommandPaletteState, InputFocus, SelectionMove};
pub use page::PageState;
pub use project_filter::ProjectFilterState;
pub use typewriter::TypewriterState;
