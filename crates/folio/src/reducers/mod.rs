pub mod app_reducer;
pub mod command_palette_reducer;
pub mod page_reducer;
pub mod project_filter_reducer;
pub mod theme_reducer;
