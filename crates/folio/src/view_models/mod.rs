pub mod command_palette_view_model;
pub mod portfolio_view_model;

pub use command_palette_view_model::CommandPaletteViewModel;
pub use portfolio_view_model::PortfolioViewModel;
