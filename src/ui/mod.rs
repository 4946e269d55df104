//! GUI panels and application state.

pub mod app;
pub mod charts;
pub mod competitor_panel;
pub mod components;
pub mod dashboard;
pub mod landing;
pub mod loader;
pub mod module_panel;

pub use app::RivalLensApp;
