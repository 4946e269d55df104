pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod report;
pub mod ui;
pub mod wizard;

pub use error::{AppError, Result};
