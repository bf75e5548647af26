mod app;
mod effects;
mod engine;
pub mod logging;
mod ui;

pub use app::{run_app, AppSettings};
