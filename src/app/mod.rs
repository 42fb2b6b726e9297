pub mod commands;
pub mod config;
mod context;
mod logging;

pub use context::AppContext;
pub use logging::init_logging;
