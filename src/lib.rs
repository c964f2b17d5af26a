pub mod config;
pub mod handlers;

pub use config::{Config, load_config};
pub use handlers::{AppState, router};
