//! Application configuration: TOML file with sensible defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, RatesConfig, UiConfig};
