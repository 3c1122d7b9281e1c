//! Runtime configuration, read from an optional TOML file.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::*;
