//! Application configuration.
//!
//! Loaded once at startup from a TOML file; every field has a default so
//! a missing file is not an error.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, ScrambleConfig};
