//! Configuration: RON-backed settings with defaults, plus CLI overrides.

pub mod cli;
pub mod config;
pub mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, WorldGenConfig};
pub use error::ConfigError;
