//! Configuration error types.

use std::path::PathBuf;

/// Errors from loading, saving, or parsing configuration.
///
/// File-system and parse failures carry the offending path so a startup
/// failure names the exact file to look at.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read from disk.
    #[error("failed to read config at {}: {source}", .path.display())]
    ReadError {
        /// Path of the file that failed to read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file or its directory could not be written.
    #[error("failed to write config at {}: {source}", .path.display())]
    WriteError {
        /// Path that failed to write.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not valid RON for the config schema.
    #[error("failed to parse config at {}: {source}", .path.display())]
    ParseError {
        /// Path of the malformed file.
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The in-memory config could not be serialized to RON.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}
