//! Error types for mounting and configuring the player.

use std::path::PathBuf;

/// Errors that can occur while mounting a player.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Parent element not found: #{id}")]
    MountNotFound { id: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors that can occur while loading or resolving player options.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required option: {field}")]
    MissingField { field: &'static str },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML options: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON options: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported options file format: {path} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },
}
