//! Error types for Murmur configuration

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a [`crate::BubbleConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown locale: {0}")]
    InvalidLocale(String),

    #[error("Invalid classification limits: {0}")]
    InvalidLimits(String),

    #[error("Default profile image must not be empty")]
    EmptyDefaultImage,
}
