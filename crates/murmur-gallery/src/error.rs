//! Gallery errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while preparing the gallery
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Fixture file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fixture is not valid conversation JSON
    #[error("Invalid conversation fixture: {0}")]
    Json(#[from] serde_json::Error),

    /// Bubble config failed to load or validate
    #[error("Invalid bubble config: {0}")]
    Config(#[from] murmur_core::ConfigError),

    /// Fixture parsed but holds no messages
    #[error("Conversation '{0}' has no messages")]
    EmptyConversation(String),
}

/// Result type for gallery operations
pub type GalleryResult<T> = Result<T, GalleryError>;
