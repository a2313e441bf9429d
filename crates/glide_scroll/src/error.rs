//! Scroll engine error types

use std::path::PathBuf;

use glide_core::HostError;
use thiserror::Error;

/// Errors surfaced by [`Scrollable`](crate::Scrollable)
#[derive(Error, Debug)]
pub enum ScrollError {
    /// Construction was handed something that is not a mountable container
    #[error("Scrollable: container is not a valid node ({0})")]
    InvalidContainer(String),

    /// The host failed while mounting or measuring
    #[error(transparent)]
    Host(#[from] HostError),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scroll config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize scroll config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for scroll operations
pub type Result<T> = std::result::Result<T, ScrollError>;
