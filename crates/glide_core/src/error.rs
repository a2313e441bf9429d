//! Host error types

use thiserror::Error;

/// Failures a host reports while mounting or measuring a scroll container
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HostError {
    /// The container handed to the host is not a usable element
    #[error("container is not a valid node: {0}")]
    InvalidContainer(String),

    /// A layout read failed (node detached mid-measure, zero-sized parent, ...)
    #[error("layout measurement failed: {0}")]
    Measurement(String),

    /// The host has already been torn down
    #[error("host is detached")]
    Detached,
}

/// Result type for host operations
pub type Result<T> = std::result::Result<T, HostError>;
