//! services/desk/src/error.rs
//!
//! Defines the primary error type for the desk client.

use crate::config::ConfigError;

/// The primary error type for the `desk` service.
#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error building the HTTP client.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Represents a standard Input/Output error (e.g., reading the terminal).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
