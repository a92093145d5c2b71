//! Top-level error type for the storefront binaries.
//!
//! User mistakes never reach this type; the flows turn them into transcript
//! lines. `AppError` covers what ends a session: broken I/O, bad
//! configuration, and misuse of the prompt protocol.

use thiserror::Error;

use crate::config::ConfigError;
use crate::terminal::SessionError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading input or writing the transcript failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The prompt loop was driven out of order.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
