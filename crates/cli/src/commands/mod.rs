//! `th-cli` subcommands.

pub mod catalog;
pub mod quote;
pub mod replay;

use thiserror::Error;

use tech_house_core::ProductId;
use tech_house_storefront::error::AppError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Reading a script or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A product ID is not in the catalog.
    #[error("Unknown product ID: {0}")]
    UnknownProduct(ProductId),

    /// The storefront session failed.
    #[error(transparent)]
    App(#[from] AppError),
}
