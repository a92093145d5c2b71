//! In-memory stores for the storefront.
//!
//! Nothing here outlives the process: the catalog and account registry are
//! seeded when [`crate::state::AppState`] is built and dropped on exit.
//!
//! ## Stores
//!
//! - [`catalog::CatalogStore`] - Products and their availability
//! - [`accounts::AccountRegistry`] - Accounts keyed by username

pub mod accounts;
pub mod catalog;

use thiserror::Error;

/// Errors returned by store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Requested record was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Constraint violation (e.g., duplicate username).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// Record failed validation before insertion.
    #[error("invalid record: {0}")]
    Invalid(String),
}
