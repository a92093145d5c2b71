//! Authentication error types.

use thiserror::Error;

use crate::db::StoreError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Username or password left blank.
    #[error("username and password cannot be empty")]
    EmptyCredentials,

    /// Invalid credentials (wrong password or user not found).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// User not found.
    #[error("user not found")]
    UserNotFound,

    /// User already exists.
    #[error("user already exists")]
    UserAlreadyExists,

    /// The admin password given to authorise a promotion is wrong.
    #[error("invalid admin password")]
    InvalidAdminPassword,

    /// Promotion target is already an admin.
    #[error("user is already an admin")]
    AlreadyAdmin,

    /// Promotion target has not bought enough items yet.
    #[error("user needs at least {required} purchases (currently has {actual})")]
    NotEnoughPurchases {
        /// Purchases required for promotion.
        required: u32,
        /// Purchases the account has made.
        actual: u32,
    },

    /// Store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
