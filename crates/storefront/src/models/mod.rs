//! Domain models for the storefront.
//!
//! These are plain in-memory records; the stores in [`crate::db`] own them
//! and the session refers to them by key.

pub mod account;
pub mod product;
pub mod session;

pub use account::Account;
pub use product::Product;
pub use session::Session;
