//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Registration, login, membership selection, admin promotion
//! - `cart` - Cart pricing and checkout
//!
//! Services borrow the stores they need from [`crate::state::AppState`] for
//! the duration of one step.

pub mod auth;
pub mod cart;
