//! Tech House Core - Shared types and pricing rules.
//!
//! This crate provides the types used across all Tech House components:
//! - `storefront` - The terminal storefront (stores, flows, prompt loop)
//! - `cli` - Command-line tools for inspecting the catalog and replaying sessions
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! terminal handling, no global state. This keeps it lightweight and allows
//! it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices, tiers, and statuses
//! - [`pricing`] - Membership discounts, delivery fees, and cart totals

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pricing;
pub mod types;

pub use pricing::{CartTotals, cart_total, delivery_charge, item_price};
pub use types::*;
