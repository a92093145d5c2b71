//! Session-related types.
//!
//! The session holds the logged-in identity and the cart for the current
//! run. Both refer to store records by key rather than owning copies, so a
//! product added twice occupies two cart slots that resolve to one record.

use tech_house_core::ProductId;

/// The current run's identity and cart.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<String>,
    cart: Vec<ProductId>,
}

impl Session {
    /// A fresh guest session with an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Username of the logged-in account, or `None` for guests.
    #[must_use]
    pub fn current_username(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Returns `true` if an account is logged in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Attach an account to the session.
    pub fn sign_in(&mut self, username: impl Into<String>) {
        self.current = Some(username.into());
    }

    /// Detach the account. The cart is kept.
    pub fn sign_out(&mut self) {
        self.current = None;
    }

    /// Cart entries in the order they were added.
    #[must_use]
    pub fn cart(&self) -> &[ProductId] {
        &self.cart
    }

    /// Append a product to the cart.
    pub fn push_cart(&mut self, id: ProductId) {
        self.cart.push(id);
    }

    /// Remove every cart entry, returning them.
    pub fn take_cart(&mut self) -> Vec<ProductId> {
        std::mem::take(&mut self.cart)
    }

    /// Number of cart slots (duplicates count individually).
    #[must_use]
    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }
}
