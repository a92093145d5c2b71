//! Catalog product domain type.

use serde::Serialize;

use tech_house_core::{Price, ProductId, ProductStatus};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Unique product ID (starts at 1).
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Base price before membership discounts.
    pub price: Price,
    /// Whether the product can still be bought.
    pub status: ProductStatus,
    /// Category used to group the product listing.
    pub category: String,
}

impl Product {
    /// Returns `true` if the product can be added to a cart.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.status.is_available()
    }

    /// Case-insensitive match of `keyword` against the name or category.
    ///
    /// `keyword` must already be lowercase.
    #[must_use]
    pub fn matches(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(keyword) || self.category.to_lowercase().contains(keyword)
    }

    /// One-line listing used by the product, search, and add-to-cart screens.
    #[must_use]
    pub fn listing(&self) -> String {
        format!("ID: {} | {} | {}", self.id, self.name, self.price)
    }
}
