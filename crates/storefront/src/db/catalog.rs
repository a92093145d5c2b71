//! Product catalog store.

use tracing::debug;

use tech_house_core::{CurrencyCode, Price, ProductId, ProductStatus};

use super::StoreError;
use crate::models::Product;

/// The fixed opening stock: `(name, price, category)`.
const SEED_PRODUCTS: &[(&str, i64, &str)] = &[
    ("Mixer", 450_000, "Kitchen appliances"),
    ("Oven", 2_500_000, "Kitchen appliances"),
    ("Blender", 350_000, "Kitchen appliances"),
    ("Microwave", 800_000, "Kitchen appliances"),
    ("Refrigerator", 3_500_000, "Kitchen appliances"),
    ("Vacuum Cleaner", 1_200_000, "Cleaning devices"),
    ("Robot Vacuum", 2_800_000, "Cleaning devices"),
    ("Air Conditioner", 4_500_000, "Heating and cooling devices"),
    ("Heater", 650_000, "Heating and cooling devices"),
    ("Fan", 280_000, "Heating and cooling devices"),
    ("Hair Dryer", 180_000, "Personal care devices"),
    ("Electric Shaver", 320_000, "Personal care devices"),
    ("Smart Speaker", 550_000, "Smart home devices"),
    ("Smart Doorbell", 780_000, "Smart home devices"),
    ("Smart Thermostat", 920_000, "Smart home devices"),
];

/// Store of catalog products, kept in ID order.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// An empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
        }
    }

    /// The opening catalog, priced in `currency`.
    #[must_use]
    pub fn seeded(currency: CurrencyCode) -> Self {
        let mut catalog = Self::new();
        for (name, units, category) in SEED_PRODUCTS {
            catalog.push(name, Price::from_units(*units, currency), category);
        }
        catalog
    }

    /// Every product, in ID order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by ID, only if it can still be bought.
    #[must_use]
    pub fn get_available(&self, id: ProductId) -> Option<&Product> {
        self.get(id).filter(|p| p.is_available())
    }

    /// Products that can still be bought.
    pub fn available(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_available())
    }

    /// Available products grouped by category, groups in order of first
    /// appearance in the catalog.
    #[must_use]
    pub fn available_by_category(&self) -> Vec<(&str, Vec<&Product>)> {
        let mut groups: Vec<(&str, Vec<&Product>)> = Vec::new();
        for product in self.available() {
            match groups
                .iter_mut()
                .find(|(category, _)| *category == product.category)
            {
                Some((_, members)) => members.push(product),
                None => groups.push((product.category.as_str(), vec![product])),
            }
        }
        groups
    }

    /// Products whose name or category contains `keyword`, ignoring case.
    ///
    /// Sold products are included.
    #[must_use]
    pub fn search(&self, keyword: &str) -> Vec<&Product> {
        let keyword = keyword.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.matches(&keyword))
            .collect()
    }

    /// Distinct categories, sorted alphabetically.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.products.iter().map(|p| p.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    /// Add a new available product under an existing category.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Invalid` if the name is blank and
    /// `StoreError::NotFound` if the category is not already in use.
    pub fn add(
        &mut self,
        name: &str,
        price: Price,
        category: &str,
    ) -> Result<ProductId, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::Invalid("product name cannot be empty".to_owned()));
        }
        if !self.products.iter().any(|p| p.category == category) {
            return Err(StoreError::NotFound(format!("category {category}")));
        }
        Ok(self.push(name, price, category))
    }

    /// Mark a product as sold. Marking an already sold product is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has this ID.
    pub fn mark_sold(&mut self, id: ProductId) -> Result<(), StoreError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("product {id}")))?;
        product.status = ProductStatus::Sold;
        debug!(product_id = %id, "product marked sold");
        Ok(())
    }

    fn next_id(&self) -> ProductId {
        self.products
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(ProductId::new(1), |id| id.next())
    }

    fn push(&mut self, name: &str, price: Price, category: &str) -> ProductId {
        let id = self.next_id();
        self.products.push(Product {
            id,
            name: name.to_owned(),
            price,
            status: ProductStatus::Available,
            category: category.to_owned(),
        });
        id
    }
}
