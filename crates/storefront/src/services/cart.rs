//! Cart and checkout service.
//!
//! The cart lives in the [`Session`] as a list of product IDs; this service
//! resolves them against the [`CatalogStore`] to price and purchase them.

use thiserror::Error;
use tracing::{info, instrument};

use tech_house_core::{CartTotals, MembershipTier, Price, ProductId, cart_total, item_price};

use crate::db::StoreError;
use crate::db::accounts::AccountRegistry;
use crate::db::catalog::CatalogStore;
use crate::models::{Product, Session};

/// Errors that can occur during cart operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The product does not exist or has been sold.
    #[error("product {0} is not available")]
    Unavailable(ProductId),

    /// Checkout attempted with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Checkout attempted without a logged-in account.
    #[error("login required")]
    LoginRequired,

    /// Store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// One priced cart slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteLine {
    /// Product in the slot.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Price after the membership discount.
    pub price: Price,
}

/// A priced cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Membership tier the prices were computed with.
    pub tier: Option<MembershipTier>,
    /// One line per cart slot, in cart order.
    pub lines: Vec<QuoteLine>,
    /// Subtotal, delivery, and total.
    pub totals: CartTotals,
}

/// Result of a confirmed checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Number of cart slots bought.
    pub items: u32,
    /// Amount charged.
    pub totals: CartTotals,
    /// The account's purchase count after this order.
    pub total_purchases: u32,
}

/// Cart service over the catalog, the account registry, and the session.
pub struct CartService<'a> {
    catalog: &'a mut CatalogStore,
    accounts: &'a mut AccountRegistry,
    session: &'a mut Session,
    delivery_fee: Price,
}

impl<'a> CartService<'a> {
    /// Create a new cart service.
    #[must_use]
    pub const fn new(
        catalog: &'a mut CatalogStore,
        accounts: &'a mut AccountRegistry,
        session: &'a mut Session,
        delivery_fee: Price,
    ) -> Self {
        Self {
            catalog,
            accounts,
            session,
            delivery_fee,
        }
    }

    /// Membership tier of the logged-in account (`None` for guests).
    #[must_use]
    pub fn tier(&self) -> Option<MembershipTier> {
        self.session
            .current_username()
            .and_then(|username| self.accounts.get(username))
            .and_then(|account| account.membership)
    }

    /// Add an available product to the cart.
    ///
    /// The same product may be added repeatedly; each call takes a new slot.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Unavailable` if the product is unknown or sold.
    #[instrument(skip(self))]
    pub fn add(&mut self, id: ProductId) -> Result<&Product, CartError> {
        let product = self
            .catalog
            .get_available(id)
            .ok_or(CartError::Unavailable(id))?;
        self.session.push_cart(id);
        info!(cart_len = self.session.cart_len(), "product added to cart");
        Ok(product)
    }

    /// Price the cart for the current account.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Store` if a cart entry no longer resolves to a
    /// catalog product.
    pub fn quote(&self) -> Result<Quote, CartError> {
        let tier = self.tier();
        let products = self
            .session
            .cart()
            .iter()
            .map(|id| {
                self.catalog
                    .get(*id)
                    .ok_or_else(|| StoreError::NotFound(format!("product {id}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let lines = products
            .iter()
            .map(|product| QuoteLine {
                product_id: product.id,
                name: product.name.clone(),
                price: item_price(product.price, tier),
            })
            .collect();
        let totals = cart_total(products.iter().map(|p| p.price), tier, self.delivery_fee);

        Ok(Quote {
            tier,
            lines,
            totals,
        })
    }

    /// Complete the purchase of everything in the cart.
    ///
    /// Increments the account's purchase count by the number of cart slots,
    /// marks every carted product as sold, and empties the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::LoginRequired` for guests and `CartError::EmptyCart`
    /// if there is nothing to buy. Nothing is modified in either case.
    #[instrument(skip(self))]
    pub fn checkout(&mut self) -> Result<Receipt, CartError> {
        let username = self
            .session
            .current_username()
            .ok_or(CartError::LoginRequired)?
            .to_owned();
        if self.session.cart_len() == 0 {
            return Err(CartError::EmptyCart);
        }

        let quote = self.quote()?;
        let items = u32::try_from(quote.lines.len()).unwrap_or(u32::MAX);

        for id in self.session.take_cart() {
            self.catalog.mark_sold(id)?;
        }

        let account = self
            .accounts
            .get_mut(&username)
            .ok_or_else(|| StoreError::NotFound(format!("account {username}")))?;
        account.total_purchases = account.total_purchases.saturating_add(items);

        info!(
            items,
            total = %quote.totals.total,
            total_purchases = account.total_purchases,
            "order completed"
        );

        Ok(Receipt {
            items,
            totals: quote.totals,
            total_purchases: account.total_purchases,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;
    use tech_house_core::{CurrencyCode, ProductStatus};

    use super::*;

    struct Fixture {
        catalog: CatalogStore,
        accounts: AccountRegistry,
        session: Session,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                catalog: CatalogStore::seeded(CurrencyCode::UZS),
                accounts: AccountRegistry::seeded(SecretString::from("admin123")),
                session: Session::new(),
            }
        }

        fn cart(&mut self) -> CartService<'_> {
            CartService::new(
                &mut self.catalog,
                &mut self.accounts,
                &mut self.session,
                uzs(50_000),
            )
        }
    }

    fn uzs(units: i64) -> Price {
        Price::from_units(units, CurrencyCode::UZS)
    }

    #[test]
    fn test_guest_quote_charges_delivery() {
        let mut fx = Fixture::new();
        fx.cart().add(ProductId::new(1)).unwrap();
        let quote = fx.cart().quote().unwrap();
        assert_eq!(quote.tier, None);
        assert_eq!(quote.lines.len(), 1);
        assert_eq!(quote.totals.total.to_string(), "500,000 UZS");
    }

    #[test]
    fn test_gold_quote_waives_delivery() {
        let mut fx = Fixture::new();
        fx.session.sign_in("admin");
        fx.accounts.get_mut("admin").unwrap().membership = Some(MembershipTier::Gold);
        fx.cart().add(ProductId::new(1)).unwrap();
        let quote = fx.cart().quote().unwrap();
        assert_eq!(quote.lines[0].price, uzs(382_500));
        assert_eq!(quote.totals.total, uzs(382_500));
    }

    #[test]
    fn test_add_rejects_unknown_and_sold() {
        let mut fx = Fixture::new();
        assert_eq!(
            fx.cart().add(ProductId::new(42)).unwrap_err(),
            CartError::Unavailable(ProductId::new(42))
        );
        fx.catalog.mark_sold(ProductId::new(2)).unwrap();
        assert_eq!(
            fx.cart().add(ProductId::new(2)).unwrap_err(),
            CartError::Unavailable(ProductId::new(2))
        );
        assert_eq!(fx.session.cart_len(), 0);
    }

    #[test]
    fn test_checkout_counts_duplicates_and_marks_sold() {
        let mut fx = Fixture::new();
        fx.session.sign_in("admin");
        fx.cart().add(ProductId::new(3)).unwrap();
        fx.cart().add(ProductId::new(3)).unwrap();
        fx.cart().add(ProductId::new(10)).unwrap();

        let receipt = fx.cart().checkout().unwrap();
        assert_eq!(receipt.items, 3);
        assert_eq!(receipt.total_purchases, 3);
        assert_eq!(receipt.totals.total, uzs(350_000 * 2 + 280_000 + 50_000));
        assert_eq!(fx.session.cart_len(), 0);
        assert_eq!(fx.accounts.get("admin").unwrap().total_purchases, 3);
        for id in [3, 10] {
            assert_eq!(
                fx.catalog.get(ProductId::new(id)).unwrap().status,
                ProductStatus::Sold
            );
        }
        assert!(fx.cart().add(ProductId::new(3)).is_err());
    }

    #[test]
    fn test_checkout_empty_cart_changes_nothing() {
        let mut fx = Fixture::new();
        fx.session.sign_in("admin");
        assert_eq!(fx.cart().checkout().unwrap_err(), CartError::EmptyCart);
        assert_eq!(fx.accounts.get("admin").unwrap().total_purchases, 0);
        assert!(fx.catalog.all().iter().all(Product::is_available));
    }

    #[test]
    fn test_checkout_requires_login() {
        let mut fx = Fixture::new();
        fx.cart().add(ProductId::new(1)).unwrap();
        assert_eq!(fx.cart().checkout().unwrap_err(), CartError::LoginRequired);
        assert_eq!(fx.session.cart_len(), 1);
    }
}
