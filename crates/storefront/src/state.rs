//! Application state owned by the terminal session.

use crate::config::StorefrontConfig;
use crate::db::accounts::AccountRegistry;
use crate::db::catalog::CatalogStore;
use crate::models::{Account, Session};
use crate::services::auth::AuthService;
use crate::services::cart::CartService;

/// Everything a session reads and mutates.
///
/// Services borrow the parts they need for a single step; nothing here is
/// shared across threads.
#[derive(Debug)]
pub struct AppState {
    config: StorefrontConfig,
    catalog: CatalogStore,
    accounts: AccountRegistry,
    session: Session,
}

impl AppState {
    /// Create a new application state with the seed catalog and the seeded
    /// admin account.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = CatalogStore::seeded(config.currency);
        let accounts = AccountRegistry::seeded(config.admin_password.clone());

        Self {
            config,
            catalog,
            accounts,
            session: Session::new(),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Get a mutable reference to the product catalog.
    pub const fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    /// Get a reference to the account registry.
    #[must_use]
    pub const fn accounts(&self) -> &AccountRegistry {
        &self.accounts
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// The logged-in account, if any.
    #[must_use]
    pub fn current_account(&self) -> Option<&Account> {
        self.session
            .current_username()
            .and_then(|username| self.accounts.get(username))
    }

    /// Authentication service over the account registry.
    pub const fn auth(&mut self) -> AuthService<'_> {
        AuthService::new(&mut self.accounts)
    }

    /// Cart service for the current session.
    pub const fn cart(&mut self) -> CartService<'_> {
        CartService::new(
            &mut self.catalog,
            &mut self.accounts,
            &mut self.session,
            self.config.delivery_fee,
        )
    }
}
