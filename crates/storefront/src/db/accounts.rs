//! Account registry.

use std::collections::BTreeMap;

use secrecy::SecretString;
use tracing::debug;

use super::StoreError;
use crate::models::Account;

/// Username of the account present at startup.
pub const SEED_ADMIN_USERNAME: &str = "admin";

/// Accounts keyed by username.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    accounts: BTreeMap<String, Account>,
}

impl AccountRegistry {
    /// An empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accounts: BTreeMap::new(),
        }
    }

    /// A registry holding only the seeded admin account.
    #[must_use]
    pub fn seeded(admin_password: SecretString) -> Self {
        let mut accounts = BTreeMap::new();
        accounts.insert(
            SEED_ADMIN_USERNAME.to_owned(),
            Account::admin(SEED_ADMIN_USERNAME, admin_password),
        );
        Self { accounts }
    }

    /// Returns `true` if the username is taken.
    #[must_use]
    pub fn contains(&self, username: &str) -> bool {
        self.accounts.contains_key(username)
    }

    /// Look up an account.
    #[must_use]
    pub fn get(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    /// Look up an account for modification.
    pub fn get_mut(&mut self, username: &str) -> Option<&mut Account> {
        self.accounts.get_mut(username)
    }

    /// Insert a new account.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the username is already registered;
    /// the existing account is left untouched.
    pub fn insert(&mut self, account: Account) -> Result<(), StoreError> {
        if self.accounts.contains_key(&account.username) {
            return Err(StoreError::Conflict(format!(
                "username {} already exists",
                account.username
            )));
        }
        debug!(username = %account.username, role = %account.role, "account inserted");
        self.accounts.insert(account.username.clone(), account);
        Ok(())
    }

    /// All accounts, ordered by username.
    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns `true` if there are no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
