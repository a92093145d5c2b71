//! Authentication service.
//!
//! Provides password login, registration, membership changes, and admin
//! promotion against the in-memory [`AccountRegistry`].

mod error;

pub use error::AuthError;

use secrecy::SecretString;
use tracing::{info, instrument, warn};

use tech_house_core::{MembershipTier, Role};

use crate::db::StoreError;
use crate::db::accounts::{AccountRegistry, SEED_ADMIN_USERNAME};
use crate::models::Account;

/// Purchases a customer needs before an admin may promote them.
pub const PROMOTION_PURCHASES: u32 = 5;

/// Where a customer stands on the way to admin promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminEligibility {
    /// The account is already an admin.
    AlreadyAdmin,
    /// Enough purchases have been made; an admin can promote the account.
    Eligible,
    /// More purchases are needed.
    NeedsPurchases(u32),
}

/// Authentication service.
///
/// Handles registration, login, membership selection, and promotion.
pub struct AuthService<'a> {
    accounts: &'a mut AccountRegistry,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(accounts: &'a mut AccountRegistry) -> Self {
        Self { accounts }
    }

    // =========================================================================
    // Password Authentication
    // =========================================================================

    /// Returns `true` if the username is already registered.
    #[must_use]
    pub fn is_registered(&self, username: &str) -> bool {
        self.accounts.contains(username)
    }

    /// Register a new customer with username and password.
    ///
    /// The account starts without a membership and with zero purchases. The
    /// caller is not logged in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmptyCredentials` if either field is blank.
    /// Returns `AuthError::UserAlreadyExists` if the username is taken; the
    /// registry is left unchanged.
    #[instrument(skip(self, password))]
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        if username.is_empty() || password.is_empty() {
            return Err(AuthError::EmptyCredentials);
        }

        let account = Account::customer(username, SecretString::from(password));
        self.accounts.insert(account).map_err(|e| match e {
            StoreError::Conflict(_) => AuthError::UserAlreadyExists,
            other => AuthError::Store(other),
        })?;

        info!("account registered");
        Ok(())
    }

    /// Login with username and password.
    ///
    /// Returns the canonical username to store in the session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the user is unknown or the
    /// password does not match exactly.
    #[instrument(skip(self, password))]
    pub fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let account = self
            .accounts
            .get(username)
            .filter(|account| account.password_matches(password))
            .ok_or_else(|| {
                warn!("login rejected");
                AuthError::InvalidCredentials
            })?;

        info!(role = %account.role, "login succeeded");
        Ok(account.username.clone())
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Replace the account's membership tier.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if the account does not exist.
    #[instrument(skip(self))]
    pub fn set_membership(
        &mut self,
        username: &str,
        tier: MembershipTier,
    ) -> Result<(), AuthError> {
        let account = self
            .accounts
            .get_mut(username)
            .ok_or(AuthError::UserNotFound)?;
        account.membership = Some(tier);
        info!("membership updated");
        Ok(())
    }

    // =========================================================================
    // Admin Promotion
    // =========================================================================

    /// How close an account is to being promotable.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if the account does not exist.
    pub fn admin_eligibility(&self, username: &str) -> Result<AdminEligibility, AuthError> {
        let account = self.accounts.get(username).ok_or(AuthError::UserNotFound)?;
        Ok(eligibility(account))
    }

    /// Customers listed on the promotion screen (everyone but the seeded admin).
    #[must_use]
    pub fn promotion_candidates(&self) -> Vec<&Account> {
        self.accounts
            .iter()
            .filter(|account| account.username != SEED_ADMIN_USERNAME)
            .collect()
    }

    /// Promote a customer to admin.
    ///
    /// `admin_password` must match the seeded admin account's password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidAdminPassword`, `AuthError::UserNotFound`,
    /// `AuthError::AlreadyAdmin`, or `AuthError::NotEnoughPurchases`; the
    /// account is unchanged in every error case.
    #[instrument(skip(self, admin_password))]
    pub fn promote(&mut self, username: &str, admin_password: &str) -> Result<(), AuthError> {
        let authorised = self
            .accounts
            .get(SEED_ADMIN_USERNAME)
            .is_some_and(|admin| admin.password_matches(admin_password));
        if !authorised {
            warn!("promotion rejected: bad admin password");
            return Err(AuthError::InvalidAdminPassword);
        }

        let account = self
            .accounts
            .get_mut(username)
            .ok_or(AuthError::UserNotFound)?;
        match eligibility(account) {
            AdminEligibility::AlreadyAdmin => return Err(AuthError::AlreadyAdmin),
            AdminEligibility::NeedsPurchases(_) => {
                return Err(AuthError::NotEnoughPurchases {
                    required: PROMOTION_PURCHASES,
                    actual: account.total_purchases,
                });
            }
            AdminEligibility::Eligible => {}
        }

        account.role = Role::Admin;
        info!("account promoted to admin");
        Ok(())
    }
}

fn eligibility(account: &Account) -> AdminEligibility {
    if account.is_admin() {
        AdminEligibility::AlreadyAdmin
    } else if account.total_purchases >= PROMOTION_PURCHASES {
        AdminEligibility::Eligible
    } else {
        AdminEligibility::NeedsPurchases(PROMOTION_PURCHASES - account.total_purchases)
    }
}
