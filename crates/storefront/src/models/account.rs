//! Account domain type.

use secrecy::{ExposeSecret, SecretString};

use tech_house_core::{MembershipTier, Role};

/// A registered store account.
///
/// The password is kept as typed (this is a simulator, not a security
/// boundary); `SecretString` only keeps it out of `Debug` output and logs.
#[derive(Debug)]
pub struct Account {
    /// Unique, immutable login name.
    pub username: String,
    /// Plaintext password.
    pub password: SecretString,
    /// Account role.
    pub role: Role,
    /// Active membership package, if any.
    pub membership: Option<MembershipTier>,
    /// Number of items bought across all checkouts.
    pub total_purchases: u32,
}

impl Account {
    /// Create a customer account with no membership and no purchases.
    #[must_use]
    pub fn customer(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
            role: Role::Customer,
            membership: None,
            total_purchases: 0,
        }
    }

    /// Create an admin account.
    #[must_use]
    pub fn admin(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            role: Role::Admin,
            ..Self::customer(username, password)
        }
    }

    /// Exact password comparison.
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password.expose_secret() == candidate
    }

    /// Returns `true` for admin accounts.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}
