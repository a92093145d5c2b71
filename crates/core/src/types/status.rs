//! Status enums for catalog products and accounts.

use serde::{Deserialize, Serialize};

/// Availability of a catalog product.
///
/// Products start out `Available` and move to `Sold` on checkout; the
/// transition never reverses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductStatus {
    #[default]
    Available,
    Sold,
}

impl ProductStatus {
    /// Returns `true` if the product can still be added to a cart.
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "Available"),
            Self::Sold => write!(f, "Sold"),
        }
    }
}

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Store staff; can add products and promote customers.
    Admin,
    /// Regular shopper.
    #[default]
    Customer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Customer => write!(f, "customer"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "customer" => Ok(Self::Customer),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

/// Membership package held by an account.
///
/// Accounts without a package have no tier at all (`Option::None`), which
/// the pricing rules treat as a zero discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MembershipTier {
    Bronze,
    Silver,
    Gold,
}

impl MembershipTier {
    /// Every tier, in the order they are offered.
    pub const ALL: [Self; 3] = [Self::Bronze, Self::Silver, Self::Gold];

    /// Percentage taken off every item price.
    #[must_use]
    pub const fn discount_percent(self) -> u8 {
        match self {
            Self::Bronze => 5,
            Self::Silver => 10,
            Self::Gold => 15,
        }
    }

    /// Whether the tier waives the delivery fee.
    #[must_use]
    pub const fn free_delivery(self) -> bool {
        matches!(self, Self::Gold)
    }

    /// Tier selected by a numbered menu choice (`1` Bronze .. `3` Gold).
    #[must_use]
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::Bronze),
            "2" => Some(Self::Silver),
            "3" => Some(Self::Gold),
            _ => None,
        }
    }
}

impl std::fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bronze => write!(f, "Bronze"),
            Self::Silver => write!(f, "Silver"),
            Self::Gold => write!(f, "Gold"),
        }
    }
}

impl std::str::FromStr for MembershipTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bronze" => Ok(Self::Bronze),
            "silver" => Ok(Self::Silver),
            "gold" => Ok(Self::Gold),
            _ => Err(format!("invalid membership tier: {s}")),
        }
    }
}
