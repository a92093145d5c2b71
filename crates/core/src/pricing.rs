//! Membership pricing rules.
//!
//! Every function here is pure: the caller passes the tier of the current
//! account (or `None` for guests and accounts without a package) and the
//! store's delivery fee.

use serde::Serialize;

use crate::types::{MembershipTier, Price};

/// Breakdown of a cart's cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    /// Sum of the discounted item prices.
    pub subtotal: Price,
    /// Delivery charged on top of the subtotal (zero when waived).
    pub delivery: Price,
    /// `subtotal + delivery`.
    pub total: Price,
}

impl CartTotals {
    /// Returns `true` if delivery was waived.
    #[must_use]
    pub fn free_delivery(&self) -> bool {
        self.delivery.is_zero()
    }
}

/// Price of a single item after the tier's discount.
#[must_use]
pub fn item_price(price: Price, tier: Option<MembershipTier>) -> Price {
    let percent = tier.map_or(0, MembershipTier::discount_percent);
    price.percent_off(percent)
}

/// Delivery charged for an order: nothing for tiers with free delivery,
/// otherwise the flat `fee`.
#[must_use]
pub fn delivery_charge(tier: Option<MembershipTier>, fee: Price) -> Price {
    if tier.is_some_and(MembershipTier::free_delivery) {
        Price::zero(fee.currency_code)
    } else {
        fee
    }
}

/// Total for a cart given each entry's base price.
///
/// Duplicated products appear once per cart slot in `prices` and are
/// charged once per slot.
#[must_use]
pub fn cart_total<I>(prices: I, tier: Option<MembershipTier>, fee: Price) -> CartTotals
where
    I: IntoIterator<Item = Price>,
{
    let subtotal = prices
        .into_iter()
        .map(|price| item_price(price, tier))
        .fold(Price::zero(fee.currency_code), |acc, price| acc + price);
    let delivery = delivery_charge(tier, fee);

    CartTotals {
        subtotal,
        delivery,
        total: subtotal + delivery,
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::types::CurrencyCode;

    const FEE: i64 = 50_000;

    fn uzs(units: i64) -> Price {
        Price::from_units(units, CurrencyCode::UZS)
    }

    #[test]
    fn test_item_price_matches_discount_formula() {
        let base = uzs(920_000);
        let tiers = [
            (None, 0),
            (Some(MembershipTier::Bronze), 5),
            (Some(MembershipTier::Silver), 10),
            (Some(MembershipTier::Gold), 15),
        ];
        for (tier, pct) in tiers {
            let expected =
                base.amount * (Decimal::ONE - Decimal::from(pct) / Decimal::ONE_HUNDRED);
            assert_eq!(item_price(base, tier).amount, expected, "tier {tier:?}");
        }
    }

    #[test]
    fn test_delivery_waived_only_for_gold() {
        let fee = uzs(FEE);
        assert_eq!(delivery_charge(None, fee), fee);
        assert_eq!(delivery_charge(Some(MembershipTier::Bronze), fee), fee);
        assert_eq!(delivery_charge(Some(MembershipTier::Silver), fee), fee);
        assert!(delivery_charge(Some(MembershipTier::Gold), fee).is_zero());
    }

    #[test]
    fn test_mixer_without_membership() {
        let totals = cart_total([uzs(450_000)], None, uzs(FEE));
        assert_eq!(totals.subtotal, uzs(450_000));
        assert_eq!(totals.total, uzs(500_000));
        assert_eq!(totals.total.to_string(), "500,000 UZS");
        assert!(!totals.free_delivery());
    }

    #[test]
    fn test_mixer_with_gold() {
        let totals = cart_total([uzs(450_000)], Some(MembershipTier::Gold), uzs(FEE));
        assert_eq!(totals.subtotal, uzs(382_500));
        assert!(totals.free_delivery());
        assert_eq!(totals.total, uzs(382_500));
    }

    #[test]
    fn test_duplicates_are_charged_per_slot() {
        let totals = cart_total(
            [uzs(350_000), uzs(350_000)],
            Some(MembershipTier::Silver),
            uzs(FEE),
        );
        assert_eq!(totals.subtotal, uzs(630_000));
        assert_eq!(totals.total, uzs(680_000));
    }

    #[test]
    fn test_empty_cart_still_charges_delivery() {
        let totals = cart_total(Vec::new(), None, uzs(FEE));
        assert!(totals.subtotal.is_zero());
        assert_eq!(totals.total, uzs(FEE));
    }
}
