//! Price a hypothetical cart of seed products.
//!
//! # Usage
//!
//! ```bash
//! th-cli quote 1 3 3 --tier gold
//! ```

use std::fmt::Write;

use tech_house_core::{MembershipTier, Price, ProductId, cart_total, item_price};
use tech_house_storefront::db::catalog::CatalogStore;

use super::CommandError;

/// Render the cart lines and totals for `ids`.
///
/// Duplicate IDs occupy one cart slot each.
///
/// # Errors
///
/// Returns `CommandError::UnknownProduct` for an ID outside the seed catalog.
pub fn render(
    ids: &[ProductId],
    tier: Option<MembershipTier>,
    delivery_fee: Price,
) -> Result<String, CommandError> {
    let catalog = CatalogStore::seeded(delivery_fee.currency_code);
    let products = ids
        .iter()
        .map(|id| catalog.get(*id).ok_or(CommandError::UnknownProduct(*id)))
        .collect::<Result<Vec<_>, _>>()?;

    let totals = cart_total(products.iter().map(|p| p.price), tier, delivery_fee);

    let mut out = String::new();
    match tier {
        Some(tier) => {
            let _ = writeln!(out, "Membership: {tier} ({}% off)", tier.discount_percent());
        }
        None => out.push_str("Membership: none\n"),
    }
    for (index, product) in products.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} - {}",
            index + 1,
            product.name,
            item_price(product.price, tier)
        );
    }
    let _ = writeln!(out, "Subtotal: {}", totals.subtotal);
    if totals.free_delivery() {
        out.push_str("Delivery: FREE\n");
    } else {
        let _ = writeln!(out, "Delivery: {}", totals.delivery);
    }
    let _ = writeln!(out, "TOTAL: {}", totals.total);
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tech_house_core::CurrencyCode;

    use super::*;

    fn fee() -> Price {
        Price::from_units(50_000, CurrencyCode::UZS)
    }

    #[test]
    fn test_mixer_without_membership() {
        let out = render(&[ProductId::new(1)], None, fee()).unwrap();
        assert!(out.contains("1. Mixer - 450,000 UZS"));
        assert!(out.contains("Delivery: 50,000 UZS"));
        assert!(out.ends_with("TOTAL: 500,000 UZS\n"));
    }

    #[test]
    fn test_mixer_with_gold() {
        let out = render(&[ProductId::new(1)], Some(MembershipTier::Gold), fee()).unwrap();
        assert!(out.contains("Membership: Gold (15% off)"));
        assert!(out.contains("Delivery: FREE"));
        assert!(out.ends_with("TOTAL: 382,500 UZS\n"));
    }

    #[test]
    fn test_unknown_product() {
        let err = render(&[ProductId::new(1), ProductId::new(42)], None, fee()).unwrap_err();
        assert!(matches!(err, CommandError::UnknownProduct(id) if id == ProductId::new(42)));
    }
}
