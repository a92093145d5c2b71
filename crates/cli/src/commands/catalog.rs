//! Dump the seed catalog.
//!
//! # Usage
//!
//! ```bash
//! th-cli catalog
//! th-cli catalog --format json --available
//! ```

use clap::ValueEnum;

use tech_house_core::CurrencyCode;
use tech_house_storefront::db::catalog::CatalogStore;
use tech_house_storefront::models::Product;

use super::CommandError;

/// Output format for the catalog dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

/// Render the catalog a fresh session starts with.
///
/// # Errors
///
/// Returns `CommandError::Yaml` or `CommandError::Json` if serialization fails.
pub fn render(
    currency: CurrencyCode,
    format: Format,
    available_only: bool,
) -> Result<String, CommandError> {
    let catalog = CatalogStore::seeded(currency);
    let products: Vec<&Product> = if available_only {
        catalog.available().collect()
    } else {
        catalog.all().iter().collect()
    };

    tracing::info!(count = products.len(), ?format, "rendering catalog");

    let rendered = match format {
        Format::Yaml => serde_yaml::to_string(&products)?,
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&products)?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_json_lists_all_seed_products() {
        let json = render(CurrencyCode::UZS, Format::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let products = value.as_array().unwrap();
        assert_eq!(products.len(), 15);
        assert_eq!(products[0]["name"], "Mixer");
        assert_eq!(products[0]["price"]["amount"], "450000");
        assert_eq!(products[14]["category"], "Smart home devices");
    }

    #[test]
    fn test_yaml_uses_requested_currency() {
        let yaml = render(CurrencyCode::USD, Format::Yaml, true).unwrap();
        assert!(yaml.contains("name: Smart Thermostat"));
        assert!(yaml.contains("currency_code: USD"));
    }
}
