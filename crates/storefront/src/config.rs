//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `TECH_HOUSE_DELIVERY_FEE` - Flat delivery fee in whole currency units (default: 50000)
//! - `TECH_HOUSE_CURRENCY` - Currency the catalog is priced in: `UZS`, `USD`, `EUR` (default: UZS)
//! - `TECH_HOUSE_ADMIN_PASSWORD` - Password of the seeded `admin` account (default: admin123)
//! - `TECH_HOUSE_PAUSES` - `on` to pause between screens, `off` to skip pauses (default: on)
//! - `TECH_HOUSE_LOG_FORMAT` - `pretty` or `json` log lines on stderr (default: pretty)
//! - `RUST_LOG` - Log filter (default: `tech_house_storefront=warn`)

use std::str::FromStr;

use secrecy::SecretString;
use thiserror::Error;

use tech_house_core::{CurrencyCode, Price};

const DEFAULT_DELIVERY_FEE: &str = "50000";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Format of log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("expected `pretty` or `json`, got `{s}`")),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Currency every price is expressed in
    pub currency: CurrencyCode,
    /// Flat delivery fee added to orders without free delivery
    pub delivery_fee: Price,
    /// Password of the seeded admin account
    pub admin_password: SecretString,
    /// Whether the driver sleeps through screen pauses
    pub pauses: bool,
    /// Log line format
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        let currency = CurrencyCode::default();
        Self {
            currency,
            delivery_fee: Price::from_units(50_000, currency),
            admin_password: SecretString::from(DEFAULT_ADMIN_PASSWORD),
            pauses: true,
            log_format: LogFormat::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

        let currency: CurrencyCode =
            parse_var("TECH_HOUSE_CURRENCY", &get_or("TECH_HOUSE_CURRENCY", "UZS"))?;
        let fee = get_or("TECH_HOUSE_DELIVERY_FEE", DEFAULT_DELIVERY_FEE);
        let delivery_fee = Price::parse_units(fee.trim(), currency).map_err(|e| {
            ConfigError::InvalidEnvVar("TECH_HOUSE_DELIVERY_FEE".to_owned(), e.to_string())
        })?;
        let admin_password = SecretString::from(get_or(
            "TECH_HOUSE_ADMIN_PASSWORD",
            DEFAULT_ADMIN_PASSWORD,
        ));
        let pauses = parse_switch("TECH_HOUSE_PAUSES", &get_or("TECH_HOUSE_PAUSES", "on"))?;
        let log_format = parse_var(
            "TECH_HOUSE_LOG_FORMAT",
            &get_or("TECH_HOUSE_LOG_FORMAT", "pretty"),
        )?;

        Ok(Self {
            currency,
            delivery_fee,
            admin_password,
            pauses,
            log_format,
        })
    }

    /// The same configuration with pauses disabled (scripted sessions).
    #[must_use]
    pub fn without_pauses(mut self) -> Self {
        self.pauses = false;
        self
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable value with its `FromStr` implementation.
fn parse_var<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = String>,
{
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e))
}

/// Parse an on/off switch.
fn parse_switch(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "off" | "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_owned(),
            format!("expected on/off, got `{other}`"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        StorefrontConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.currency, CurrencyCode::UZS);
        assert_eq!(
            config.delivery_fee,
            Price::from_units(50_000, CurrencyCode::UZS)
        );
        assert_eq!(config.admin_password.expose_secret(), "admin123");
        assert!(config.pauses);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn test_default_impl_matches_empty_environment() {
        let from_env = load(&[]).unwrap();
        let default = StorefrontConfig::default();
        assert_eq!(from_env.delivery_fee, default.delivery_fee);
        assert_eq!(from_env.pauses, default.pauses);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("TECH_HOUSE_DELIVERY_FEE", "0"),
            ("TECH_HOUSE_CURRENCY", "usd"),
            ("TECH_HOUSE_PAUSES", "off"),
            ("TECH_HOUSE_LOG_FORMAT", "JSON"),
            ("TECH_HOUSE_ADMIN_PASSWORD", "s3cret"),
        ])
        .unwrap();
        assert_eq!(config.currency, CurrencyCode::USD);
        assert!(config.delivery_fee.is_zero());
        assert_eq!(config.delivery_fee.currency_code, CurrencyCode::USD);
        assert!(!config.pauses);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.admin_password.expose_secret(), "s3cret");
    }

    #[test]
    fn test_invalid_delivery_fee() {
        let err = load(&[("TECH_HOUSE_DELIVERY_FEE", "-10")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar(key, _) if key == "TECH_HOUSE_DELIVERY_FEE"
        ));
    }

    #[test]
    fn test_invalid_switch() {
        assert!(load(&[("TECH_HOUSE_PAUSES", "sometimes")]).is_err());
    }

    #[test]
    fn test_invalid_currency() {
        assert!(load(&[("TECH_HOUSE_CURRENCY", "BTC")]).is_err());
    }

    #[test]
    fn test_without_pauses() {
        assert!(!StorefrontConfig::default().without_pauses().pauses);
    }
}
