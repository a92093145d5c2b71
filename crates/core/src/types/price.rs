//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are whole currency units (the catalog is priced in so'm), but the
//! amount is a [`Decimal`] so that membership discounts stay exact instead of
//! drifting the way binary floating point would.

use core::fmt;
use core::ops::Add;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Most fraction digits shown when a price is displayed.
pub const DISPLAY_FRACTION_DIGITS: u32 = 3;

/// Errors that can occur when parsing a [`Price`] from user input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input contains something other than ASCII digits.
    #[error("price must contain only digits")]
    NotDigits,
    /// The input does not fit in a price.
    #[error("price is too large")]
    TooLarge,
}

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from a whole number of currency units.
    #[must_use]
    pub fn from_units(units: i64, currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::from(units), currency_code)
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Parse a whole-unit price typed by a user.
    ///
    /// Only ASCII digits are accepted, so negative and fractional amounts are
    /// rejected up front.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains non-digits, or
    /// overflows.
    pub fn parse_units(s: &str, currency_code: CurrencyCode) -> Result<Self, PriceError> {
        if s.is_empty() {
            return Err(PriceError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PriceError::NotDigits);
        }
        let units = s.parse::<i64>().map_err(|_| PriceError::TooLarge)?;
        Ok(Self::from_units(units, currency_code))
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// The price reduced by `percent` percent.
    #[must_use]
    pub fn percent_off(self, percent: u8) -> Self {
        let hundred = Decimal::ONE_HUNDRED;
        let keep = hundred - Decimal::from(percent);
        Self::new(self.amount * keep / hundred, self.currency_code)
    }

    /// Amount grouped by thousands (e.g. `500,000`), with up to
    /// [`DISPLAY_FRACTION_DIGITS`] fraction digits and no trailing zeros.
    #[must_use]
    pub fn grouped_amount(&self) -> String {
        let rounded = self
            .amount
            .round_dp_with_strategy(DISPLAY_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        let magnitude = rounded.abs();
        let whole = magnitude.trunc().to_u128().unwrap_or_default();

        let mut out = String::new();
        if rounded.is_sign_negative() && !rounded.is_zero() {
            out.push('-');
        }
        out.push_str(&group_thousands(whole));

        let fraction = magnitude.fract().normalize();
        if !fraction.is_zero()
            && let Some(digits) = fraction.to_string().strip_prefix("0.")
        {
            out.push('.');
            out.push_str(digits);
        }
        out
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.grouped_amount(), self.currency_code.code())
    }
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// Uzbekistani so'm, the catalog's native currency.
    #[default]
    UZS,
    USD,
    EUR,
}

impl CurrencyCode {
    /// The three-letter code shown after amounts.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UZS => "UZS",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "UZS" => Ok(Self::UZS),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            _ => Err(format!("unsupported currency: {s}")),
        }
    }
}
