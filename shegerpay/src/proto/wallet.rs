//! Multi-currency wallets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{VecSkipError, serde_as};

use super::ExtraFields;

/// Balance of one currency.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrencyBalance {
    /// Currency code.
    pub currency: String,
    /// Total balance.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub balance: Option<Decimal>,
    /// Portion available for payouts.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub available: Option<Decimal>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Response of `GET /api/v1/wallets/balances`.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletBalances {
    /// Per-currency balances.
    #[serde_as(as = "VecSkipError<_>")]
    #[serde(default)]
    pub balances: Vec<CurrencyBalance>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl WalletBalances {
    /// Returns the balance entry for `currency` (case-insensitive).
    #[must_use]
    pub fn currency(&self, currency: &str) -> Option<&CurrencyBalance> {
        self.balances
            .iter()
            .find(|b| b.currency.eq_ignore_ascii_case(currency))
    }
}

/// JSON body for `POST /api/v1/wallets/convert`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertCurrency {
    /// Source currency.
    pub from_currency: String,
    /// Target currency.
    pub to_currency: String,
    /// Amount of the source currency to convert.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

/// Result of a wallet conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    /// Source currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_currency: Option<String>,
    /// Target currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_currency: Option<String>,
    /// Amount debited.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    /// Amount credited.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub converted_amount: Option<Decimal>,
    /// Applied exchange rate.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rate: Option<Decimal>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}
