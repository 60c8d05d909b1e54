//! Merchant payouts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ExtraFields;

/// Payout method used when none is set.
pub const DEFAULT_PAYOUT_METHOD: &str = "bank_transfer";

/// JSON body for `POST /api/v1/payouts`.
///
/// Destination details (account number, bank code, wallet address...) depend
/// on the method and are sent as extra top-level fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPayout {
    /// Amount to pay out.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Currency code.
    pub currency: String,
    /// Payout method, `bank_transfer` by default.
    pub method: String,
    /// Method-specific destination fields.
    #[serde(flatten)]
    pub details: ExtraFields,
}

impl RequestPayout {
    /// Creates a bank-transfer payout request.
    #[must_use]
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            method: DEFAULT_PAYOUT_METHOD.to_owned(),
            details: ExtraFields::new(),
        }
    }

    /// Sets the payout method.
    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Adds a destination field.
    ///
    /// Keys clashing with `amount`, `currency` or `method` are ignored.
    #[must_use]
    pub fn with_detail(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        let key = key.into();
        if !matches!(key.as_str(), "amount" | "currency" | "method") {
            self.details.insert(key, value.into());
        }
        self
    }
}

/// A payout request and its state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    /// Payout id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Amount.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    /// Currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Payout method.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    /// `pending`, `processing`, `paid`...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Query string for `GET /api/v1/payouts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PayoutFilter {
    /// Only return payouts in this status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
