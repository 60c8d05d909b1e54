//! Refunds of verified transactions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ExtraFields;

/// JSON body for `POST /api/v1/refunds`.
///
/// Leave `amount` unset to refund the full transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRefund {
    /// Transaction to refund.
    pub transaction_id: String,
    /// Partial refund amount.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    /// Free-form reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CreateRefund {
    /// Requests a full refund of `transaction_id`.
    #[must_use]
    pub fn new(transaction_id: impl Into<String>) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            amount: None,
            reason: None,
        }
    }

    /// Refunds only `amount`. Zero or negative amounts are ignored.
    #[must_use]
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = (amount > Decimal::ZERO).then_some(amount);
        self
    }

    /// Sets the reason.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// A refund request and its state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    /// Refund id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Refunded transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Refunded amount.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    /// `pending`, `approved`, `rejected`...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Reason given on request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_refund_omits_amount() {
        let json = serde_json::to_value(CreateRefund::new("tx_1")).unwrap();
        assert_eq!(json, serde_json::json!({"transaction_id": "tx_1"}));
    }

    #[test]
    fn test_non_positive_amount_means_full() {
        let req = CreateRefund::new("tx_1").with_amount(Decimal::ZERO);
        assert!(req.amount.is_none());

        let req = CreateRefund::new("tx_1")
            .with_amount(Decimal::new(2550, 2))
            .with_reason("damaged");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["amount"], 25.5);
        assert_eq!(json["reason"], "damaged");
    }
}
