//! Payer disputes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ExtraFields;

/// A dispute raised against a transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dispute {
    /// Dispute id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Disputed transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// `open`, `under_review`, `resolved`...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Payer's stated reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Disputed amount.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// JSON body for `POST /api/v1/disputes/{id}/respond`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisputeResponse {
    /// Merchant's answer.
    pub message: String,
    /// Links to supporting documents.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence_urls: Vec<String>,
}

impl DisputeResponse {
    /// Creates a response without evidence.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            evidence_urls: Vec::new(),
        }
    }

    /// Attaches evidence links.
    #[must_use]
    pub fn with_evidence<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.evidence_urls.extend(urls.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_shape() {
        let json = serde_json::to_value(DisputeResponse::new("Delivered on time")).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Delivered on time"}));

        let json = serde_json::to_value(
            DisputeResponse::new("See receipt").with_evidence(["https://files/receipt.pdf"]),
        )
        .unwrap();
        assert_eq!(
            json["evidence_urls"],
            serde_json::json!(["https://files/receipt.pdf"])
        );
    }
}
