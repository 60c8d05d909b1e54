//! Transaction verification and history.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_with::{VecSkipError, serde_as};

use super::ExtraFields;
use crate::error::RequestError;
use crate::provider::Provider;

/// Merchant name sent when the caller does not supply one.
pub const DEFAULT_MERCHANT_NAME: &str = "ShegerPay Verification";

/// Form body for `POST /api/v1/verify`.
///
/// Build with [`VerifyRequest::new`] and the `with_*` setters, then call
/// [`VerifyRequest::resolve`] (the HTTP client does this for you) to fill in
/// the provider and merchant name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    /// Payment rail. Detected from the transaction id when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    /// Bank or wallet transaction reference, e.g. `FT24352648751234`.
    pub transaction_id: String,
    /// Amount the merchant expects to have received, in ETB.
    pub amount: Decimal,
    /// The merchant's registered account name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    /// Sub-provider for bank transfers, e.g. `Payoneer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_provider: Option<String>,
}

impl VerifyRequest {
    /// Creates a request with no provider, merchant name or sub-provider.
    #[must_use]
    pub fn new(transaction_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            provider: None,
            transaction_id: transaction_id.into(),
            amount,
            merchant_name: None,
            sub_provider: None,
        }
    }

    /// Pins the payment rail instead of detecting it.
    #[must_use]
    pub const fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Sets the merchant account name to match against.
    #[must_use]
    pub fn with_merchant_name(mut self, name: impl Into<String>) -> Self {
        self.merchant_name = Some(name.into());
        self
    }

    /// Sets the bank-transfer sub-provider.
    #[must_use]
    pub fn with_sub_provider(mut self, sub_provider: impl Into<String>) -> Self {
        self.sub_provider = Some(sub_provider.into());
        self
    }

    /// Rejects requests the server would refuse anyway.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::MissingTransactionId`] for an empty reference
    /// and [`RequestError::NonPositiveAmount`] for a zero or negative amount.
    pub fn validate(&self) -> Result<(), RequestError> {
        validate_reference(&self.transaction_id, self.amount)
    }

    /// Fills in the detected provider and the default merchant name.
    ///
    /// An empty merchant name counts as missing.
    #[must_use]
    pub fn resolve(mut self) -> Self {
        if self.provider.is_none() {
            self.provider = Some(Provider::detect(&self.transaction_id));
        }
        if self.merchant_name.as_deref().is_none_or(str::is_empty) {
            self.merchant_name = Some(DEFAULT_MERCHANT_NAME.to_owned());
        }
        self.sub_provider = self.sub_provider.filter(|s| !s.is_empty());
        self
    }
}

/// Form body for `POST /api/v1/quick-verify`.
///
/// The server detects the provider itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickVerifyRequest {
    /// Bank or wallet transaction reference.
    pub transaction_id: String,
    /// Expected amount.
    pub amount: Decimal,
}

impl QuickVerifyRequest {
    /// Creates a quick-verify request.
    #[must_use]
    pub fn new(transaction_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            amount,
        }
    }

    /// Same checks as [`VerifyRequest::validate`].
    ///
    /// # Errors
    ///
    /// See [`VerifyRequest::validate`].
    pub fn validate(&self) -> Result<(), RequestError> {
        validate_reference(&self.transaction_id, self.amount)
    }
}

fn validate_reference(transaction_id: &str, amount: Decimal) -> Result<(), RequestError> {
    if transaction_id.trim().is_empty() {
        return Err(RequestError::MissingTransactionId);
    }
    if amount <= Decimal::ZERO {
        return Err(RequestError::NonPositiveAmount);
    }
    Ok(())
}

fn unknown_status() -> String {
    "unknown".to_owned()
}

/// Outcome of a verification call.
///
/// `valid` is `false` and `status` is `"unknown"` when the server omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Whether the payment matched the expected amount and merchant.
    #[serde(default)]
    pub valid: bool,
    /// Server status string, e.g. `verified`, `failed`, `pending`.
    #[serde(default = "unknown_status")]
    pub status: String,
    /// Provider the server verified against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Echo of the verified transaction reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Amount found on the receipt.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    /// Why verification failed, when it did.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// `test` or `live`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Name of the paying account, if the receipt shows it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<String>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// A past verification, as listed by the history endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// ShegerPay record id. Numeric ids are kept as their decimal text.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Provider the transaction went through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// The bank or wallet reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    /// Verified amount.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    /// Record status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation timestamp as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// `test` or `live`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Id>::deserialize(deserializer)?.map(|id| match id {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    }))
}

/// Query string for `GET /api/v1/transactions/history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionFilter {
    /// Only return transactions in this status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Only return transactions through this provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    /// Page size.
    pub limit: u32,
}

impl TransactionFilter {
    /// Default page size.
    pub const DEFAULT_LIMIT: u32 = 50;

    /// Creates an unfiltered query with the default page size.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            provider: None,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    /// Restricts results to `status`.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Restricts results to `provider`.
    #[must_use]
    pub const fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for TransactionFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// A filtered page of transactions.
///
/// Records that fail to decode are skipped rather than failing the page.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionPage {
    /// The transactions on this page.
    #[serde_as(as = "VecSkipError<_>")]
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Total number of matching transactions, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_detects_provider_and_merchant() {
        let req = VerifyRequest::new("FT24352648751234", Decimal::from(100)).resolve();
        assert_eq!(req.provider, Some(Provider::Cbe));
        assert_eq!(req.merchant_name.as_deref(), Some(DEFAULT_MERCHANT_NAME));

        let req = VerifyRequest::new("ABC123XYZ", Decimal::from(500)).resolve();
        assert_eq!(req.provider, Some(Provider::Telebirr));
    }

    #[test]
    fn test_resolve_keeps_explicit_values() {
        let req = VerifyRequest::new("FT1", Decimal::from(1))
            .with_provider(Provider::BankTransfer)
            .with_merchant_name("My Shop")
            .with_sub_provider("Payoneer")
            .resolve();
        assert_eq!(req.provider, Some(Provider::BankTransfer));
        assert_eq!(req.merchant_name.as_deref(), Some("My Shop"));
        assert_eq!(req.sub_provider.as_deref(), Some("Payoneer"));
    }

    #[test]
    fn test_resolve_treats_empty_strings_as_missing() {
        let req = VerifyRequest::new("FT1", Decimal::from(1))
            .with_merchant_name("")
            .with_sub_provider("")
            .resolve();
        assert_eq!(req.merchant_name.as_deref(), Some(DEFAULT_MERCHANT_NAME));
        assert!(req.sub_provider.is_none());
    }

    #[test]
    fn test_validate() {
        assert!(VerifyRequest::new("FT1", Decimal::new(1, 2)).validate().is_ok());
        assert_eq!(
            VerifyRequest::new("  ", Decimal::from(1)).validate(),
            Err(RequestError::MissingTransactionId)
        );
        assert_eq!(
            VerifyRequest::new("FT1", Decimal::ZERO).validate(),
            Err(RequestError::NonPositiveAmount)
        );
        assert_eq!(
            QuickVerifyRequest::new("FT1", Decimal::from(-5)).validate(),
            Err(RequestError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_result_defaults() {
        let result: VerificationResult = serde_json::from_str("{}").unwrap();
        assert!(!result.valid);
        assert_eq!(result.status, "unknown");
        assert!(result.amount.is_none());
    }

    #[test]
    fn test_result_full() {
        let result: VerificationResult = serde_json::from_str(
            r#"{"valid":true,"status":"verified","provider":"cbe","transaction_id":"FT1",
                "amount":100.5,"mode":"test","payer":"Abebe","receipt_url":"https://r"}"#,
        )
        .unwrap();
        assert!(result.valid);
        assert_eq!(result.amount, Some(Decimal::new(1005, 1)));
        assert_eq!(result.payer.as_deref(), Some("Abebe"));
        assert_eq!(result.extra["receipt_url"], "https://r");
    }

    #[test]
    fn test_page_skips_malformed_records() {
        let page: TransactionPage = serde_json::from_str(
            r#"{"transactions":[{"id":"tx_1","amount":10},{"amount":"oops"}],"total":2}"#,
        )
        .unwrap();
        assert_eq!(page.transactions.len(), 1);
        assert_eq!(page.transactions[0].id.as_deref(), Some("tx_1"));
        assert_eq!(page.total, Some(2));
    }

    #[test]
    fn test_transaction_id_optional_or_numeric() {
        let records: Vec<Transaction> =
            serde_json::from_str(r#"[{"provider":"cbe"},{"id":17},{"id":null}]"#).unwrap();
        assert_eq!(records[0].id, None);
        assert_eq!(records[1].id.as_deref(), Some("17"));
        assert_eq!(records[2].id, None);
    }

    #[test]
    fn test_transaction_filter_query_shape() {
        let filter = TransactionFilter::new()
            .with_provider(Provider::Telebirr)
            .with_limit(10);
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"provider": "telebirr", "limit": 10})
        );
    }
}
