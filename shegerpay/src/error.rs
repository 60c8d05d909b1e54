//! Error types for the ShegerPay core crate.
//!
//! These cover failures that can be detected without talking to the API:
//! malformed keys, unknown provider names, requests that would be rejected
//! anyway, and webhook payloads that fail authentication.

/// A secret API key was rejected before any request was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiKeyError {
    /// The key was empty.
    #[error("API key is required")]
    Missing,

    /// The key does not carry a `sk_test_` or `sk_live_` prefix.
    #[error("Invalid API key format. Must start with sk_test_ or sk_live_")]
    InvalidFormat,
}

/// A string did not name a known payment provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payment provider: {0}")]
pub struct ParseProviderError(pub String);

/// A request failed client-side validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// The transaction reference was empty.
    #[error("transaction_id is required")]
    MissingTransactionId,

    /// The expected amount was zero or negative.
    #[error("amount must be greater than zero")]
    NonPositiveAmount,

    /// A path parameter (link, webhook, refund id...) was empty.
    #[error("{0} is required")]
    MissingIdentifier(&'static str),
}

/// A webhook delivery could not be authenticated or decoded.
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    /// The supplied signature does not match the payload.
    #[error("webhook signature mismatch")]
    InvalidSignature,

    /// The payload is not a valid webhook event.
    #[error("invalid webhook payload: {0}")]
    Json(#[from] serde_json::Error),
}
