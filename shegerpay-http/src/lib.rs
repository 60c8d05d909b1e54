#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Async HTTP client for the ShegerPay payment verification API.
//!
//! Wraps the REST API in [`ShegerPayClient`]: bank and mobile-money
//! verification, crypto intents, PayPal, payment links, webhooks, wallets,
//! refunds, disputes, payouts and account management. Wire types come from
//! the `shegerpay` crate and are re-exported here.
//!
//! # Modules
//!
//! - [`client`] - [`ShegerPayClient`] and its request plumbing
//! - [`config`] - [`ClientConfig`] from code, environment or a TOML file
//! - [`constants`] - Default URL, timeout, user agent and env var names
//! - [`error`] - [`ClientError`]
//!
//! # Feature Flags
//!
//! - `telemetry` (default) - Emits a `tracing` span per API call

mod api;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;

pub use client::ShegerPayClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ClientError;
pub use shegerpay::{
    ApiKey, ApiKeyError, Mode, Provider, RequestError, VerificationResult, VerifyRequest, proto,
    webhook,
};

use rust_decimal::Decimal;

/// Verifies a payment with a one-off client built from `api_key`.
///
/// Convenient for scripts; long-running services should keep a
/// [`ShegerPayClient`] around to reuse its connection pool.
///
/// # Errors
///
/// Returns [`ClientError`] if the key is invalid or the call fails.
pub async fn verify(
    api_key: &str,
    transaction_id: &str,
    amount: Decimal,
) -> Result<VerificationResult, ClientError> {
    ShegerPayClient::from_api_key(api_key)?
        .verify(VerifyRequest::new(transaction_id, amount))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_verify_rejects_bad_key_before_sending() {
        let err = verify("not-a-key", "FT123", Decimal::ONE).await.unwrap_err();
        assert!(matches!(err, ClientError::ApiKey(ApiKeyError::InvalidFormat)));
    }
}
