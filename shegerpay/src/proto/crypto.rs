//! Crypto payment intents and rates.
//!
//! An intent asks the payer to send a unique amount (the requested USD value
//! plus a few satoshi-level digits) to the merchant's wallet. The reference id
//! returned with the intent is later used to confirm the on-chain transfer.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ExtraFields;

/// Blockchain a crypto payment settles on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CryptoChain {
    /// TRON (TRC-20 tokens).
    #[default]
    Tron,
    /// Ethereum mainnet.
    Eth,
    /// BNB Smart Chain.
    Bsc,
    /// Bitcoin.
    Btc,
    /// Litecoin.
    Ltc,
}

impl CryptoChain {
    /// Returns the wire name, e.g. `"TRON"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tron => "TRON",
            Self::Eth => "ETH",
            Self::Bsc => "BSC",
            Self::Btc => "BTC",
            Self::Ltc => "LTC",
        }
    }
}

impl fmt::Display for CryptoChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON body for `POST /api/v1/crypto/generate-intent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCryptoPayment {
    /// Value to collect, in USD.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_usd: Decimal,
    /// Token symbol, upper-cased (`USDT`, `BTC`, ...).
    pub currency: String,
    /// Merchant's receiving address.
    pub wallet_address: String,
    /// Settlement chain.
    pub chain: CryptoChain,
}

impl CreateCryptoPayment {
    /// Creates an intent on the default chain (TRON).
    #[must_use]
    pub fn new(amount_usd: Decimal, currency: &str, wallet_address: impl Into<String>) -> Self {
        Self {
            amount_usd,
            currency: currency.to_uppercase(),
            wallet_address: wallet_address.into(),
            chain: CryptoChain::default(),
        }
    }

    /// Sets the settlement chain.
    #[must_use]
    pub const fn with_chain(mut self, chain: CryptoChain) -> Self {
        self.chain = chain;
        self
    }
}

/// A created crypto payment intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CryptoPaymentIntent {
    /// Reference used to confirm the payment, e.g. `SHGR-TRO-ABC123-XYZ789`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    /// Exact, unique amount the payer must send.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_amount: Option<Decimal>,
    /// Token symbol.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Settlement chain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    /// Receiving address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    /// QR code for the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    /// When the intent stops being honoured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// JSON body for `POST /api/v1/crypto/verify-reference`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyCryptoPayment {
    /// Reference id from the intent.
    pub reference_id: String,
    /// On-chain transaction hash, when the payer supplied one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
}

/// Result of confirming a crypto payment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CryptoVerification {
    /// Whether the transfer was found and matched.
    #[serde(default)]
    pub verified: bool,
    /// `pending` while the chain has not confirmed the transfer yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Matched transaction hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
    /// Confirmations observed so far.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmations: Option<u64>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl CryptoVerification {
    /// True while the server is still waiting for the chain.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.verified && self.status.as_deref() == Some("pending")
    }
}

/// Live rates, keyed however the server chooses (symbol, pair...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CryptoRates {
    /// The raw rate entries.
    #[serde(flatten)]
    pub entries: ExtraFields,
}

impl CryptoRates {
    /// Returns the entry for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.entries.get(key)
    }
}

/// Crypto service health and capabilities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CryptoServiceStatus {
    /// Service status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Chains the service can watch.
    #[serde(default)]
    pub supported_chains: Vec<String>,
    /// Tokens the service accepts.
    #[serde(default)]
    pub supported_tokens: Vec<String>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_request_shape() {
        let req = CreateCryptoPayment::new(
            Decimal::from(50),
            "usdt",
            "TJCnKsPa7y5okkXvQAidZBzqx3QyQ6sxMW",
        );
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["currency"], "USDT");
        assert_eq!(json["chain"], "TRON");
        assert_eq!(json["amount_usd"], 50.0);

        let json = serde_json::to_value(req.with_chain(CryptoChain::Bsc)).unwrap();
        assert_eq!(json["chain"], "BSC");
    }

    #[test]
    fn test_intent_decodes_unique_amount() {
        let intent: CryptoPaymentIntent = serde_json::from_str(
            r#"{"reference_id":"SHGR-TRO-ABC123-XYZ789","payment_amount":50.25}"#,
        )
        .unwrap();
        assert_eq!(intent.reference_id.as_deref(), Some("SHGR-TRO-ABC123-XYZ789"));
        assert_eq!(intent.payment_amount, Some(Decimal::new(5025, 2)));
    }

    #[test]
    fn test_verification_pending() {
        let v: CryptoVerification = serde_json::from_str(r#"{"status":"pending"}"#).unwrap();
        assert!(!v.verified);
        assert!(v.is_pending());

        let v: CryptoVerification =
            serde_json::from_str(r#"{"verified":true,"status":"confirmed"}"#).unwrap();
        assert!(!v.is_pending());
    }

    #[test]
    fn test_verify_request_omits_missing_hash() {
        let body = VerifyCryptoPayment {
            reference_id: "SHGR-1".to_owned(),
            transaction_hash: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"reference_id": "SHGR-1"})
        );
    }
}
