//! Webhook signature verification.
//!
//! ShegerPay signs every webhook delivery with the endpoint's shared secret.
//! The signature is `sha256=` followed by the lowercase hex HMAC-SHA256 of the
//! raw request body, sent in the [`SIGNATURE_HEADER`] header.
//!
//! Always verify against the exact bytes received. Re-serializing a parsed
//! body changes whitespace and key order, and the signature will not match.
//!
//! ```
//! use shegerpay::webhook;
//!
//! let body = br#"{"event":"payment.verified"}"#;
//! let signature = webhook::sign(body, "whsec_123");
//! assert!(webhook::verify_signature(body, &signature, "whsec_123"));
//! ```

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::WebhookError;
use crate::proto::ExtraFields;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the delivery signature.
pub const SIGNATURE_HEADER: &str = "X-ShegerPay-Signature";

/// Prefix of every signature value.
pub const SIGNATURE_PREFIX: &str = "sha256=";

/// Computes the `sha256=<hex>` signature of `payload` under `secret`.
#[must_use]
pub fn sign(payload: impl AsRef<[u8]>, secret: impl AsRef<[u8]>) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_ref())
        .expect("HMAC-SHA256 accepts keys of any length");
    mac.update(payload.as_ref());
    let digest = mac.finalize().into_bytes();
    format!("{SIGNATURE_PREFIX}{}", hex::encode(digest))
}

/// Checks `signature` against the expected signature of `payload`.
///
/// The comparison runs in constant time over the full signature string, so
/// a partial match leaks nothing. A signature of the wrong length fails.
#[must_use]
pub fn verify_signature(
    payload: impl AsRef<[u8]>,
    signature: &str,
    secret: impl AsRef<[u8]>,
) -> bool {
    let expected = sign(payload, secret);
    let valid: bool = expected.as_bytes().ct_eq(signature.as_bytes()).into();

    #[cfg(feature = "telemetry")]
    if !valid {
        tracing::debug!("shegerpay.webhook.signature_mismatch");
    }

    valid
}

/// A webhook delivery body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookEvent {
    /// Delivery identifier, if the server sends one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Event name, e.g. `payment.verified` or `refund.approved`.
    pub event: String,
    /// When the event happened, as sent by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Event-specific payload.
    #[serde(default)]
    pub data: serde_json::Value,
    /// Any other top-level fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Verifies a delivery and decodes it into a [`WebhookEvent`].
///
/// # Errors
///
/// Returns [`WebhookError::InvalidSignature`] if the signature does not
/// match, and [`WebhookError::Json`] if the authenticated body is not an
/// event object.
pub fn parse_event(
    payload: impl AsRef<[u8]>,
    signature: &str,
    secret: impl AsRef<[u8]>,
) -> Result<WebhookEvent, WebhookError> {
    let payload = payload.as_ref();
    if !verify_signature(payload, signature, secret) {
        return Err(WebhookError::InvalidSignature);
    }
    Ok(serde_json::from_slice(payload)?)
}
