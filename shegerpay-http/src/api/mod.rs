//! API operations, one module per area.
//!
//! Each module adds an `impl ShegerPayClient` block. Paths are relative to
//! `/api/v1` and built from segments, so caller-supplied ids are
//! percent-encoded.

mod account;
mod crypto;
mod disputes;
mod international;
mod payment_links;
mod payouts;
mod paypal;
mod refunds;
mod security;
mod verification;
mod wallets;
mod webhooks;

use shegerpay::RequestError;

use crate::error::ClientError;

/// Rejects a blank caller-supplied identifier before it reaches a URL.
fn require(value: &str, name: &'static str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(RequestError::MissingIdentifier(name).into());
    }
    Ok(())
}
