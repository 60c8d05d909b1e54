//! Wire format types for the ShegerPay API.
//!
//! Each submodule mirrors one area of the remote API. Request types are built
//! by callers and serialized by the HTTP client; response types are decoded
//! from the server's JSON.
//!
//! # Conventions
//!
//! - Field names are `snake_case` on the wire, matching the Rust names.
//! - Response fields the server may omit are `Option`s, and every response
//!   type keeps unrecognized fields in an `extra` map instead of dropping them.
//! - Amounts are [`rust_decimal::Decimal`]. JSON bodies carry them as numbers,
//!   form bodies as plain decimal strings.

use std::collections::HashMap;

pub mod account;
pub mod crypto;
pub mod dispute;
pub mod payment_link;
pub mod payout;
pub mod paypal;
pub mod refund;
pub mod verification;
pub mod wallet;
pub mod webhook;

pub use account::*;
pub use crypto::*;
pub use dispute::*;
pub use payment_link::*;
pub use payout::*;
pub use paypal::*;
pub use refund::*;
pub use verification::*;
pub use wallet::*;
pub use webhook::*;

/// Response fields not modelled by a typed struct.
///
/// Keys are field names; values are the raw JSON as sent by the server.
pub type ExtraFields = HashMap<String, serde_json::Value>;

/// Generic acknowledgement returned by delete/test style endpoints.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ActionResult {
    /// Whether the server reports the action as successful.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Human-readable outcome.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Query string for list endpoints filtered by status.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StatusFilter {
    /// Only return records in this status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Page size.
    pub limit: u32,
}

impl StatusFilter {
    /// Page size used by the refund and dispute listings when none is given.
    pub const DEFAULT_LIMIT: u32 = 20;

    /// Creates a filter with no status and the default page size.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            limit: Self::DEFAULT_LIMIT,
        }
    }

    /// Restricts results to `status`.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::new()
    }
}
