//! Merchant account: plan, usage, two-factor auth, passkeys and
//! international wallet accounts.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ExtraFields;

/// The merchant's ShegerPay plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Plan name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Subscription status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// End of the current billing period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_period_end: Option<String>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Quota consumption for the current billing period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usage {
    /// Verifications used this period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verifications_used: Option<u64>,
    /// Verifications allowed this period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verifications_limit: Option<u64>,
    /// Start of the billing period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,
    /// End of the billing period.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Usage {
    /// Verifications left, when both counters are known.
    #[must_use]
    pub fn remaining(&self) -> Option<u64> {
        Some(self.verifications_limit?.saturating_sub(self.verifications_used?))
    }
}

/// Request counters from the analytics endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiUsage {
    /// Total API requests in the reporting window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_requests: Option<u64>,
    /// Any other fields (per-endpoint breakdowns, time series...).
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Secret material for enrolling an authenticator app.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TwoFactorSetup {
    /// Base32 TOTP secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// QR code encoding the provisioning URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    /// Single-use recovery codes.
    #[serde(default)]
    pub backup_codes: Vec<String>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Whether two-factor auth is on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TwoFactorStatus {
    /// Two-factor auth is enabled.
    #[serde(default)]
    pub enabled: bool,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// JSON body carrying a one-time code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoFactorCode {
    /// Six-digit TOTP or backup code.
    pub code: String,
}

/// A registered WebAuthn passkey.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Passkey {
    /// Passkey id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// User-chosen label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Registration timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last successful use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_used_at: Option<String>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// International wallet services a merchant can link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletAccountKind {
    /// Wise.
    Wise,
    /// Payoneer.
    Payoneer,
}

impl fmt::Display for WalletAccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wise => "wise",
            Self::Payoneer => "payoneer",
        })
    }
}

/// JSON body for `POST /api/v1/international/wallet-accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddWalletAccount {
    /// Wallet service.
    pub provider: WalletAccountKind,
    /// Account email at that service.
    pub email: String,
    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl AddWalletAccount {
    /// Links an account of `provider` identified by `email`.
    #[must_use]
    pub fn new(provider: WalletAccountKind, email: impl Into<String>) -> Self {
        Self {
            provider,
            email: email.into(),
            label: None,
        }
    }

    /// Sets the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// A linked international wallet account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletAccount {
    /// Account id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Wallet service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Account email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// State of the Gmail forwarding bot that reads international receipts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GmailStatus {
    /// Whether the mailbox is connected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connected: Option<bool>,
    /// Bot status string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_remaining() {
        let usage: Usage =
            serde_json::from_str(r#"{"verifications_used":40,"verifications_limit":100}"#)
                .unwrap();
        assert_eq!(usage.remaining(), Some(60));

        let usage: Usage =
            serde_json::from_str(r#"{"verifications_used":120,"verifications_limit":100}"#)
                .unwrap();
        assert_eq!(usage.remaining(), Some(0));

        assert_eq!(Usage::default().remaining(), None);
    }

    #[test]
    fn test_wallet_account_body() {
        let body =
            AddWalletAccount::new(WalletAccountKind::Payoneer, "me@shop.et").with_label("USD");
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"provider": "payoneer", "email": "me@shop.et", "label": "USD"})
        );
    }

    #[test]
    fn test_two_factor_status_default() {
        let status: TwoFactorStatus = serde_json::from_str(r#"{"method":"totp"}"#).unwrap();
        assert!(!status.enabled);
        assert_eq!(status.extra["method"], "totp");
    }
}
