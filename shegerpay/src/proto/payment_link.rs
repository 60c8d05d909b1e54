//! Shareable payment links.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ExtraFields;

/// JSON body for `POST /api/v1/payment-links/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePaymentLink {
    /// Title shown on the payment page.
    pub title: String,
    /// Amount to collect.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Currency code (`ETB`, `USD`, ...).
    pub currency: String,
    /// Optional longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Accept CBE transfers.
    pub enable_cbe: bool,
    /// Accept Telebirr payments.
    pub enable_telebirr: bool,
    /// Accept crypto payments.
    pub enable_crypto: bool,
    /// Link lifetime in hours.
    pub expires_in_hours: u32,
}

impl CreatePaymentLink {
    /// Currency used when none is set.
    pub const DEFAULT_CURRENCY: &'static str = "ETB";
    /// Link lifetime used when none is set.
    pub const DEFAULT_EXPIRY_HOURS: u32 = 24;

    /// Creates an ETB link accepting CBE and Telebirr, valid for 24 hours.
    #[must_use]
    pub fn new(title: impl Into<String>, amount: Decimal) -> Self {
        Self {
            title: title.into(),
            amount,
            currency: Self::DEFAULT_CURRENCY.to_owned(),
            description: None,
            enable_cbe: true,
            enable_telebirr: true,
            enable_crypto: false,
            expires_in_hours: Self::DEFAULT_EXPIRY_HOURS,
        }
    }

    /// Sets the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Chooses which payment rails the link accepts.
    #[must_use]
    pub const fn with_methods(mut self, cbe: bool, telebirr: bool, crypto: bool) -> Self {
        self.enable_cbe = cbe;
        self.enable_telebirr = telebirr;
        self.enable_crypto = crypto;
        self
    }

    /// Sets the link lifetime.
    #[must_use]
    pub const fn with_expiry_hours(mut self, hours: u32) -> Self {
        self.expires_in_hours = hours;
        self
    }
}

/// A created or listed payment link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentLink {
    /// Link id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Title shown on the payment page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Amount to collect.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    /// Currency code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Public URL to share with the payer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Short code embedded in the URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_code: Option<String>,
    /// QR code image (data URL or link).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    /// Link status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Expiry timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// `GET /api/v1/payment-links/` answers either `{"links": [...]}` or a bare
/// array depending on server version.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PaymentLinkList {
    /// A bare array of links.
    Bare(Vec<PaymentLink>),
    /// An object wrapping the links; a missing `links` key means none.
    Wrapped {
        /// The links.
        #[serde(default)]
        links: Vec<PaymentLink>,
    },
}

impl PaymentLinkList {
    /// Returns the links regardless of envelope.
    #[must_use]
    pub fn into_links(self) -> Vec<PaymentLink> {
        match self {
            Self::Bare(links) | Self::Wrapped { links } => links,
        }
    }
}
