//! PayPal orders, vaulted cards, subscriptions and refunds.
//!
//! ShegerPay proxies these calls to PayPal. Responses are passed through
//! mostly untouched, so they decode into [`PaypalObject`], which keeps
//! everything beyond `id` and `status` in its `extra` map.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ExtraFields;

/// Currency used by PayPal calls when none is set.
pub const DEFAULT_PAYPAL_CURRENCY: &str = "USD";

/// Cancellation reason sent when none is given.
pub const DEFAULT_CANCEL_REASON: &str = "Customer requested";

/// JSON body for `POST /api/v1/paypal/create-order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrder {
    /// Order total.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Currency code.
    pub currency: String,
    /// Order description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Save the card for later charges once the payer approves.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub vault_on_approval: bool,
}

impl CreateOrder {
    /// Creates a USD order.
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            currency: DEFAULT_PAYPAL_CURRENCY.to_owned(),
            description: None,
            vault_on_approval: false,
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

    /// Vaults the card on approval.
    #[must_use]
    pub const fn vault_on_approval(mut self) -> Self {
        self.vault_on_approval = true;
        self
    }
}

/// JSON body for `POST /api/v1/paypal/capture-order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureOrder {
    /// Approved order id.
    pub order_id: String,
}

/// JSON body for `POST /api/v1/paypal/vault/charge`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeSavedCard {
    /// Vaulted payment token id.
    pub payment_token_id: String,
    /// Amount to charge.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Currency code.
    pub currency: String,
    /// Charge description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ChargeSavedCard {
    /// Creates a USD charge against a vaulted card.
    #[must_use]
    pub fn new(payment_token_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            payment_token_id: payment_token_id.into(),
            amount,
            currency: DEFAULT_PAYPAL_CURRENCY.to_owned(),
            description: None,
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
}

/// JSON body for `POST /api/v1/paypal/subscriptions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSubscription {
    /// PayPal billing plan id.
    pub plan_id: String,
    /// Subscriber email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_email: Option<String>,
    /// Subscriber name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_name: Option<String>,
    /// Merchant-side subscription id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_id: Option<String>,
}

impl CreateSubscription {
    /// Creates a subscription request for `plan_id`.
    #[must_use]
    pub fn new(plan_id: impl Into<String>) -> Self {
        Self {
            plan_id: plan_id.into(),
            subscriber_email: None,
            subscriber_name: None,
            custom_id: None,
        }
    }

    /// Sets the subscriber's email and name.
    #[must_use]
    pub fn with_subscriber(mut self, email: impl Into<String>, name: Option<String>) -> Self {
        self.subscriber_email = Some(email.into());
        self.subscriber_name = name;
        self
    }

    /// Sets the merchant-side id.
    #[must_use]
    pub fn with_custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }
}

/// JSON body for `POST /api/v1/paypal/subscriptions/{id}/cancel`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelSubscription {
    /// Cancellation reason shown to the subscriber.
    pub reason: String,
}

impl Default for CancelSubscription {
    fn default() -> Self {
        Self {
            reason: DEFAULT_CANCEL_REASON.to_owned(),
        }
    }
}

/// JSON body for `POST /api/v1/paypal/refund`.
///
/// Leave `amount` unset for a full refund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaypalRefund {
    /// Capture id from the order capture.
    pub capture_id: String,
    /// Partial refund amount.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount: Option<Decimal>,
    /// Currency code.
    pub currency: String,
    /// Note to the payer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PaypalRefund {
    /// Creates a full USD refund of `capture_id`.
    #[must_use]
    pub fn full(capture_id: impl Into<String>) -> Self {
        Self {
            capture_id: capture_id.into(),
            amount: None,
            currency: DEFAULT_PAYPAL_CURRENCY.to_owned(),
            note: None,
        }
    }

    /// Creates a partial USD refund.
    #[must_use]
    pub fn partial(capture_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            amount: Some(amount),
            ..Self::full(capture_id)
        }
    }

    /// Sets the currency.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Sets the note to the payer.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// A PayPal resource (order, capture, token, subscription, refund, status).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaypalObject {
    /// Resource id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Resource status, e.g. `CREATED`, `APPROVED`, `COMPLETED`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Everything else PayPal returned.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl PaypalObject {
    /// True for a `COMPLETED` capture or refund.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status.as_deref() == Some("COMPLETED")
    }

    /// Returns the payer approval URL from a HATEOAS `links` array.
    #[must_use]
    pub fn approval_url(&self) -> Option<&str> {
        self.extra
            .get("links")?
            .as_array()?
            .iter()
            .find(|link| {
                matches!(
                    link.get("rel").and_then(serde_json::Value::as_str),
                    Some("approve" | "payer-action")
                )
            })?
            .get("href")?
            .as_str()
    }
}
