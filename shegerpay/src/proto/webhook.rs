//! Webhook endpoint management.
//!
//! Signature checking for incoming deliveries lives in [`crate::webhook`].

use serde::{Deserialize, Serialize};

use super::ExtraFields;

/// Event filter matching every event type.
pub const ALL_EVENTS: &str = "*";

/// JSON body for `POST /api/v1/webhooks/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWebhook {
    /// HTTPS endpoint to deliver to.
    pub url: String,
    /// Event names to subscribe to; `["*"]` for all.
    pub events: Vec<String>,
}

impl CreateWebhook {
    /// Subscribes `url` to every event.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            events: vec![ALL_EVENTS.to_owned()],
        }
    }

    /// Restricts the subscription to `events`. An empty list means all events.
    #[must_use]
    pub fn with_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let events: Vec<String> = events.into_iter().map(Into::into).collect();
        if !events.is_empty() {
            self.events = events;
        }
        self
    }
}

/// A registered webhook endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookEndpoint {
    /// Endpoint id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Delivery URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Subscribed events.
    #[serde(default)]
    pub events: Vec<String>,
    /// Signing secret. Usually only returned on creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Whether deliveries are enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Any other fields.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Query string for `POST /api/v1/webhooks/test`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestWebhook<'a> {
    /// Endpoint to send the test event to.
    pub webhook_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_all_events() {
        let hook = CreateWebhook::new("https://shop.example/hooks");
        assert_eq!(hook.events, vec!["*"]);

        let hook = hook.with_events(Vec::<String>::new());
        assert_eq!(hook.events, vec!["*"]);

        let hook = CreateWebhook::new("https://shop.example/hooks")
            .with_events(["payment.verified", "refund.approved"]);
        assert_eq!(hook.events, vec!["payment.verified", "refund.approved"]);
    }
}
