//! Webhook endpoint management.
//!
//! Verifying incoming deliveries is done with [`shegerpay::webhook`], which
//! needs no client.

use shegerpay::proto::{ActionResult, CreateWebhook, TestWebhook, WebhookEndpoint};

use super::require;
use crate::client::ShegerPayClient;
use crate::error::ClientError;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

impl ShegerPayClient {
    /// Registers a webhook endpoint. The response carries the signing secret.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the URL is empty or the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.create_webhook",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn create_webhook(
        &self,
        webhook: &CreateWebhook,
    ) -> Result<WebhookEndpoint, ClientError> {
        require(&webhook.url, "url")?;
        self.post_json(&["webhooks", ""], webhook, "POST /webhooks/")
            .await
    }

    /// Lists registered webhook endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.list_webhooks",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn list_webhooks(&self) -> Result<Vec<WebhookEndpoint>, ClientError> {
        self.get(&["webhooks", ""], "GET /webhooks/").await
    }

    /// Asks the server to send a test event to an endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if `webhook_id` is empty or the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.test_webhook",
            skip(self),
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn test_webhook(&self, webhook_id: &str) -> Result<ActionResult, ClientError> {
        require(webhook_id, "webhook_id")?;
        self.post_empty(
            &["webhooks", "test"],
            Some(&TestWebhook { webhook_id }),
            "POST /webhooks/test",
        )
        .await
    }

    /// Removes a webhook endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if `webhook_id` is empty or the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.delete_webhook",
            skip(self),
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<ActionResult, ClientError> {
        require(webhook_id, "webhook_id")?;
        self.delete(&["webhooks", webhook_id], "DELETE /webhooks").await
    }
}
