//! Payer disputes.

use shegerpay::proto::{ActionResult, Dispute, DisputeResponse, StatusFilter};

use super::require;
use crate::client::ShegerPayClient;
use crate::error::ClientError;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

impl ShegerPayClient {
    /// Lists disputes.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.list_disputes",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn list_disputes(&self, filter: &StatusFilter) -> Result<Vec<Dispute>, ClientError> {
        self.get_query(&["disputes"], filter, "GET /disputes").await
    }

    /// Answers a dispute, optionally with evidence links.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if `dispute_id` or the message is empty, or
    /// the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.respond_to_dispute",
            skip(self, response),
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn respond_to_dispute(
        &self,
        dispute_id: &str,
        response: &DisputeResponse,
    ) -> Result<ActionResult, ClientError> {
        require(dispute_id, "dispute_id")?;
        require(&response.message, "message")?;
        self.post_json(
            &["disputes", dispute_id, "respond"],
            response,
            "POST /disputes/respond",
        )
        .await
    }
}
