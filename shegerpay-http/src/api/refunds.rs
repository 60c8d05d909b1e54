//! Refunds of verified transactions.

use shegerpay::proto::{CreateRefund, Refund, StatusFilter};

use super::require;
use crate::client::ShegerPayClient;
use crate::error::ClientError;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

impl ShegerPayClient {
    /// Requests a full or partial refund.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the transaction id is empty or the request
    /// fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.create_refund",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn create_refund(&self, refund: &CreateRefund) -> Result<Refund, ClientError> {
        require(&refund.transaction_id, "transaction_id")?;
        self.post_json(&["refunds"], refund, "POST /refunds").await
    }

    /// Lists refunds, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.list_refunds",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn list_refunds(&self, filter: &StatusFilter) -> Result<Vec<Refund>, ClientError> {
        self.get_query(&["refunds"], filter, "GET /refunds").await
    }

    /// Approves a pending refund.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if `refund_id` is empty or the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.approve_refund",
            skip(self),
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn approve_refund(&self, refund_id: &str) -> Result<Refund, ClientError> {
        require(refund_id, "refund_id")?;
        self.post_empty::<(), _>(&["refunds", refund_id, "approve"], None, "POST /refunds/approve")
            .await
    }
}
