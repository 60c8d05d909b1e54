//! PayPal orders, vaulted cards, subscriptions and refunds.

use shegerpay::proto::{
    ActionResult, CancelSubscription, CaptureOrder, ChargeSavedCard, CreateOrder,
    CreateSubscription, PaypalObject, PaypalRefund,
};

use super::require;
use crate::client::ShegerPayClient;
use crate::error::ClientError;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

impl ShegerPayClient {
    /// Creates a PayPal order. The payer approves it at
    /// [`PaypalObject::approval_url`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.paypal_create_order",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn paypal_create_order(
        &self,
        order: &CreateOrder,
    ) -> Result<PaypalObject, ClientError> {
        self.post_json(&["paypal", "create-order"], order, "POST /paypal/create-order")
            .await
    }

    /// Captures an approved order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if `order_id` is empty or the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.paypal_capture_order",
            skip(self),
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn paypal_capture_order(&self, order_id: &str) -> Result<PaypalObject, ClientError> {
        require(order_id, "order_id")?;
        let body = CaptureOrder {
            order_id: order_id.to_owned(),
        };
        self.post_json(&["paypal", "capture-order"], &body, "POST /paypal/capture-order")
            .await
    }

    /// Fetches an order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if `order_id` is empty or the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.paypal_get_order",
            skip(self),
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn paypal_get_order(&self, order_id: &str) -> Result<PaypalObject, ClientError> {
        require(order_id, "order_id")?;
        self.get(&["paypal", "order", order_id], "GET /paypal/order").await
    }

    /// Starts saving a card without charging it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.paypal_create_setup_token",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn paypal_create_setup_token(&self) -> Result<PaypalObject, ClientError> {
        self.post_json(
            &["paypal", "vault", "setup-token"],
            &serde_json::Map::new(),
            "POST /paypal/vault/setup-token",
        )
        .await
    }

    /// Lists the merchant's vaulted cards.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.paypal_list_saved_cards",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn paypal_list_saved_cards(&self) -> Result<PaypalObject, ClientError> {
        self.get(&["paypal", "vault", "payment-tokens"], "GET /paypal/vault/payment-tokens")
            .await
    }

    /// Charges a vaulted card.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.paypal_charge_saved_card",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn paypal_charge_saved_card(
        &self,
        charge: &ChargeSavedCard,
    ) -> Result<PaypalObject, ClientError> {
        require(&charge.payment_token_id, "payment_token_id")?;
        self.post_json(&["paypal", "vault", "charge"], charge, "POST /paypal/vault/charge")
            .await
    }

    /// Removes a vaulted card.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if `token_id` is empty or the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.paypal_delete_saved_card",
            skip(self),
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn paypal_delete_saved_card(
        &self,
        token_id: &str,
    ) -> Result<ActionResult, ClientError> {
        require(token_id, "token_id")?;
        self.delete(
            &["paypal", "vault", "payment-token", token_id],
            "DELETE /paypal/vault/payment-token",
        )
        .await
    }

    /// Creates a recurring subscription.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.paypal_create_subscription",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn paypal_create_subscription(
        &self,
        subscription: &CreateSubscription,
    ) -> Result<PaypalObject, ClientError> {
        require(&subscription.plan_id, "plan_id")?;
        self.post_json(&["paypal", "subscriptions"], subscription, "POST /paypal/subscriptions")
            .await
    }

    /// Fetches a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if `subscription_id` is empty or the request
    /// fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.paypal_get_subscription",
            skip(self),
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn paypal_get_subscription(
        &self,
        subscription_id: &str,
    ) -> Result<PaypalObject, ClientError> {
        require(subscription_id, "subscription_id")?;
        self.get(&["paypal", "subscriptions", subscription_id], "GET /paypal/subscriptions")
            .await
    }

    /// Cancels a subscription. `reason` defaults to `"Customer requested"`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if `subscription_id` is empty or the request
    /// fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.paypal_cancel_subscription",
            skip(self),
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn paypal_cancel_subscription(
        &self,
        subscription_id: &str,
        reason: Option<&str>,
    ) -> Result<ActionResult, ClientError> {
        require(subscription_id, "subscription_id")?;
        let body = reason
            .filter(|r| !r.is_empty())
            .map_or_else(CancelSubscription::default, |r| CancelSubscription {
                reason: r.to_owned(),
            });
        self.post_json(
            &["paypal", "subscriptions", subscription_id, "cancel"],
            &body,
            "POST /paypal/subscriptions/cancel",
        )
        .await
    }

    /// Refunds a capture in full or in part.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.paypal_refund",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn paypal_refund(&self, refund: &PaypalRefund) -> Result<PaypalObject, ClientError> {
        require(&refund.capture_id, "capture_id")?;
        self.post_json(&["paypal", "refund"], refund, "POST /paypal/refund")
            .await
    }

    /// Whether PayPal is configured for this merchant.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.paypal_status",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn paypal_status(&self) -> Result<PaypalObject, ClientError> {
        self.get(&["paypal", "status"], "GET /paypal/status").await
    }
}
