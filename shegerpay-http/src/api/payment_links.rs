//! Hosted payment links.

use shegerpay::proto::{ActionResult, CreatePaymentLink, PaymentLink, PaymentLinkList};

use super::require;
use crate::client::ShegerPayClient;
use crate::error::ClientError;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

impl ShegerPayClient {
    /// Creates a shareable payment link.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the title is empty or the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.create_payment_link",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn create_payment_link(
        &self,
        link: &CreatePaymentLink,
    ) -> Result<PaymentLink, ClientError> {
        require(&link.title, "title")?;
        self.post_json(&["payment-links", ""], link, "POST /payment-links/")
            .await
    }

    /// Lists the merchant's payment links.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.list_payment_links",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn list_payment_links(&self) -> Result<Vec<PaymentLink>, ClientError> {
        let list: PaymentLinkList = self
            .get(&["payment-links", ""], "GET /payment-links/")
            .await?;
        Ok(list.into_links())
    }

    /// Deletes a payment link.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if `link_id` is empty or the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.delete_payment_link",
            skip(self),
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn delete_payment_link(&self, link_id: &str) -> Result<ActionResult, ClientError> {
        require(link_id, "link_id")?;
        self.delete(&["payment-links", link_id], "DELETE /payment-links")
            .await
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::testing::client_for;

    #[tokio::test]
    async fn test_create_payment_link() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/payment-links/"))
            .and(body_json(json!({
                "title": "Coffee beans",
                "amount": 850.0,
                "currency": "ETB",
                "description": "1kg Yirgacheffe",
                "enable_cbe": true,
                "enable_telebirr": true,
                "enable_crypto": false,
                "expires_in_hours": 24
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "lnk_1",
                "url": "https://pay.shegerpay.com/l/abc",
                "short_code": "abc",
                "amount": 850.0
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let link = client
            .create_payment_link(
                &CreatePaymentLink::new("Coffee beans", Decimal::from(850))
                    .with_description("1kg Yirgacheffe"),
            )
            .await
            .unwrap();
        assert_eq!(link.url.as_deref(), Some("https://pay.shegerpay.com/l/abc"));
    }

    #[tokio::test]
    async fn test_list_accepts_both_shapes() {
        let wrapped = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/payment-links/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"links": [{"id": "lnk_1"}, {"id": "lnk_2"}]})),
            )
            .mount(&wrapped)
            .await;
        let bare = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/payment-links/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": "lnk_3"}])))
            .mount(&bare)
            .await;

        let links = client_for(&wrapped).list_payment_links().await.unwrap();
        assert_eq!(links.len(), 2);

        let links = client_for(&bare).list_payment_links().await.unwrap();
        assert_eq!(links[0].id.as_deref(), Some("lnk_3"));
    }

    #[tokio::test]
    async fn test_delete_payment_link() {
        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/payment-links/lnk_1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "message": "Deleted"})),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let ack = client.delete_payment_link("lnk_1").await.unwrap();
        assert_eq!(ack.message.as_deref(), Some("Deleted"));
    }
}
