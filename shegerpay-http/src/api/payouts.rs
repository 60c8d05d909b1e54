//! Merchant payouts.

use shegerpay::proto::{Payout, PayoutFilter, RequestPayout};

use crate::client::ShegerPayClient;
use crate::error::ClientError;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

impl ShegerPayClient {
    /// Requests a payout of wallet funds.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.request_payout",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn request_payout(&self, payout: &RequestPayout) -> Result<Payout, ClientError> {
        self.post_json(&["payouts"], payout, "POST /payouts").await
    }

    /// Lists payout requests.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.list_payouts",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn list_payouts(&self, filter: &PayoutFilter) -> Result<Vec<Payout>, ClientError> {
        self.get_query(&["payouts"], filter, "GET /payouts").await
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::testing::client_for;

    #[tokio::test]
    async fn test_request_payout() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/payouts"))
            .and(body_json(json!({
                "amount": 5000.0,
                "currency": "ETB",
                "method": "bank_transfer",
                "account_number": "1000123456789"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "po_1", "status": "pending"})),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let payout = client
            .request_payout(
                &RequestPayout::new(Decimal::from(5000), "ETB")
                    .with_detail("account_number", "1000123456789"),
            )
            .await
            .unwrap();
        assert_eq!(payout.id.as_deref(), Some("po_1"));
    }

    #[tokio::test]
    async fn test_list_payouts() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/payouts"))
            .and(query_param_is_missing("status"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"id": "po_1"}, {"id": "po_2"}])),
            )
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/payouts"))
            .and(query_param("status", "paid"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"id": "po_2", "status": "paid"}])),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        assert_eq!(client.list_payouts(&PayoutFilter::default()).await.unwrap().len(), 2);

        let paid = client
            .list_payouts(&PayoutFilter {
                status: Some("paid".to_owned()),
            })
            .await
            .unwrap();
        assert_eq!(paid.len(), 1);
    }
}
