//! Plan and usage.

use shegerpay::proto::{ApiUsage, Subscription, Usage};

use crate::client::ShegerPayClient;
use crate::error::ClientError;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

impl ShegerPayClient {
    /// The merchant's current ShegerPay plan.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.subscription",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn subscription(&self) -> Result<Subscription, ClientError> {
        self.get(&["subscriptions", "current"], "GET /subscriptions/current")
            .await
    }

    /// Quota consumption for the current billing period.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.usage",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn usage(&self) -> Result<Usage, ClientError> {
        self.get(&["subscriptions", "usage"], "GET /subscriptions/usage")
            .await
    }

    /// API request counters.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.api_usage",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn api_usage(&self) -> Result<ApiUsage, ClientError> {
        self.get(&["analytics", "api-usage"], "GET /analytics/api-usage")
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::client::testing::client_for;

    #[tokio::test]
    async fn test_plan_and_usage() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/subscriptions/current"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"plan": "growth", "status": "active"})),
            )
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/subscriptions/usage"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "verifications_used": 420,
                "verifications_limit": 1000
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/analytics/api-usage"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "total_requests": 1234,
                "by_endpoint": {"/api/v1/verify": 1000}
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        assert_eq!(client.subscription().await.unwrap().plan.as_deref(), Some("growth"));
        assert_eq!(client.usage().await.unwrap().remaining(), Some(580));

        let api_usage = client.api_usage().await.unwrap();
        assert_eq!(api_usage.total_requests, Some(1234));
        assert!(api_usage.extra.contains_key("by_endpoint"));
    }

    #[tokio::test]
    async fn test_unauthorized_key() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/subscriptions/current"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"detail": "Invalid API key"})),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client.subscription().await.unwrap_err();
        assert!(err.is_authentication());
    }
}
