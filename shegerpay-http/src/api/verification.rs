//! Bank and mobile-money verification.

use rust_decimal::Decimal;
use shegerpay::proto::{
    QuickVerifyRequest, Transaction, TransactionFilter, TransactionPage, VerificationResult,
    VerifyRequest,
};

use crate::client::ShegerPayClient;
use crate::error::ClientError;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

impl ShegerPayClient {
    /// Verifies a CBE, Telebirr or bank-transfer payment.
    ///
    /// The provider is detected from the transaction id when unset (`FT...`
    /// is CBE, anything else Telebirr) and the merchant name defaults to
    /// [`DEFAULT_MERCHANT_NAME`](shegerpay::proto::DEFAULT_MERCHANT_NAME).
    /// A response with `valid: false` is a successful call; inspect
    /// [`VerificationResult::reason`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] without contacting the server
    /// for an empty transaction id or a non-positive amount, and the usual
    /// transport and status errors otherwise.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.verify",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn verify(&self, request: VerifyRequest) -> Result<VerificationResult, ClientError> {
        request.validate()?;
        let request = request.resolve();
        self.post_form(&["verify"], &request, "POST /verify").await
    }

    /// Verifies a payment letting the server detect the provider.
    ///
    /// # Errors
    ///
    /// Same as [`ShegerPayClient::verify`].
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.quick_verify",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn quick_verify(
        &self,
        transaction_id: impl Into<String> + Send,
        amount: Decimal,
    ) -> Result<VerificationResult, ClientError> {
        let request = QuickVerifyRequest::new(transaction_id, amount);
        request.validate()?;
        self.post_form(&["quick-verify"], &request, "POST /quick-verify")
            .await
    }

    /// Lists the most recent verifications.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.history",
            skip(self),
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn history(&self, limit: u32) -> Result<Vec<Transaction>, ClientError> {
        self.get_query(&["history"], &[("limit", limit)], "GET /history")
            .await
    }

    /// Lists transactions matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.list_transactions",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn list_transactions(
        &self,
        filter: &TransactionFilter,
    ) -> Result<TransactionPage, ClientError> {
        self.get_query(&["transactions", "history"], filter, "GET /transactions/history")
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use shegerpay::{Provider, RequestError};
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::testing::client_for;

    #[tokio::test]
    async fn test_verify_detects_cbe_and_defaults_merchant() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/verify"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string(concat!(
                "provider=cbe&transaction_id=FT24352648751234&amount=100",
                "&merchant_name=ShegerPay+Verification",
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "valid": true,
                "status": "verified",
                "provider": "cbe",
                "transaction_id": "FT24352648751234",
                "amount": 100.0,
                "mode": "test"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client
            .verify(VerifyRequest::new("FT24352648751234", Decimal::from(100)))
            .await
            .unwrap();
        assert!(result.valid);
        assert_eq!(result.status, "verified");
        assert_eq!(result.amount, Some(Decimal::from(100)));
    }

    #[tokio::test]
    async fn test_verify_telebirr_with_overrides() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/verify"))
            .and(body_string(
                "provider=telebirr&transaction_id=ABC123&amount=50.5&merchant_name=My+Shop",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "valid": false,
                "status": "failed",
                "reason": "Amount mismatch"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client
            .verify(
                VerifyRequest::new("ABC123", Decimal::new(505, 1)).with_merchant_name("My Shop"),
            )
            .await
            .unwrap();
        assert!(!result.valid);
        assert_eq!(result.reason.as_deref(), Some("Amount mismatch"));
    }

    #[tokio::test]
    async fn test_verify_bank_transfer_sub_provider() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/verify"))
            .and(body_string(concat!(
                "provider=bank_transfer&transaction_id=PAY-9&amount=20",
                "&merchant_name=ShegerPay+Verification&sub_provider=Payoneer",
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client
            .verify(
                VerifyRequest::new("PAY-9", Decimal::from(20))
                    .with_provider(Provider::BankTransfer)
                    .with_sub_provider("Payoneer"),
            )
            .await
            .unwrap();
        assert!(!result.valid);
        assert_eq!(result.status, "unknown");
    }

    #[tokio::test]
    async fn test_verify_rejects_locally() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client
            .verify(VerifyRequest::new("", Decimal::from(100)))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::InvalidRequest(RequestError::MissingTransactionId)
        ));

        let err = client
            .quick_verify("FT1", Decimal::ZERO)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ClientError::InvalidRequest(RequestError::NonPositiveAmount)
        ));
    }

    #[tokio::test]
    async fn test_verify_validation_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/verify"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"detail": "Receipt not found"})),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client
            .verify(VerifyRequest::new("FT404", Decimal::from(10)))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Receipt not found");
    }

    #[tokio::test]
    async fn test_quick_verify() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/quick-verify"))
            .and(body_string("transaction_id=TB998877&amount=250"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "valid": true,
                "status": "verified",
                "provider": "telebirr"
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let result = client
            .quick_verify("TB998877", Decimal::from(250))
            .await
            .unwrap();
        assert_eq!(result.provider.as_deref(), Some("telebirr"));
    }

    #[tokio::test]
    async fn test_history() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/history"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": "tx_1",
                    "provider": "cbe",
                    "external_id": "FT1",
                    "amount": 100.0,
                    "status": "verified"
                },
                {"id": "tx_2", "provider": "telebirr", "status": "failed", "mode": "test"}
            ])))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let history = client.history(2).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].external_id.as_deref(), Some("FT1"));
        assert_eq!(history[1].amount, None);
    }

    #[tokio::test]
    async fn test_history_keeps_records_without_id() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/history"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!([{"id": "tx_1"}, {"provider": "cbe"}])),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let history = client.history(10).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id.as_deref(), Some("tx_1"));
        assert_eq!(history[1].id, None);
        assert_eq!(history[1].provider.as_deref(), Some("cbe"));
    }

    #[tokio::test]
    async fn test_list_transactions_query() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/transactions/history"))
            .and(query_param("status", "verified"))
            .and(query_param("provider", "cbe"))
            .and(query_param("limit", "50"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "transactions": [{"id": 17}, {"id": "tx_2"}, {"amount": "oops"}],
                "total": 2
            })))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let page = client
            .list_transactions(
                &TransactionFilter::new()
                    .with_status("verified")
                    .with_provider(Provider::Cbe),
            )
            .await
            .unwrap();
        assert_eq!(page.transactions.len(), 2);
        assert_eq!(page.transactions[0].id.as_deref(), Some("17"));
        assert_eq!(page.total, Some(2));
    }
}
