//! Two-factor authentication and passkeys.

use shegerpay::proto::{ActionResult, Passkey, TwoFactorCode, TwoFactorSetup, TwoFactorStatus};

use super::require;
use crate::client::ShegerPayClient;
use crate::error::ClientError;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

impl ShegerPayClient {
    /// Starts two-factor enrolment; returns the TOTP secret and QR code.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.setup_two_factor",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn setup_two_factor(&self) -> Result<TwoFactorSetup, ClientError> {
        self.post_json(
            &["two-factor", "setup"],
            &serde_json::Map::new(),
            "POST /two-factor/setup",
        )
        .await
    }

    /// Confirms enrolment with a code from the authenticator app.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if `code` is empty or the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.verify_two_factor",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn verify_two_factor(&self, code: &str) -> Result<ActionResult, ClientError> {
        self.post_code(&["two-factor", "verify"], code, "POST /two-factor/verify")
            .await
    }

    /// Turns two-factor auth off.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if `code` is empty or the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.disable_two_factor",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn disable_two_factor(&self, code: &str) -> Result<ActionResult, ClientError> {
        self.post_code(&["two-factor", "disable"], code, "POST /two-factor/disable")
            .await
    }

    /// Whether two-factor auth is on.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.two_factor_status",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn two_factor_status(&self) -> Result<TwoFactorStatus, ClientError> {
        self.get(&["two-factor", "status"], "GET /two-factor/status").await
    }

    /// Lists registered passkeys.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.list_passkeys",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn list_passkeys(&self) -> Result<Vec<Passkey>, ClientError> {
        self.get(&["passkeys"], "GET /passkeys").await
    }

    /// Removes a passkey.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if `passkey_id` is empty or the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.delete_passkey",
            skip(self),
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn delete_passkey(&self, passkey_id: &str) -> Result<ActionResult, ClientError> {
        require(passkey_id, "passkey_id")?;
        self.delete(&["passkeys", passkey_id], "DELETE /passkeys").await
    }

    async fn post_code(
        &self,
        segments: &[&str],
        code: &str,
        context: &'static str,
    ) -> Result<ActionResult, ClientError> {
        require(code, "code")?;
        let body = TwoFactorCode {
            code: code.trim().to_owned(),
        };
        self.post_json(segments, &body, context).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::testing::client_for;

    #[tokio::test]
    async fn test_two_factor_flow() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/two-factor/setup"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "secret": "JBSWY3DPEHPK3PXP",
                "qr_code": "data:image/png;base64,AAAA",
                "backup_codes": ["11111111", "22222222"]
            })))
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/two-factor/verify"))
            .and(body_json(json!({"code": "123456"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/two-factor/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"enabled": true})))
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/two-factor/disable"))
            .and(body_json(json!({"code": "654321"})))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"detail": "Invalid code"})),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let setup = client.setup_two_factor().await.unwrap();
        assert_eq!(setup.backup_codes.len(), 2);

        client.verify_two_factor(" 123456 ").await.unwrap();
        assert!(client.two_factor_status().await.unwrap().enabled);

        let err = client.disable_two_factor("654321").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid code");

        let err = client.verify_two_factor("").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_passkeys() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/passkeys"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "pk_1", "name": "MacBook", "created_at": "2024-05-01T10:00:00Z"}
            ])))
            .mount(&mock_server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/passkeys/pk_1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let passkeys = client.list_passkeys().await.unwrap();
        assert_eq!(passkeys[0].name.as_deref(), Some("MacBook"));
        assert_eq!(client.delete_passkey("pk_1").await.unwrap().success, Some(true));
    }
}
