//! International wallet accounts (Wise, Payoneer) and the Gmail receipt bot.

use shegerpay::proto::{AddWalletAccount, GmailStatus, WalletAccount, WalletAccountKind};

use super::require;
use crate::client::ShegerPayClient;
use crate::error::ClientError;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

impl ShegerPayClient {
    /// Links an international wallet account.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the email is empty or the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.add_wallet_account",
            skip_all,
            fields(
                provider = %account.provider,
                otel.status_code = Empty,
                error.message = Empty
            )
        )
    )]
    pub async fn add_wallet_account(
        &self,
        account: &AddWalletAccount,
    ) -> Result<WalletAccount, ClientError> {
        require(&account.email, "email")?;
        self.post_json(
            &["international", "wallet-accounts"],
            account,
            "POST /international/wallet-accounts",
        )
        .await
    }

    /// Links a Wise account.
    ///
    /// # Errors
    ///
    /// See [`ShegerPayClient::add_wallet_account`].
    pub async fn add_wise_account(
        &self,
        email: &str,
        label: Option<&str>,
    ) -> Result<WalletAccount, ClientError> {
        self.add_wallet_account(&wallet_account(WalletAccountKind::Wise, email, label))
            .await
    }

    /// Links a Payoneer account.
    ///
    /// # Errors
    ///
    /// See [`ShegerPayClient::add_wallet_account`].
    pub async fn add_payoneer_account(
        &self,
        email: &str,
        label: Option<&str>,
    ) -> Result<WalletAccount, ClientError> {
        self.add_wallet_account(&wallet_account(WalletAccountKind::Payoneer, email, label))
            .await
    }

    /// State of the Gmail forwarding bot.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.gmail_status",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn gmail_status(&self) -> Result<GmailStatus, ClientError> {
        self.get(&["international", "gmail", "status"], "GET /international/gmail/status")
            .await
    }
}

fn wallet_account(kind: WalletAccountKind, email: &str, label: Option<&str>) -> AddWalletAccount {
    let account = AddWalletAccount::new(kind, email);
    match label.filter(|l| !l.is_empty()) {
        Some(label) => account.with_label(label),
        None => account,
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
    async fn test_add_accounts() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/international/wallet-accounts"))
            .and(body_json(json!({"provider": "wise", "email": "me@shop.et"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": "wa_1", "provider": "wise"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/international/wallet-accounts"))
            .and(body_json(json!({"provider": "payoneer", "email": "me@shop.et", "label": "USD"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": "wa_2", "provider": "payoneer", "label": "USD"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let wise = client.add_wise_account("me@shop.et", Some("")).await.unwrap();
        assert_eq!(wise.id.as_deref(), Some("wa_1"));

        let payoneer = client
            .add_payoneer_account("me@shop.et", Some("USD"))
            .await
            .unwrap();
        assert_eq!(payoneer.label.as_deref(), Some("USD"));

        let err = client.add_wise_account("", None).await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_gmail_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/international/gmail/status"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"connected": true, "status": "watching"})),
            )
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let status = client.gmail_status().await.unwrap();
        assert_eq!(status.connected, Some(true));
    }
}
