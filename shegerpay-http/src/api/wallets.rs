//! Multi-currency wallets.

use shegerpay::proto::{Conversion, ConvertCurrency, WalletBalances};

use crate::client::ShegerPayClient;
use crate::error::ClientError;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

impl ShegerPayClient {
    /// Balances per currency.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.wallet_balances",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn wallet_balances(&self) -> Result<WalletBalances, ClientError> {
        self.get(&["wallets", "balances"], "GET /wallets/balances").await
    }

    /// Converts between two wallet currencies.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.convert_currency",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn convert_currency(
        &self,
        request: &ConvertCurrency,
    ) -> Result<Conversion, ClientError> {
        self.post_json(&["wallets", "convert"], request, "POST /wallets/convert")
            .await
    }
}
