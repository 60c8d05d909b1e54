//! Crypto payment intents and rates.

use shegerpay::proto::{
    CreateCryptoPayment, CryptoPaymentIntent, CryptoRates, CryptoServiceStatus,
    CryptoVerification, VerifyCryptoPayment,
};

use super::require;
use crate::client::ShegerPayClient;
use crate::error::ClientError;

#[cfg(feature = "telemetry")]
use tracing::{field::Empty, instrument};

impl ShegerPayClient {
    /// Live rates for every supported token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.crypto_rates",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn crypto_rates(&self) -> Result<CryptoRates, ClientError> {
        self.get(&["crypto", "rates"], "GET /crypto/rates").await
    }

    /// Live rate for one token; `symbol` is upper-cased.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.crypto_rate",
            skip(self),
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn crypto_rate(&self, symbol: &str) -> Result<CryptoRates, ClientError> {
        require(symbol, "symbol")?;
        let symbol = symbol.trim().to_uppercase();
        self.get(&["crypto", "rate", &symbol], "GET /crypto/rate").await
    }

    /// Creates a payment intent with a unique amount and reference id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.create_crypto_payment",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn create_crypto_payment(
        &self,
        request: &CreateCryptoPayment,
    ) -> Result<CryptoPaymentIntent, ClientError> {
        let mut request = request.clone();
        request.currency = request.currency.to_uppercase();
        self.post_json(&["crypto", "generate-intent"], &request, "POST /crypto/generate-intent")
            .await
    }

    /// Confirms a crypto payment by its reference id, optionally with the
    /// on-chain hash the payer reported.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidRequest`] for an empty reference id, and
    /// [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.verify_crypto_payment",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn verify_crypto_payment(
        &self,
        reference_id: &str,
        transaction_hash: Option<&str>,
    ) -> Result<CryptoVerification, ClientError> {
        require(reference_id, "reference_id")?;
        let body = VerifyCryptoPayment {
            reference_id: reference_id.to_owned(),
            transaction_hash: transaction_hash
                .filter(|hash| !hash.is_empty())
                .map(str::to_owned),
        };
        self.post_json(&["crypto", "verify-reference"], &body, "POST /crypto/verify-reference")
            .await
    }

    /// Crypto service health and supported chains.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "shegerpay.crypto_status",
            skip_all,
            fields(otel.status_code = Empty, error.message = Empty)
        )
    )]
    pub async fn crypto_status(&self) -> Result<CryptoServiceStatus, ClientError> {
        self.get(&["crypto", "status"], "GET /crypto/status").await
    }
}
