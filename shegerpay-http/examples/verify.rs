//! Verifies a single payment from the command line.
//!
//! # Usage
//!
//! ```bash
//! SHEGERPAY_API_KEY=sk_test_... \
//!     cargo run -p shegerpay-http --example verify -- FT24352648751234 100
//!
//! # Load settings from a TOML file instead
//! SHEGERPAY_CONFIG=shegerpay.toml \
//!     cargo run -p shegerpay-http --example verify -- FT24352648751234 100
//! ```
//!
//! # Environment Variables
//!
//! - `SHEGERPAY_API_KEY` - Secret key (required unless the config file has one)
//! - `SHEGERPAY_BASE_URL` - Override the API endpoint
//! - `SHEGERPAY_CONFIG` - Path to a TOML config file
//! - `RUST_LOG` - Log level filter (default: `info`)
//!
//! A `.env` file in the working directory is loaded first.

use rust_decimal::Decimal;
use shegerpay_http::{ClientConfig, ShegerPayClient, VerifyRequest};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        tracing::error!("Verification failed: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let transaction_id = args.next().ok_or("usage: verify <transaction-id> <amount>")?;
    let amount: Decimal = args
        .next()
        .ok_or("usage: verify <transaction-id> <amount>")?
        .parse()?;

    let client = ShegerPayClient::new(ClientConfig::load()?)?;
    tracing::info!(mode = %client.mode(), base_url = %client.base_url(), "Client ready");

    let result = client
        .verify(VerifyRequest::new(transaction_id, amount))
        .await?;

    if result.valid {
        tracing::info!(
            status = %result.status,
            provider = ?result.provider,
            payer = ?result.payer,
            "Payment verified"
        );
    } else {
        tracing::warn!(
            status = %result.status,
            reason = ?result.reason,
            "Payment not verified"
        );
    }

    Ok(())
}
