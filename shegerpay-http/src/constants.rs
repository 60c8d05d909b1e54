//! Defaults and well-known names used by the HTTP client.

use std::time::Duration;

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.shegerpay.com";

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("ShegerPay-Rust-SDK/", env!("CARGO_PKG_VERSION"));

/// Path segments every endpoint lives under.
pub const API_PREFIX: [&str; 2] = ["api", "v1"];

/// Environment variable holding the secret key.
pub const ENV_API_KEY: &str = "SHEGERPAY_API_KEY";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "SHEGERPAY_BASE_URL";

/// Environment variable overriding the timeout, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "SHEGERPAY_TIMEOUT_SECS";

/// Environment variable naming the TOML config file for the demos.
pub const ENV_CONFIG_PATH: &str = "SHEGERPAY_CONFIG";
