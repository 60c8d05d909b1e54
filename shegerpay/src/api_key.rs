//! Secret API keys and the environment they select.
//!
//! ShegerPay issues keys of the form `sk_test_...` and `sk_live_...`. The prefix
//! decides whether requests run against sandbox data ([`Mode::Test`]) or real
//! bank transactions ([`Mode::Live`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ApiKeyError;

const TEST_PREFIX: &str = "sk_test_";
const LIVE_PREFIX: &str = "sk_live_";

/// The environment an API key belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Sandbox keys (`sk_test_`).
    Test,
    /// Production keys (`sk_live_`).
    Live,
}

impl Mode {
    /// Returns the wire name of the mode (`"test"` or `"live"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated ShegerPay secret key.
///
/// The raw secret is only reachable through [`ApiKey::expose`]; `Debug` and
/// `Display` print the prefix and mask the rest so keys do not leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    secret: String,
    mode: Mode,
}

impl ApiKey {
    /// Validates `key` and detects its mode.
    ///
    /// # Errors
    ///
    /// Returns [`ApiKeyError::Missing`] for an empty key and
    /// [`ApiKeyError::InvalidFormat`] when the prefix is neither `sk_test_`
    /// nor `sk_live_`.
    pub fn new(key: impl Into<String>) -> Result<Self, ApiKeyError> {
        let secret = key.into();
        if secret.is_empty() {
            return Err(ApiKeyError::Missing);
        }
        let mode = if secret.starts_with(TEST_PREFIX) {
            Mode::Test
        } else if secret.starts_with(LIVE_PREFIX) {
            Mode::Live
        } else {
            return Err(ApiKeyError::InvalidFormat);
        };
        Ok(Self { secret, mode })
    }

    /// Returns the mode selected by the key prefix.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the raw secret, for building the `Authorization` header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.secret
    }

    fn redacted(&self) -> String {
        let prefix = match self.mode {
            Mode::Test => TEST_PREFIX,
            Mode::Live => LIVE_PREFIX,
        };
        format!("{prefix}****")
    }
}

impl FromStr for ApiKey {
    type Err = ApiKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ApiKey {
    type Error = ApiKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKey")
            .field("secret", &self.redacted())
            .field("mode", &self.mode)
            .finish()
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}
