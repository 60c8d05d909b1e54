//! Client configuration.
//!
//! [`ClientConfig`] can be built in code, read from the environment with
//! [`ClientConfig::from_env`], or loaded from a TOML file with
//! [`ClientConfig::load_from`]:
//!
//! ```toml
//! api_key = "${SHEGERPAY_API_KEY}"
//! base_url = "https://api.shegerpay.com"
//! timeout_secs = 30
//! ```
//!
//! `$VAR` and `${VAR}` references in the file are expanded from the
//! environment, and the `SHEGERPAY_*` variables override file values.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ENV_API_KEY, ENV_BASE_URL, ENV_CONFIG_PATH,
    ENV_TIMEOUT_SECS, USER_AGENT,
};

/// Errors raised while assembling a [`ClientConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file does not exist.
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid TOML or has wrongly typed fields.
    #[error("invalid config file: {0}")]
    Toml(#[from] toml::de::Error),
    /// Neither the file nor the environment provides an API key.
    #[error("no API key configured: set {ENV_API_KEY} or `api_key`")]
    MissingApiKey,
    /// The timeout is zero or not a whole number of seconds.
    #[error("invalid timeout: {0:?}")]
    InvalidTimeout(String),
}

/// Settings for [`ShegerPayClient`](crate::ShegerPayClient).
#[derive(Clone)]
pub struct ClientConfig {
    /// Secret key, `sk_test_...` or `sk_live_...`.
    pub api_key: String,
    /// API root; a trailing slash is ignored.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// Pre-built HTTP client, e.g. with a proxy or custom TLS roots.
    pub http_client: Option<reqwest::Client>,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("has_http_client", &self.http_client.is_some())
            .finish()
    }
}

impl ClientConfig {
    /// Creates a config for `api_key` with production defaults.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_owned(),
            http_client: None,
        }
    }

    /// Points the client at another deployment.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Uses a pre-built `reqwest::Client`.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Loads from the file named by `SHEGERPAY_CONFIG`, or from the
    /// environment alone when it is unset.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::load_from`] and [`ClientConfig::from_env`].
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var(ENV_CONFIG_PATH) {
            Ok(path) => Self::load_from(path),
            Err(_) => Self::from_env(),
        }
    }

    /// Reads `SHEGERPAY_API_KEY`, `SHEGERPAY_BASE_URL` and
    /// `SHEGERPAY_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when no key is set and
    /// [`ConfigError::InvalidTimeout`] for a malformed timeout.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(FileConfig::default(), env_lookup)
    }

    /// Loads a TOML file, expanding `$VAR` references and applying
    /// `SHEGERPAY_*` overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file is missing,
    /// [`ConfigError::Io`] or [`ConfigError::Toml`] if it cannot be read
    /// or parsed, and the [`ClientConfig::from_env`] errors otherwise.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, env_lookup)
    }

    fn parse<F>(content: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let expanded = expand_env_vars_with(content, &lookup);
        let file: FileConfig = toml::from_str(&expanded)?;
        Self::from_lookup(file, lookup)
    }

    fn from_lookup<F>(file: FileConfig, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let api_key = env(ENV_API_KEY)
            .or_else(|| file.api_key.filter(|key| !key.is_empty()))
            .ok_or(ConfigError::MissingApiKey)?;
        let mut config = Self::new(api_key);

        if let Some(base_url) = env(ENV_BASE_URL).or(file.base_url) {
            config.base_url = base_url;
        }
        if let Some(user_agent) = file.user_agent {
            config.user_agent = user_agent;
        }
        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?,
            ),
            None => file.timeout_secs,
        };
        if let Some(secs) = timeout_secs {
            if secs == 0 {
                return Err(ConfigError::InvalidTimeout(secs.to_string()));
            }
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }
}

/// On-disk shape of the config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Expands `$VAR` and `${VAR}` references using `lookup`.
///
/// Unresolved references are left as-is.
fn expand_env_vars_with<F>(input: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '$' {
            result.push(ch);
            continue;
        }
        let braced = chars.next_if_eq(&'{').is_some();

        let mut name = String::new();
        let mut closed = false;
        while let Some(&c) = chars.peek() {
            if braced && c == '}' {
                chars.next();
                closed = true;
                break;
            }
            if !braced && !c.is_ascii_alphanumeric() && c != '_' {
                break;
            }
            name.push(c);
            chars.next();
        }

        match lookup(&name).filter(|_| !name.is_empty() && (closed || !braced)) {
            Some(value) => result.push_str(&value),
            None => {
                result.push('$');
                if braced {
                    result.push('{');
                }
                result.push_str(&name);
                if closed {
                    result.push('}');
                }
            }
        }
    }

    result
}
