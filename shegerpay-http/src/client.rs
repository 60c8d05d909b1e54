//! The ShegerPay API client.
//!
//! [`ShegerPayClient`] owns a pooled `reqwest::Client`, the validated API
//! key and the base URL. Every operation goes through one of the request
//! helpers below, which attach authentication, apply the timeout, map
//! non-success statuses to [`ClientError`] and decode the JSON body.
//!
//! The operations themselves live in `crate::api`, grouped by API area.

use std::fmt::Display;
use std::time::Duration;

use http::{Method, StatusCode};
use reqwest::header::USER_AGENT;
use reqwest::redirect::Policy;
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shegerpay::{ApiKey, Mode};
use url::Url;

use crate::config::ClientConfig;
use crate::constants::API_PREFIX;
use crate::error::ClientError;

#[cfg(feature = "telemetry")]
use tracing::Span;

/// Maximum number of redirects followed by the default HTTP client.
const MAX_REDIRECTS: usize = 10;

/// Async client for the ShegerPay REST API.
///
/// Cloning is cheap: clones share the underlying connection pool.
///
/// ```no_run
/// # async fn run() -> Result<(), shegerpay_http::ClientError> {
/// use rust_decimal::Decimal;
/// use shegerpay_http::{ShegerPayClient, VerifyRequest};
///
/// let client = ShegerPayClient::from_api_key("sk_test_...")?;
/// let result = client
///     .verify(VerifyRequest::new("FT24352648751234", Decimal::from(100)))
///     .await?;
/// println!("valid: {}", result.valid);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ShegerPayClient {
    base_url: Url,
    client: Client,
    api_key: ApiKey,
    timeout: Duration,
    user_agent: String,
}

impl ShegerPayClient {
    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ApiKey`] if the key is empty or lacks a
    /// `sk_test_`/`sk_live_` prefix, [`ClientError::UrlParse`] if the base
    /// URL is invalid, and [`ClientError::Build`] if the HTTP client cannot
    /// be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let api_key = ApiKey::new(config.api_key)?;
        let base_url = parse_base_url(&config.base_url)?;
        let client = match config.http_client {
            Some(client) => client,
            None => Client::builder()
                .timeout(config.timeout)
                .redirect(Policy::limited(MAX_REDIRECTS))
                .build()
                .map_err(ClientError::Build)?,
        };

        #[cfg(feature = "telemetry")]
        tracing::debug!(mode = %api_key.mode(), base_url = %base_url, "shegerpay.client.created");

        Ok(Self {
            base_url,
            client,
            api_key,
            timeout: config.timeout,
            user_agent: config.user_agent,
        })
    }

    /// Builds a client for `api_key` with default settings.
    ///
    /// # Errors
    ///
    /// See [`ShegerPayClient::new`].
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::new(api_key))
    }

    /// Test or live, from the key prefix.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.api_key.mode()
    }

    /// The API root, always ending in `/`.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Resolves `/api/v1/<segments...>` against the base URL.
    ///
    /// Each segment is percent-encoded, so ids containing `/` or `?` stay
    /// inside their segment. An empty final segment yields a trailing slash.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::UrlParse {
                context: "base URL cannot carry a path",
                source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
            })?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ClientError> {
        let url = self.endpoint(segments)?;
        Ok(self
            .client
            .request(method, url)
            .bearer_auth(self.api_key.expose())
            .header(USER_AGENT, &self.user_agent)
            .timeout(self.timeout))
    }

    /// `GET` with no query string.
    pub(crate) async fn get<R>(
        &self,
        segments: &[&str],
        context: &'static str,
    ) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        let request = self.request(Method::GET, segments)?;
        self.execute(request, context).await
    }

    /// `GET` with `query` serialized into the query string.
    pub(crate) async fn get_query<Q, R>(
        &self,
        segments: &[&str],
        query: &Q,
        context: &'static str,
    ) -> Result<R, ClientError>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.request(Method::GET, segments)?.query(query);
        self.execute(request, context).await
    }

    /// `POST` with an `application/x-www-form-urlencoded` body.
    pub(crate) async fn post_form<B, R>(
        &self,
        segments: &[&str],
        body: &B,
        context: &'static str,
    ) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.request(Method::POST, segments)?.form(body);
        self.execute(request, context).await
    }

    /// `POST` with an `application/json` body.
    pub(crate) async fn post_json<B, R>(
        &self,
        segments: &[&str],
        body: &B,
        context: &'static str,
    ) -> Result<R, ClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let request = self.request(Method::POST, segments)?.json(body);
        self.execute(request, context).await
    }

    /// `POST` with no body and an optional query string.
    pub(crate) async fn post_empty<Q, R>(
        &self,
        segments: &[&str],
        query: Option<&Q>,
        context: &'static str,
    ) -> Result<R, ClientError>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let mut request = self.request(Method::POST, segments)?;
        if let Some(query) = query {
            request = request.query(query);
        }
        self.execute(request, context).await
    }

    /// `DELETE`.
    pub(crate) async fn delete<R>(
        &self,
        segments: &[&str],
        context: &'static str,
    ) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        let request = self.request(Method::DELETE, segments)?;
        self.execute(request, context).await
    }

    /// Sends `request` and decodes the outcome.
    ///
    /// `context` is a human-readable identifier used in tracing and error
    /// messages (e.g. `"POST /verify"`).
    async fn execute<R>(
        &self,
        request: RequestBuilder,
        context: &'static str,
    ) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        #[cfg(feature = "telemetry")]
        tracing::debug!(context, mode = %self.mode(), "shegerpay.request");

        let result = match request.send().await {
            Ok(response) => decode(response, context).await,
            Err(err) => Err(ClientError::transport(context, err)),
        };

        record_result_on_span(context, &result);

        result
    }
}

/// Turns a response into either the decoded body or a [`ClientError`].
///
/// An empty 2xx body (e.g. `204 No Content` from a delete) decodes as `{}`.
async fn decode<R>(response: reqwest::Response, context: &'static str) -> Result<R, ClientError>
where
    R: DeserializeOwned,
{
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|source| ClientError::ResponseBodyRead { context, source })?;

    if !status.is_success() {
        let body = String::from_utf8_lossy(&bytes).into_owned();
        return Err(ClientError::from_status(context, status, body));
    }

    let body: &[u8] = if bytes.is_empty() || status == StatusCode::NO_CONTENT {
        b"{}"
    } else {
        &bytes
    };
    serde_json::from_slice(body)
        .map_err(|source| ClientError::JsonDeserialization { context, source })
}

/// Parses and normalizes the base URL: trailing slashes are stripped and a
/// single one added, so joining keeps any path prefix.
fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let mut normalized = raw.trim().trim_end_matches('/').to_owned();
    normalized.push('/');
    let url = Url::parse(&normalized).map_err(|source| ClientError::UrlParse {
        context: "Failed to parse base URL",
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ClientError::UrlParse {
            context: "base URL cannot carry a path",
            source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
        });
    }
    Ok(url)
}

/// Records the outcome of a request on the current span.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R, E: Display>(context: &'static str, result: &Result<R, E>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(
                tracing::Level::ERROR,
                error = %err,
                context,
                "ShegerPay request failed"
            );
        }
    }
}

/// Records the outcome of a request on the current span.
#[cfg(not(feature = "telemetry"))]
const fn record_result_on_span<R, E: Display>(_context: &'static str, _result: &Result<R, E>) {}
