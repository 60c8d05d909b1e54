#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for the ShegerPay payment verification API.
//!
//! This crate holds everything about the ShegerPay API that does not depend on
//! an HTTP stack: API key parsing, provider detection for Ethiopian payment
//! rails, webhook signature checks, and the request/response types exchanged
//! with the remote service. The async client lives in `shegerpay-http`.
//!
//! # Modules
//!
//! - [`api_key`] - Secret key validation and test/live mode detection
//! - [`error`] - Error types shared by the core and the HTTP client
//! - [`provider`] - Payment rails and transaction-id based auto-detection
//! - [`proto`] - Wire format types for every API area
//! - [`webhook`] - HMAC-SHA256 webhook signatures and event parsing
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod api_key;
pub mod error;
pub mod proto;
pub mod provider;
pub mod webhook;

pub use api_key::{ApiKey, Mode};
pub use error::{ApiKeyError, ParseProviderError, RequestError, WebhookError};
pub use provider::Provider;
pub use proto::{VerificationResult, VerifyRequest};
