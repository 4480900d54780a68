//! Error types for the Torn API client.
//!
//! # Design
//! `TornApiError` is the one error every endpoint returns. It carries the
//! remote service's numeric code and message verbatim, or the fixed fallback
//! (`code: 0`) when no better information exists. Transport and configuration
//! problems have their own types, but transport errors never reach callers:
//! the normalizer collapses them into the fallback.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message used when a call fails without a domain error to report.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Result of every endpoint call: the typed payload or a structured error.
pub type ApiResult<T> = Result<T, TornApiError>;

/// A structured error as the Torn API reports it: `{"code": 2, "error": "Incorrect key"}`.
///
/// `code` 0 is a legitimate value (the API's own "unknown error"), and it is
/// also the code of the library's fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{error} (code {code})")]
pub struct TornApiError {
    pub code: i64,
    pub error: String,
}

impl TornApiError {
    pub fn new(code: i64, error: impl Into<String>) -> Self {
        Self {
            code,
            error: error.into(),
        }
    }

    /// The fallback returned for transport failures, unparseable bodies and
    /// payloads that do not match the endpoint's type.
    pub fn unknown() -> Self {
        Self::new(0, UNKNOWN_ERROR_MESSAGE)
    }
}

/// Failure reported by a [`Transport`](crate::transport::Transport) before any
/// response body was obtained.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    Request(String),

    /// A response arrived but its body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Invalid or missing client configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("base url must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
}
