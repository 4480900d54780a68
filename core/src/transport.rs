//! The HTTP GET collaborator.
//!
//! The core never performs I/O itself: a [`Transport`] takes a built
//! [`HttpRequest`] and hands back whatever the server answered, status and
//! body included. Non-2xx answers are returned as data, only failures to get
//! an answer at all are [`TransportError`]s. Timeouts, pooling and proxies are
//! the transport's business.

use std::future::Future;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

pub trait Transport: Send + Sync + 'static {
    fn get(&self, request: &HttpRequest) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}

#[cfg(feature = "reqwest")]
pub use reqwest_transport::ReqwestTransport;

#[cfg(feature = "reqwest")]
mod reqwest_transport {
    use super::*;

    /// [`Transport`] backed by a `reqwest::Client`.
    #[derive(Debug, Clone, Default)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new() -> Self {
            Self::default()
        }

        /// Use a preconfigured client, e.g. one with a timeout.
        pub fn with_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    impl Transport for ReqwestTransport {
        async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
            let mut builder = self.client.get(&request.url);
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            // The URL carries the key; keep it out of error messages.
            let response = builder
                .send()
                .await
                .map_err(|e| TransportError::Request(e.without_url().to_string()))?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (name.to_string(), value.to_string()))
                })
                .collect();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError::Body(e.without_url().to_string()))?;

            Ok(HttpResponse { status, headers, body })
        }
    }
}
