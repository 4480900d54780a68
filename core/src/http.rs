//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe a Torn API round trip as plain data. The core crate
//! builds `HttpRequest` values and normalizes `HttpResponse` values without
//! touching the network; a [`Transport`](crate::transport::Transport)
//! implementation executes the actual GET in between.
//!
//! Every Torn API call is a GET with all parameters in the URL, so a request
//! carries no method or body.

/// A GET request described as plain data.
///
/// Built by `TornClient::build_v1` / `TornClient::build_v2`. The URL embeds the
/// access key, so it must not be logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Produced by a transport, then passed to the normalizer. Non-2xx responses
/// are data too; the normalizer decides what they mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// A 200 response with a body and no headers. Handy for stubs and tests.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
