//! Typed async client core for the Torn REST API.
//!
//! # Overview
//! One method per API selection, grouped by route namespace on [`TornApi`].
//! Every call builds a URL, hands it to a [`Transport`] for the GET and
//! normalizes the JSON that comes back into a typed [`ApiResult`]. The Torn
//! API encodes lists inconsistently (arrays, objects keyed by id, objects of
//! scalars) and returns errors with the same outer shape as successes; the
//! normalizer turns all of that into one predictable contract.
//!
//! # Design
//! - `TornClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern). The only I/O
//!   happens behind the `Transport` trait; `ReqwestTransport` is the default.
//! - Endpoints are rows of a table (`endpoints`) naming route, selection, URL
//!   scheme and normalization mode. Endpoint-specific reshaping lives in
//!   `reshape` as plain functions.
//! - Domain errors, transport failures and unusable bodies are all returned as
//!   `TornApiError`. Only unimplemented selections panic.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch drift against the shared fixtures.
//!
//! ```no_run
//! # async fn run() -> torn_core::ApiResult<()> {
//! let api = torn_core::TornApi::new("my-api-key");
//! let items = api.torn().items().await?;
//! println!("{} items", items.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod normalize;
pub mod query;
pub mod reshape;
pub mod transport;
pub mod types;

pub use api::TornApi;
pub use client::TornClient;
pub use config::ClientConfig;
pub use error::{ApiResult, ConfigError, TornApiError, TransportError};
pub use http::{HttpRequest, HttpResponse};
pub use normalize::is_error_envelope;
pub use query::{ApiVersion, QueryParams, Sort};
pub use transport::Transport;
#[cfg(feature = "reqwest")]
pub use transport::ReqwestTransport;
