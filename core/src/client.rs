//! Stateless request builder and response parser for the Torn API.
//!
//! # Design
//! `TornClient` holds the base URL, the access key and the optional comment
//! tag, and carries no mutable state between calls. Each call is split into a
//! `build_*` step that produces an `HttpRequest` and a `parse` step that
//! consumes an `HttpResponse`. The caller (usually a [`Transport`]) executes
//! the round trip in between, keeping the core deterministic and free of I/O.
//!
//! [`Transport`]: crate::transport::Transport

use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::config::ClientConfig;
use crate::endpoints::Endpoint;
use crate::error::ApiResult;
use crate::http::{HttpRequest, HttpResponse};
use crate::normalize::normalize;
use crate::query::{ApiVersion, QueryParams};

/// Request builder bound to one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TornClient {
    base_url: String,
    key: String,
    comment: Option<String>,
}

impl TornClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            key: config.key.clone(),
            comment: config.comment.clone(),
        }
    }

    /// Build the request for an endpoint using the scheme it is bound to.
    pub fn build(&self, endpoint: &Endpoint, params: &QueryParams) -> HttpRequest {
        tracing::debug!(
            route = %params.route,
            selection = %params.selection,
            version = %endpoint.version,
            "building torn api request"
        );
        match endpoint.version {
            ApiVersion::V1 => self.build_v1(params),
            ApiVersion::V2 => self.build_v2(params),
        }
    }

    /// `{base}/{route}/{id}?selections=..&key=..[&filters][&comment=..]`
    pub fn build_v1(&self, params: &QueryParams) -> HttpRequest {
        let id: String = params
            .id
            .as_deref()
            .map(|id| form_urlencoded::byte_serialize(id.as_bytes()).collect())
            .unwrap_or_default();
        let query = self.query_string(params, &[]);
        request(format!("{}/{}/{id}?{query}", self.base_url, params.route))
    }

    /// `{base}/v2/{route}/?selections=..&key=..[&id=..]*[&filters][&comment=..]`
    pub fn build_v2(&self, params: &QueryParams) -> HttpRequest {
        let ids: Vec<&str> = params
            .id
            .iter()
            .chain(params.ids.iter())
            .map(String::as_str)
            .collect();
        let query = self.query_string(params, &ids);
        request(format!("{}/v2/{}/?{query}", self.base_url, params.route))
    }

    /// Normalize a response for an endpoint.
    pub fn parse<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        params: &QueryParams,
        response: &HttpResponse,
    ) -> ApiResult<T> {
        normalize(response, &endpoint.directive(params))
    }

    fn query_string(&self, params: &QueryParams, ids: &[&str]) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("selections", &params.selection);
        query.append_pair("key", &self.key);
        for id in ids {
            query.append_pair("id", id);
        }
        for (name, value) in params.filters() {
            query.append_pair(name, &value);
        }
        if let Some(comment) = &self.comment {
            query.append_pair("comment", comment);
        }
        query.finish()
    }
}

fn request(url: String) -> HttpRequest {
    HttpRequest {
        url,
        headers: vec![("accept".to_string(), "application/json".to_string())],
    }
}
