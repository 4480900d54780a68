//! The endpoint surface: one namespace per route, one async method per
//! selection.
//!
//! # Design
//! [`TornApi`] owns the configuration and the transport and builds every
//! namespace up front. Changing the key or the comment rebuilds all of them,
//! so a namespace never holds stale credentials and there is nothing lazy to
//! check. Calls already in flight keep the client they started with.
//!
//! Every method returns [`ApiResult`]: domain errors, transport failures and
//! unusable bodies all come back as a [`TornApiError`]. Selections the library
//! does not implement panic instead.
//!
//! [`TornApiError`]: crate::error::TornApiError

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::client::TornClient;
use crate::config::ClientConfig;
use crate::endpoints::Endpoint;
use crate::error::ApiResult;
use crate::normalize::normalize_outcome;
use crate::query::QueryParams;
use crate::transport::Transport;

mod company;
mod faction;
mod forum;
mod key;
mod market;
mod property;
mod racing;
mod torn;
mod user;

pub use company::CompanyApi;
pub use faction::FactionApi;
pub use forum::ForumApi;
pub use key::KeyApi;
pub use market::MarketApi;
pub use property::PropertyApi;
pub use racing::RacingApi;
pub use torn::TornRouteApi;
pub use user::UserApi;

#[cfg(feature = "reqwest")]
use crate::transport::ReqwestTransport;

/// Entry point: all route namespaces sharing one key and one transport.
pub struct TornApi<T> {
    config: ClientConfig,
    transport: Arc<T>,
    torn: TornRouteApi<T>,
    user: UserApi<T>,
    faction: FactionApi<T>,
    company: CompanyApi<T>,
    market: MarketApi<T>,
    property: PropertyApi<T>,
    racing: RacingApi<T>,
    forum: ForumApi<T>,
    key: KeyApi<T>,
}

#[cfg(feature = "reqwest")]
impl TornApi<ReqwestTransport> {
    /// A client for the production API using `reqwest`.
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_config(ClientConfig::new(key))
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> TornApi<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self::assemble(config, Arc::new(transport))
    }

    /// Replace the access key. Namespaces are rebuilt only when it changes.
    pub fn set_key(&mut self, key: impl Into<String>) {
        let key = key.into();
        if key != self.config.key {
            self.config.key = key;
            self.rebuild();
        }
    }

    /// Replace the comment tag; an empty string clears it.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        let config = self.config.clone().with_comment(comment);
        if config.comment != self.config.comment {
            self.config = config;
            self.rebuild();
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn torn(&self) -> &TornRouteApi<T> {
        &self.torn
    }

    pub fn user(&self) -> &UserApi<T> {
        &self.user
    }

    pub fn faction(&self) -> &FactionApi<T> {
        &self.faction
    }

    pub fn company(&self) -> &CompanyApi<T> {
        &self.company
    }

    pub fn market(&self) -> &MarketApi<T> {
        &self.market
    }

    pub fn property(&self) -> &PropertyApi<T> {
        &self.property
    }

    pub fn racing(&self) -> &RacingApi<T> {
        &self.racing
    }

    pub fn forum(&self) -> &ForumApi<T> {
        &self.forum
    }

    pub fn key(&self) -> &KeyApi<T> {
        &self.key
    }

    fn rebuild(&mut self) {
        tracing::debug!("torn api credentials changed, rebuilding namespaces");
        *self = Self::assemble(self.config.clone(), Arc::clone(&self.transport));
    }

    fn assemble(config: ClientConfig, transport: Arc<T>) -> Self {
        let caller = Caller::new(&config, &transport);
        Self {
            torn: TornRouteApi::new(caller.clone()),
            user: UserApi::new(caller.clone()),
            faction: FactionApi::new(caller.clone()),
            company: CompanyApi::new(caller.clone()),
            market: MarketApi::new(caller.clone()),
            property: PropertyApi::new(caller.clone()),
            racing: RacingApi::new(caller.clone()),
            forum: ForumApi::new(caller.clone()),
            key: KeyApi::new(caller),
            config,
            transport,
        }
    }
}

/// What every namespace holds: a request builder and the shared transport.
pub(crate) struct Caller<T> {
    client: TornClient,
    transport: Arc<T>,
}

impl<T> Clone for Caller<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> Caller<T> {
    fn new(config: &ClientConfig, transport: &Arc<T>) -> Self {
        Self {
            client: TornClient::new(config),
            transport: Arc::clone(transport),
        }
    }

    /// Call an endpoint that takes no parameters.
    pub(crate) async fn get<R: DeserializeOwned>(&self, endpoint: &Endpoint) -> ApiResult<R> {
        self.call(endpoint, endpoint.params()).await
    }

    pub(crate) async fn call<R: DeserializeOwned>(&self, endpoint: &Endpoint, params: QueryParams) -> ApiResult<R> {
        let request = self.client.build(endpoint, &params);
        let outcome = self.transport.get(&request).await;
        normalize_outcome(outcome, &endpoint.directive(&params))
    }

    /// Several selections of one route in a single request, returned as the
    /// raw envelope.
    pub(crate) async fn multi(
        &self,
        endpoint: &Endpoint,
        selections: &[&str],
        id: Option<&str>,
    ) -> ApiResult<Map<String, Value>> {
        let params = QueryParams::multi(endpoint.route, selections).with_id(id);
        self.call(endpoint, params).await
    }
}

/// Selections the API offers but this library does not support.
pub(crate) fn not_implemented(route: &str, selection: &str) -> ! {
    tracing::error!(route, selection, "torn api selection is not implemented");
    panic!("Method not implemented.");
}
