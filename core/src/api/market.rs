//! `market` route: listings for one item.

use serde_json::{Map, Value};

use super::Caller;
use crate::endpoints::market as ep;
use crate::error::ApiResult;
use crate::transport::Transport;
use crate::types::market::{MarketItem, PointsListing};

pub struct MarketApi<T> {
    caller: Caller<T>,
}

impl<T: Transport> MarketApi<T> {
    pub(crate) fn new(caller: Caller<T>) -> Self {
        Self { caller }
    }

    pub async fn multi(&self, selections: &[&str], id: Option<&str>) -> ApiResult<Map<String, Value>> {
        self.caller.multi(&ep::MULTI, selections, id).await
    }

    /// Bazaar and item market listings for an item, bazaar first.
    pub async fn all(&self, id: &str) -> ApiResult<Vec<MarketItem>> {
        let params = ep::ALL.params().with_id(Some(id));
        self.caller.call(&ep::ALL, params).await
    }

    pub async fn bazaar(&self, id: &str) -> ApiResult<Vec<MarketItem>> {
        let params = ep::BAZAAR.params().with_id(Some(id));
        self.caller.call(&ep::BAZAAR, params).await
    }

    pub async fn itemmarket(&self, id: &str) -> ApiResult<Vec<MarketItem>> {
        let params = ep::ITEM_MARKET.params().with_id(Some(id));
        self.caller.call(&ep::ITEM_MARKET, params).await
    }

    pub async fn pointsmarket(&self) -> ApiResult<Vec<PointsListing>> {
        self.caller.get(&ep::POINTS_MARKET).await
    }
}

#[cfg(test)]
mod tests {
    use crate::error::TornApiError;
    use crate::transport::stub::{api, StubTransport};

    #[tokio::test]
    async fn all_concatenates_bazaar_and_item_market() {
        let body = r#"{"bazaar":[{"ID":0,"cost":100,"quantity":1}],"itemmarket":[{"ID":0,"cost":110,"quantity":2}]}"#;
        let api = api(StubTransport::json(body));
        let listings = api.market().all("206").await.unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].cost, 100);
        assert_eq!(listings[1].cost, 110);
        assert_eq!(
            api.transport().last_url(),
            "https://api.torn.com/market/206?selections=bazaar%2Citemmarket&key=key"
        );
    }

    #[tokio::test]
    async fn all_tolerates_a_missing_side() {
        let api = api(StubTransport::json(r#"{"bazaar":null,"itemmarket":[{"ID":0,"cost":5,"quantity":1}]}"#));
        let listings = api.market().all("206").await.unwrap();
        assert_eq!(listings.len(), 1);
    }

    #[tokio::test]
    async fn bazaar_passes_through() {
        let api = api(StubTransport::fixture("market/bazaar"));
        let listings = api.market().bazaar("206").await.unwrap();
        assert_eq!(listings[0].quantity, 3);
    }

    #[tokio::test]
    async fn pointsmarket_is_keyed_by_listing() {
        let api = api(StubTransport::fixture("market/pointsmarket"));
        let listings = api.market().pointsmarket().await.unwrap();
        assert_eq!(listings[0].id, "11290632");
        assert_eq!(listings[0].total_cost, 2_285_000);
    }

    #[tokio::test]
    async fn every_method_returns_domain_errors() {
        let api = api(StubTransport::json(r#"{"error":{"code":16,"error":"Access level of this key is not high enough"}}"#));
        let market = api.market();
        let expected = TornApiError::new(16, "Access level of this key is not high enough");

        assert_eq!(market.multi(&["bazaar"], Some("1")).await.unwrap_err(), expected);
        assert_eq!(market.all("1").await.unwrap_err(), expected);
        assert_eq!(market.bazaar("1").await.unwrap_err(), expected);
        assert_eq!(market.itemmarket("1").await.unwrap_err(), expected);
        assert_eq!(market.pointsmarket().await.unwrap_err(), expected);
    }
}
