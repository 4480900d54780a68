//! `torn` route: game-wide reference data.

use serde_json::{Map, Value};

use super::Caller;
use crate::endpoints::torn as ep;
use crate::error::ApiResult;
use crate::transport::Transport;
use crate::types::faction::{ChainReport, RankedWar, Territory};
use crate::types::torn::*;
use crate::types::KeyValue;

pub struct TornRouteApi<T> {
    caller: Caller<T>,
}

impl<T: Transport> TornRouteApi<T> {
    pub(crate) fn new(caller: Caller<T>) -> Self {
        Self { caller }
    }

    /// Several `torn` selections in one request, returned unshaped.
    pub async fn multi(&self, selections: &[&str], id: Option<&str>) -> ApiResult<Map<String, Value>> {
        self.caller.multi(&ep::MULTI, selections, id).await
    }

    pub async fn bank(&self) -> ApiResult<Bank> {
        self.caller.get(&ep::BANK).await
    }

    pub async fn cards(&self) -> ApiResult<Vec<Card>> {
        self.caller.get(&ep::CARDS).await
    }

    pub async fn chainreport(&self, id: i64) -> ApiResult<ChainReport> {
        let params = ep::CHAIN_REPORT.params().with_id(Some(id));
        self.caller.call(&ep::CHAIN_REPORT, params).await
    }

    pub async fn cityshops(&self) -> ApiResult<Vec<CityShop>> {
        self.caller.get(&ep::CITY_SHOPS).await
    }

    /// Company types, with their positions, specials and stock.
    pub async fn companies(&self) -> ApiResult<Vec<CompanyType>> {
        self.caller.get(&ep::COMPANIES).await
    }

    pub async fn education(&self) -> ApiResult<Vec<Education>> {
        self.caller.get(&ep::EDUCATION).await
    }

    pub async fn factiontree(&self) -> ApiResult<Vec<FactionTreeBranch>> {
        self.caller.get(&ep::FACTION_TREE).await
    }

    pub async fn gyms(&self) -> ApiResult<Vec<Gym>> {
        self.caller.get(&ep::GYMS).await
    }

    /// All honors, or only the one with the given id.
    pub async fn honors(&self, id: Option<&str>) -> ApiResult<Vec<Honor>> {
        let params = ep::HONORS.params().with_id(id);
        self.caller.call(&ep::HONORS, params).await
    }

    pub async fn items(&self) -> ApiResult<Vec<Item>> {
        self.caller.get(&ep::ITEMS).await
    }

    /// Details of one unique item instance.
    pub async fn itemdetails(&self, uid: i64) -> ApiResult<ItemDetails> {
        let params = ep::ITEM_DETAILS.params().with_id(Some(uid));
        self.caller.call(&ep::ITEM_DETAILS, params).await
    }

    pub async fn logcategories(&self) -> ApiResult<Vec<KeyValue>> {
        self.caller.get(&ep::LOG_CATEGORIES).await
    }

    pub async fn logtypes(&self) -> ApiResult<Vec<KeyValue>> {
        self.caller.get(&ep::LOG_TYPES).await
    }

    pub async fn medals(&self) -> ApiResult<Vec<Medal>> {
        self.caller.get(&ep::MEDALS).await
    }

    pub async fn organisedcrimes(&self) -> ApiResult<Vec<OrganisedCrime>> {
        self.caller.get(&ep::ORGANISED_CRIMES).await
    }

    pub async fn pawnshop(&self) -> ApiResult<Pawnshop> {
        self.caller.get(&ep::PAWNSHOP).await
    }

    pub async fn pokertables(&self) -> ApiResult<Vec<PokerTable>> {
        self.caller.get(&ep::POKER_TABLES).await
    }

    pub async fn properties(&self) -> ApiResult<Vec<PropertyType>> {
        self.caller.get(&ep::PROPERTIES).await
    }

    pub async fn rackets(&self) -> ApiResult<Vec<Racket>> {
        self.caller.get(&ep::RACKETS).await
    }

    pub async fn raids(&self) -> ApiResult<Vec<Raid>> {
        self.caller.get(&ep::RAIDS).await
    }

    pub async fn rankedwars(&self) -> ApiResult<Vec<RankedWar>> {
        self.caller.get(&ep::RANKED_WARS).await
    }

    pub async fn rankedwarreport(&self, id: i64) -> ApiResult<RankedWarReport> {
        let params = ep::RANKED_WAR_REPORT.params().with_id(Some(id));
        self.caller.call(&ep::RANKED_WAR_REPORT, params).await
    }

    pub async fn stats(&self) -> ApiResult<TornStats> {
        self.caller.get(&ep::STATS).await
    }

    pub async fn stocks(&self) -> ApiResult<Vec<Stock>> {
        self.caller.get(&ep::STOCKS).await
    }

    /// One stock with its price history.
    pub async fn stock(&self, id: &str) -> ApiResult<StockDetail> {
        let params = ep::STOCK.params().with_id(Some(id));
        self.caller.call(&ep::STOCK, params).await
    }

    /// Server time as a unix timestamp.
    pub async fn timestamp(&self) -> ApiResult<i64> {
        self.caller.get(&ep::TIMESTAMP).await
    }

    /// Details of the given territories (comma separated codes, at most 50).
    pub async fn territory(&self, codes: &str) -> ApiResult<Vec<Territory>> {
        let params = ep::TERRITORY.params().with_id(Some(codes));
        self.caller.call(&ep::TERRITORY, params).await
    }

    /// Details of a single territory.
    pub async fn territory_detail(&self, code: &str) -> ApiResult<Territory> {
        let params = ep::TERRITORY_DETAIL.params().with_id(Some(code));
        self.caller.call(&ep::TERRITORY_DETAIL, params).await
    }

    pub async fn territorynames(&self) -> ApiResult<Vec<String>> {
        self.caller.get(&ep::TERRITORY_NAMES).await
    }

    pub async fn territorywars(&self) -> ApiResult<Vec<TerritoryWar>> {
        self.caller.get(&ep::TERRITORY_WARS).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::TornApiError;
    use crate::http::HttpResponse;
    use crate::transport::stub::{api, StubTransport};

    #[tokio::test]
    async fn bank_passes_the_selection_through() {
        let api = api(StubTransport::fixture("torn/bank"));
        let bank = api.torn().bank().await.unwrap();
        assert_eq!(bank.one_week, 0.6);
        assert_eq!(bank.three_months, 1.8);
        assert_eq!(api.transport().last_url(), "https://api.torn.com/torn/?selections=bank&key=key");
    }

    #[tokio::test]
    async fn items_inject_their_ids() {
        let api = api(StubTransport::fixture("torn/items"));
        let items = api.torn().items().await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[0].name, "Hammer");
        assert_eq!(items[1].id, "206");
    }

    #[tokio::test]
    async fn log_types_are_key_value_pairs() {
        let api = api(StubTransport::fixture("torn/logtypes"));
        let types = api.torn().logtypes().await.unwrap();
        assert_eq!(types[0].key, "85");
        assert_eq!(types[0].value, json!("Item use"));
    }

    #[tokio::test]
    async fn territory_detail_returns_the_requested_code() {
        let api = api(StubTransport::fixture("torn/territory"));
        let territory = api.torn().territory_detail("ABC").await.unwrap();
        assert_eq!(territory.id, "ABC");
        assert_eq!(territory.sector, 7);
        assert_eq!(api.transport().last_url(), "https://api.torn.com/torn/ABC?selections=territory&key=key");
    }

    #[tokio::test]
    async fn territory_detail_for_an_absent_code_is_the_fallback_error() {
        let api = api(StubTransport::fixture("torn/territory"));
        let err = api.torn().territory_detail("ZZZ").await.unwrap_err();
        assert_eq!(err, TornApiError::unknown());
    }

    #[tokio::test]
    async fn stock_picks_one_entry() {
        let api = api(StubTransport::fixture("torn/stocks"));
        let stock = api.torn().stock("1").await.unwrap();
        assert_eq!(stock.id, "1");
        assert_eq!(stock.acronym, "TSB");

        let stocks = api.torn().stocks().await.unwrap();
        assert_eq!(stocks.len(), 2);
    }

    #[tokio::test]
    async fn companies_key_nested_lists_by_name() {
        let api = api(StubTransport::fixture("torn/companies"));
        let companies = api.torn().companies().await.unwrap();
        assert_eq!(companies[0].id, "1");
        assert_eq!(companies[0].positions[0].name, "Hair Stylist");
        assert_eq!(companies[0].stock[0].name, "Hair dye");
    }

    #[tokio::test]
    async fn faction_tree_groups_upgrades() {
        let api = api(StubTransport::fixture("torn/factiontree"));
        let tree = api.torn().factiontree().await.unwrap();
        assert_eq!(tree[0].id, "1");
        assert_eq!(tree[0].branch[0].id, "1");
        assert_eq!(tree[0].branch[0].name, "Weapon Armory I");
    }

    #[tokio::test]
    async fn rankedwarreport_uses_the_singular_key() {
        let api = api(StubTransport::fixture("torn/rankedwarreports"));
        let report = api.torn().rankedwarreport(1234).await.unwrap();
        assert_eq!(report.factions.len(), 2);
        assert_eq!(report.factions[0].rewards.items[0].id, "370");
        assert_eq!(report.members[0].id, "2127617");
        assert_eq!(
            api.transport().last_url(),
            "https://api.torn.com/torn/1234?selections=rankedwarreports&key=key"
        );
    }

    #[tokio::test]
    async fn timestamp_is_a_bare_number() {
        let api = api(StubTransport::fixture("torn/timestamp"));
        assert_eq!(api.torn().timestamp().await.unwrap(), 1_700_000_000);
    }

    #[tokio::test]
    async fn every_method_returns_domain_errors() {
        let api = api(StubTransport::json(r#"{"error":{"code":5,"error":"Too many requests"}}"#));
        let torn = api.torn();
        let expected = TornApiError::new(5, "Too many requests");

        assert_eq!(torn.multi(&["bank", "stats"], None).await.unwrap_err(), expected);
        assert_eq!(torn.bank().await.unwrap_err(), expected);
        assert_eq!(torn.cards().await.unwrap_err(), expected);
        assert_eq!(torn.chainreport(1).await.unwrap_err(), expected);
        assert_eq!(torn.cityshops().await.unwrap_err(), expected);
        assert_eq!(torn.companies().await.unwrap_err(), expected);
        assert_eq!(torn.education().await.unwrap_err(), expected);
        assert_eq!(torn.factiontree().await.unwrap_err(), expected);
        assert_eq!(torn.gyms().await.unwrap_err(), expected);
        assert_eq!(torn.honors(None).await.unwrap_err(), expected);
        assert_eq!(torn.items().await.unwrap_err(), expected);
        assert_eq!(torn.itemdetails(1).await.unwrap_err(), expected);
        assert_eq!(torn.logcategories().await.unwrap_err(), expected);
        assert_eq!(torn.logtypes().await.unwrap_err(), expected);
        assert_eq!(torn.medals().await.unwrap_err(), expected);
        assert_eq!(torn.organisedcrimes().await.unwrap_err(), expected);
        assert_eq!(torn.pawnshop().await.unwrap_err(), expected);
        assert_eq!(torn.pokertables().await.unwrap_err(), expected);
        assert_eq!(torn.properties().await.unwrap_err(), expected);
        assert_eq!(torn.rackets().await.unwrap_err(), expected);
        assert_eq!(torn.raids().await.unwrap_err(), expected);
        assert_eq!(torn.rankedwars().await.unwrap_err(), expected);
        assert_eq!(torn.rankedwarreport(1).await.unwrap_err(), expected);
        assert_eq!(torn.stats().await.unwrap_err(), expected);
        assert_eq!(torn.stocks().await.unwrap_err(), expected);
        assert_eq!(torn.stock("1").await.unwrap_err(), expected);
        assert_eq!(torn.timestamp().await.unwrap_err(), expected);
        assert_eq!(torn.territory("ABC").await.unwrap_err(), expected);
        assert_eq!(torn.territory_detail("ABC").await.unwrap_err(), expected);
        assert_eq!(torn.territorynames().await.unwrap_err(), expected);
        assert_eq!(torn.territorywars().await.unwrap_err(), expected);
    }

    #[tokio::test]
    async fn server_outage_is_the_fallback_error() {
        let outage = HttpResponse {
            status: 503,
            headers: Vec::new(),
            body: String::new(),
        };
        let api = api(StubTransport::respond(outage));
        assert_eq!(api.torn().items().await.unwrap_err(), TornApiError::unknown());
    }
}
