//! `faction` route. Most selections describe the key owner's faction; the
//! ones taking an `id` can look at any faction.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{not_implemented, Caller};
use crate::endpoints::{faction as ep, Endpoint};
use crate::error::ApiResult;
use crate::transport::Transport;
use crate::types::faction::*;
use crate::types::News;

pub struct FactionApi<T> {
    caller: Caller<T>,
}

impl<T: Transport> FactionApi<T> {
    pub(crate) fn new(caller: Caller<T>) -> Self {
        Self { caller }
    }

    pub async fn multi(&self, selections: &[&str], id: Option<&str>) -> ApiResult<Map<String, Value>> {
        self.caller.multi(&ep::MULTI, selections, id).await
    }

    /// Faction profile with members, treaties and the current ranked war.
    pub async fn basic(&self, id: Option<&str>) -> ApiResult<Faction> {
        let params = ep::BASIC.params().with_id(id);
        self.caller.call(&ep::BASIC, params).await
    }

    /// Same request as [`basic`](Self::basic).
    pub async fn faction(&self, id: Option<&str>) -> ApiResult<Faction> {
        self.basic(id).await
    }

    pub async fn applications(&self) -> ApiResult<Vec<Application>> {
        self.caller.get(&ep::APPLICATIONS).await
    }

    pub async fn armor(&self) -> ApiResult<Vec<ArmoryItem>> {
        self.caller.get(&ep::ARMOR).await
    }

    pub async fn armorynews(&self, from: Option<i64>, to: Option<i64>) -> ApiResult<Vec<News>> {
        self.ranged(&ep::ARMORY_NEWS, from, to).await
    }

    pub async fn attacknews(&self, from: Option<i64>, to: Option<i64>) -> ApiResult<Vec<News>> {
        self.ranged(&ep::ATTACK_NEWS, from, to).await
    }

    pub async fn attacks(&self, from: Option<i64>, to: Option<i64>) -> ApiResult<Vec<Attack>> {
        self.ranged(&ep::ATTACKS, from, to).await
    }

    pub async fn attacksfull(&self, from: Option<i64>, to: Option<i64>) -> ApiResult<Vec<Attack>> {
        self.ranged(&ep::ATTACKS_FULL, from, to).await
    }

    pub async fn boosters(&self) -> ApiResult<Vec<ArmoryItem>> {
        self.caller.get(&ep::BOOSTERS).await
    }

    pub fn cesium(&self) -> ! {
        not_implemented("faction", "cesium")
    }

    pub async fn chain(&self, id: Option<&str>) -> ApiResult<Chain> {
        let params = ep::CHAIN.params().with_id(id);
        self.caller.call(&ep::CHAIN, params).await
    }

    /// Report of the faction's most recent chain.
    pub async fn chainreport(&self) -> ApiResult<ChainReport> {
        self.caller.get(&ep::CHAIN_REPORT).await
    }

    pub async fn chains(&self) -> ApiResult<Vec<CompletedChain>> {
        self.caller.get(&ep::CHAINS).await
    }

    pub fn contributors(&self) -> ! {
        not_implemented("faction", "contributors")
    }

    /// Ids of the organised crimes the faction has experience with.
    pub async fn crimeexp(&self) -> ApiResult<Vec<i64>> {
        self.caller.get(&ep::CRIME_EXP).await
    }

    pub async fn crimenews(&self, from: Option<i64>, to: Option<i64>) -> ApiResult<Vec<News>> {
        self.ranged(&ep::CRIME_NEWS, from, to).await
    }

    pub async fn crimes(&self, from: Option<i64>, to: Option<i64>) -> ApiResult<Vec<Crime>> {
        self.ranged(&ep::CRIMES, from, to).await
    }

    pub async fn currency(&self) -> ApiResult<Currency> {
        self.caller.get(&ep::CURRENCY).await
    }

    pub async fn donations(&self) -> ApiResult<Vec<Donation>> {
        self.caller.get(&ep::DONATIONS).await
    }

    pub async fn drugs(&self) -> ApiResult<Vec<ArmoryItem>> {
        self.caller.get(&ep::DRUGS).await
    }

    pub async fn fundsnews(&self, from: Option<i64>, to: Option<i64>) -> ApiResult<Vec<News>> {
        self.ranged(&ep::FUNDS_NEWS, from, to).await
    }

    pub async fn mainnews(&self, from: Option<i64>, to: Option<i64>) -> ApiResult<Vec<News>> {
        self.ranged(&ep::MAIN_NEWS, from, to).await
    }

    pub async fn medical(&self) -> ApiResult<Vec<ArmoryItem>> {
        self.caller.get(&ep::MEDICAL).await
    }

    pub async fn membershipnews(&self, from: Option<i64>, to: Option<i64>) -> ApiResult<Vec<News>> {
        self.ranged(&ep::MEMBERSHIP_NEWS, from, to).await
    }

    pub async fn positions(&self) -> ApiResult<Vec<Position>> {
        self.caller.get(&ep::POSITIONS).await
    }

    pub async fn rankedwars(&self, id: Option<&str>) -> ApiResult<Vec<RankedWar>> {
        let params = ep::RANKED_WARS.params().with_id(id);
        self.caller.call(&ep::RANKED_WARS, params).await
    }

    pub async fn reports(&self) -> ApiResult<Vec<FactionReport>> {
        self.caller.get(&ep::REPORTS).await
    }

    pub async fn revives(&self) -> ApiResult<Vec<Revive>> {
        self.caller.get(&ep::REVIVES).await
    }

    pub async fn revivesfull(&self) -> ApiResult<Vec<Revive>> {
        self.caller.get(&ep::REVIVES_FULL).await
    }

    pub async fn stats(&self) -> ApiResult<FactionStats> {
        self.caller.get(&ep::STATS).await
    }

    pub async fn temporary(&self) -> ApiResult<Vec<ArmoryItem>> {
        self.caller.get(&ep::TEMPORARY).await
    }

    pub async fn territory(&self, id: Option<&str>) -> ApiResult<Vec<Territory>> {
        let params = ep::TERRITORY.params().with_id(id);
        self.caller.call(&ep::TERRITORY, params).await
    }

    pub async fn territorynews(&self, from: Option<i64>, to: Option<i64>) -> ApiResult<Vec<News>> {
        self.ranged(&ep::TERRITORY_NEWS, from, to).await
    }

    pub async fn upgrades(&self) -> ApiResult<Vec<Upgrade>> {
        self.caller.get(&ep::UPGRADES).await
    }

    pub async fn weapons(&self) -> ApiResult<Vec<ArmoryItem>> {
        self.caller.get(&ep::WEAPONS).await
    }

    async fn ranged<R: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        from: Option<i64>,
        to: Option<i64>,
    ) -> ApiResult<R> {
        let params = endpoint.params().with_range(from, to);
        self.caller.call(endpoint, params).await
    }
}
