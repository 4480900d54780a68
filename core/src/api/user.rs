//! `user` route: the key owner, or another player by id.

use serde_json::{Map, Value};

use super::{not_implemented, Caller};
use crate::endpoints::user as ep;
use crate::error::ApiResult;
use crate::query::QueryParams;
use crate::transport::Transport;
use crate::types::faction::Attack;
use crate::types::user::*;

pub struct UserApi<T> {
    caller: Caller<T>,
}

impl<T: Transport> UserApi<T> {
    pub(crate) fn new(caller: Caller<T>) -> Self {
        Self { caller }
    }

    pub async fn multi(&self, selections: &[&str], id: Option<&str>) -> ApiResult<Map<String, Value>> {
        self.caller.multi(&ep::MULTI, selections, id).await
    }

    /// Basic profile of the key owner, or of the user with `id`.
    pub async fn basic(&self, id: Option<&str>) -> ApiResult<UserProfile> {
        let params = ep::BASIC.params().with_id(id);
        self.caller.call(&ep::BASIC, params).await
    }

    /// Same request as [`basic`](Self::basic).
    pub async fn profile(&self, id: Option<&str>) -> ApiResult<UserProfile> {
        self.basic(id).await
    }

    pub async fn ammo(&self) -> ApiResult<Vec<Ammo>> {
        self.caller.get(&ep::AMMO).await
    }

    pub async fn attacks(&self, from: Option<i64>, to: Option<i64>) -> ApiResult<Vec<Attack>> {
        let params = ep::ATTACKS.params().with_range(from, to);
        self.caller.call(&ep::ATTACKS, params).await
    }

    /// Like [`attacks`](Self::attacks) without names and modifiers, but with
    /// a longer history.
    pub async fn attacksfull(&self, from: Option<i64>, to: Option<i64>) -> ApiResult<Vec<Attack>> {
        let params = ep::ATTACKS_FULL.params().with_range(from, to);
        self.caller.call(&ep::ATTACKS_FULL, params).await
    }

    pub async fn bars(&self) -> ApiResult<Bars> {
        self.caller.get(&ep::BARS).await
    }

    pub async fn battlestats(&self) -> ApiResult<BattleStats> {
        self.caller.get(&ep::BATTLE_STATS).await
    }

    pub fn bazaar(&self) -> ! {
        not_implemented("user", "bazaar")
    }

    pub async fn cooldowns(&self) -> ApiResult<Cooldowns> {
        self.caller.get(&ep::COOLDOWNS).await
    }

    pub async fn crimes(&self) -> ApiResult<CriminalRecord> {
        self.caller.get(&ep::CRIMES).await
    }

    pub async fn discord(&self) -> ApiResult<Discord> {
        self.caller.get(&ep::DISCORD).await
    }

    pub fn display(&self) -> ! {
        not_implemented("user", "display")
    }

    /// Personal statistics, now or as they were at `timestamp`.
    pub async fn personalstats(&self, timestamp: Option<i64>) -> ApiResult<PersonalStats> {
        let params = QueryParams {
            timestamp,
            ..ep::PERSONAL_STATS.params()
        };
        self.caller.call(&ep::PERSONAL_STATS, params).await
    }

    pub fn reports(&self) -> ! {
        not_implemented("user", "reports")
    }

    pub fn weaponexp(&self) -> ! {
        not_implemented("user", "weaponexp")
    }
}
