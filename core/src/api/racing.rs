//! `racing` route, served from the v2 scheme.

use super::Caller;
use crate::endpoints::racing as ep;
use crate::error::ApiResult;
use crate::query::{QueryParams, Sort};
use crate::transport::Transport;
use crate::types::racing::*;

pub struct RacingApi<T> {
    caller: Caller<T>,
}

impl<T: Transport> RacingApi<T> {
    pub(crate) fn new(caller: Caller<T>) -> Self {
        Self { caller }
    }

    pub async fn cars(&self) -> ApiResult<Vec<RaceCar>> {
        self.caller.get(&ep::CARS).await
    }

    pub async fn carupgrades(&self) -> ApiResult<Vec<RaceCarUpgrade>> {
        self.caller.get(&ep::CAR_UPGRADES).await
    }

    /// Races, newest or oldest first, optionally limited to a time range and
    /// a category.
    pub async fn races(
        &self,
        limit: Option<u32>,
        from: Option<i64>,
        to: Option<i64>,
        sort: Option<Sort>,
        cat: Option<RaceCategory>,
    ) -> ApiResult<Vec<Race>> {
        let params = QueryParams {
            limit,
            sort,
            cat: cat.map(|cat| cat.to_string()),
            ..ep::RACES.params().with_range(from, to)
        };
        self.caller.call(&ep::RACES, params).await
    }

    pub async fn race(&self, id: i64) -> ApiResult<Race> {
        let params = ep::RACE.params().with_id(Some(id));
        self.caller.call(&ep::RACE, params).await
    }

    /// Lap records on a track for one car class.
    pub async fn records(&self, track: i64, class: RaceClass) -> ApiResult<Vec<RaceRecord>> {
        let params = QueryParams {
            cat: Some(class.to_string()),
            ..ep::RECORDS.params().with_id(Some(track))
        };
        self.caller.call(&ep::RECORDS, params).await
    }

    pub async fn tracks(&self) -> ApiResult<Vec<RaceTrack>> {
        self.caller.get(&ep::TRACKS).await
    }

    /// The selections the racing route offers.
    pub async fn lookup(&self) -> ApiResult<Vec<String>> {
        self.caller.get(&ep::LOOKUP).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TornApiError;
    use crate::transport::stub::{api, StubTransport};

    #[tokio::test]
    async fn races_send_filters_on_the_v2_scheme() {
        let api = api(StubTransport::fixture("racing/races"));
        let races = api
            .racing()
            .races(Some(10), Some(1), Some(2), Some(Sort::Asc), Some(RaceCategory::Official))
            .await
            .unwrap();
        assert_eq!(races[0].id, 14650821);
        assert_eq!(races[0].schedule.unwrap().end, None);
        assert_eq!(
            api.transport().last_url(),
            "https://api.torn.com/v2/racing/?selections=races&key=key&from=1&to=2&limit=10&sort=ASC&cat=official"
        );
    }

    #[tokio::test]
    async fn records_send_track_and_class() {
        let api = api(StubTransport::fixture("racing/records"));
        let records = api.racing().records(7, RaceClass::A).await.unwrap();
        assert_eq!(records[0].driver_name, "Lugburz");
        assert_eq!(
            api.transport().last_url(),
            "https://api.torn.com/v2/racing/?selections=records&key=key&id=7&cat=A"
        );
    }

    #[tokio::test]
    async fn lookup_reads_the_selections_key() {
        let api = api(StubTransport::fixture("racing/lookup"));
        let selections = api.racing().lookup().await.unwrap();
        assert!(selections.contains(&"cars".to_string()));
    }

    #[tokio::test]
    async fn every_method_returns_domain_errors() {
        let api = api(StubTransport::json(r#"{"error":{"code":9,"error":"API disabled"}}"#));
        let racing = api.racing();
        let expected = TornApiError::new(9, "API disabled");

        assert_eq!(racing.cars().await.unwrap_err(), expected);
        assert_eq!(racing.carupgrades().await.unwrap_err(), expected);
        assert_eq!(racing.races(None, None, None, None, None).await.unwrap_err(), expected);
        assert_eq!(racing.race(1).await.unwrap_err(), expected);
        assert_eq!(racing.records(1, RaceClass::E).await.unwrap_err(), expected);
        assert_eq!(racing.tracks().await.unwrap_err(), expected);
        assert_eq!(racing.lookup().await.unwrap_err(), expected);
    }
}
