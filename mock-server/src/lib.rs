//! A stand-in for the Torn API, serving canned responses.
//!
//! Responses come from `test-vectors/responses.json`, keyed `route/selection`.
//! A multi-selection request gets the merged envelopes of every selection it
//! names, the way the real API answers. The server also reproduces the
//! failure modes the client has to cope with:
//!
//! - a wrong `key` yields error 2 with status 200,
//! - a selection without a fixture yields error 4,
//! - the `outage` selection yields an empty 503.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

/// Key the server accepts unless told otherwise.
pub const DEFAULT_KEY: &str = "key";

/// Selection that simulates an upstream outage.
pub const OUTAGE_SELECTION: &str = "outage";

const RESPONSES: &str = include_str!("../../test-vectors/responses.json");

/// The fixtures compiled into the server.
pub fn fixtures() -> Result<Map<String, Value>, serde_json::Error> {
    serde_json::from_str(RESPONSES)
}

#[derive(Clone)]
struct MockState {
    key: Arc<str>,
    fixtures: Arc<Map<String, Value>>,
}

/// Query parameters the server looks at. Filters and v2 `id` parameters are
/// accepted and ignored.
#[derive(Debug, Default, Deserialize)]
pub struct TornQuery {
    pub selections: Option<String>,
    pub key: Option<String>,
    pub comment: Option<String>,
}

pub fn app() -> Result<Router, serde_json::Error> {
    app_with_key(DEFAULT_KEY)
}

pub fn app_with_key(key: &str) -> Result<Router, serde_json::Error> {
    Ok(router(key, fixtures()?))
}

/// Build the router over an explicit fixture set.
pub fn router(key: &str, fixtures: Map<String, Value>) -> Router {
    let state = MockState {
        key: Arc::from(key),
        fixtures: Arc::new(fixtures),
    };
    Router::new()
        .route("/{route}/", get(v1))
        .route("/{route}/{id}", get(v1_with_id))
        .route("/v2/{route}/", get(v2))
        .with_state(state)
}

pub async fn run(listener: TcpListener, key: &str) -> Result<(), std::io::Error> {
    let app = app_with_key(key).map_err(std::io::Error::other)?;
    axum::serve(listener, app).await
}

async fn v1(State(state): State<MockState>, Path(route): Path<String>, Query(query): Query<TornQuery>) -> Response {
    respond(&state, &route, &query)
}

async fn v1_with_id(
    State(state): State<MockState>,
    Path((route, id)): Path<(String, String)>,
    Query(query): Query<TornQuery>,
) -> Response {
    tracing::debug!(%route, %id, "v1 request with id");
    respond(&state, &route, &query)
}

async fn v2(State(state): State<MockState>, Path(route): Path<String>, Query(query): Query<TornQuery>) -> Response {
    tracing::debug!(%route, "v2 request");
    respond(&state, &route, &query)
}

fn respond(state: &MockState, route: &str, query: &TornQuery) -> Response {
    let selections = query.selections.as_deref().unwrap_or_default();
    tracing::info!(%route, %selections, comment = ?query.comment, "torn request");

    if query.key.as_deref() != Some(&*state.key) {
        return Json(error(2, "Incorrect key")).into_response();
    }

    let mut merged = Map::new();
    for selection in selections.split(',') {
        if selection == OUTAGE_SELECTION {
            return StatusCode::SERVICE_UNAVAILABLE.into_response();
        }
        match state.fixtures.get(&format!("{route}/{selection}")) {
            Some(Value::Object(envelope)) => merged.extend(envelope.clone()),
            Some(_) | None => return Json(error(4, "Wrong fields")).into_response(),
        }
    }
    Json(Value::Object(merged)).into_response()
}

fn error(code: i64, message: &str) -> Value {
    json!({ "error": { "code": code, "error": message } })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> MockState {
        let fixtures = json!({
            "faction/armor": { "armor": [{ "ID": 1 }] },
            "faction/weapons": { "weapons": [] },
            "user/": { "player_id": 1 },
            "torn/broken": 5,
        });
        let Value::Object(fixtures) = fixtures else { unreachable!() };
        MockState {
            key: Arc::from("key"),
            fixtures: Arc::new(fixtures),
        }
    }

    fn query(selections: &str, key: &str) -> TornQuery {
        TornQuery {
            selections: Some(selections.to_string()),
            key: Some(key.to_string()),
            comment: None,
        }
    }

    #[test]
    fn embedded_fixtures_parse() {
        let fixtures = fixtures().unwrap();
        assert!(fixtures.contains_key("torn/items"));
        assert!(fixtures.values().all(Value::is_object));
    }

    #[test]
    fn error_has_the_api_shape() {
        assert_eq!(
            error(2, "Incorrect key"),
            json!({ "error": { "code": 2, "error": "Incorrect key" } })
        );
    }

    #[test]
    fn wrong_key_is_rejected_with_status_200() {
        let response = respond(&state(), "user", &query("", "nope"));
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn missing_key_is_rejected() {
        let response = respond(&state(), "user", &TornQuery::default());
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn outage_selection_is_a_503() {
        let response = respond(&state(), "faction", &query("armor,outage", "key"));
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn non_object_fixture_is_treated_as_missing() {
        let response = respond(&state(), "torn", &query("broken", "key"));
        assert_eq!(response.status(), StatusCode::OK);
    }
}
