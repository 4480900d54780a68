//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the public API over
//! real HTTP with `ReqwestTransport`. Validates that URL building, transport
//! and normalization agree with the server and with the shared fixtures, and
//! that every failure mode still ends in a `TornApiError`.

use std::net::SocketAddr;

use torn_core::query::Sort;
use torn_core::{ClientConfig, ReqwestTransport, TornApi, TornApiError};

/// Run the mock server on its own thread and runtime, return its address.
fn start_mock_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, mock_server::DEFAULT_KEY).await
        })
        .unwrap();
    });

    addr
}

fn api_at(addr: SocketAddr, key: &str) -> TornApi<ReqwestTransport> {
    let config = ClientConfig::new(key)
        .with_base_url(&format!("http://{addr}"))
        .unwrap();
    TornApi::with_transport(config, ReqwestTransport::new())
}

#[tokio::test]
async fn every_route_round_trips() {
    let api = api_at(start_mock_server(), mock_server::DEFAULT_KEY);

    let items = api.torn().items().await.unwrap();
    assert_eq!(items[0].id, "1");
    assert_eq!(items[0].name, "Hammer");

    let user = api.user().basic(None).await.unwrap();
    assert_eq!(user.player_id, 2127617);
    assert_eq!(user.status.state, "Okay");

    let faction = api.faction().basic(Some("44")).await.unwrap();
    assert_eq!(faction.id, 44);
    assert_eq!(faction.members[1].name, "LanCel0t");
    assert_eq!(faction.peace[0].faction_id, 8795);

    let listings = api.market().all("206").await.unwrap();
    assert_eq!(listings.len(), 3);
    assert_eq!(listings[0].quantity, 3);

    let property = api.property().property(Some("123")).await.unwrap();
    assert_eq!(property.property, "Private Island");

    let races = api
        .racing()
        .races(Some(5), None, None, Some(Sort::Desc), None)
        .await
        .unwrap();
    assert_eq!(races[0].id, 14650821);

    let threads = api.forum().threads(&[1, 2], None, None, None, None).await.unwrap();
    assert_eq!(threads[0].title, "Welcome");

    let info = api.key().info().await.unwrap();
    assert_eq!(info.access_level, 3);
}

#[tokio::test]
async fn multi_selection_merges_envelopes() {
    let api = api_at(start_mock_server(), mock_server::DEFAULT_KEY);

    let body = api.faction().multi(&["armor", "weapons"], None).await.unwrap();
    let keys: Vec<&str> = body.keys().map(String::as_str).collect();
    assert_eq!(keys, ["armor", "weapons"]);
}

#[tokio::test]
async fn wrong_key_is_a_domain_error() {
    let api = api_at(start_mock_server(), "wrong");

    let err = api.torn().items().await.unwrap_err();
    assert_eq!(err, TornApiError::new(2, "Incorrect key"));
}

#[tokio::test]
async fn set_key_recovers_from_a_wrong_key() {
    let mut api = api_at(start_mock_server(), "wrong");
    assert_eq!(api.torn().timestamp().await.unwrap_err().code, 2);

    api.set_key(mock_server::DEFAULT_KEY);
    api.set_comment("integration");
    assert_eq!(api.torn().timestamp().await.unwrap(), 1_700_000_000);
}

#[tokio::test]
async fn unknown_selection_is_a_domain_error() {
    let api = api_at(start_mock_server(), mock_server::DEFAULT_KEY);

    let err = api.torn().multi(&["nonsense"], None).await.unwrap_err();
    assert_eq!(err, TornApiError::new(4, "Wrong fields"));
}

#[tokio::test]
async fn outage_falls_back_to_the_unknown_error() {
    let api = api_at(start_mock_server(), mock_server::DEFAULT_KEY);

    let err = api
        .torn()
        .multi(&[mock_server::OUTAGE_SELECTION], None)
        .await
        .unwrap_err();
    assert_eq!(err, TornApiError::unknown());
}

#[tokio::test]
async fn unreachable_host_falls_back_to_the_unknown_error() {
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let api = api_at(addr, mock_server::DEFAULT_KEY);

    assert_eq!(api.torn().items().await.unwrap_err(), TornApiError::unknown());
    assert_eq!(api.user().bars().await.unwrap_err(), TornApiError::unknown());
}
