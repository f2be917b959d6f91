mod common;

use axum::http::StatusCode;
use common::mock_source::MockSource;
use common::{mock_restaurants, mock_restaurants_json};
use restaurant_list::config::SourceConfig;
use restaurant_list::source::{FetchError, Fetcher, RestaurantSource};
use std::time::Duration;

fn http_fetcher(url: String, timeout: Duration) -> Fetcher {
    Fetcher::new(RestaurantSource::Http { url }, timeout).expect("build fetcher")
}

#[tokio::test]
async fn fetches_restaurants_over_http() {
    let server = MockSource::start(StatusCode::OK, mock_restaurants_json(), Duration::ZERO).await;
    let fetcher = http_fetcher(server.url("/restaurants"), Duration::from_secs(5));

    let restaurants = fetcher.fetch().await.expect("fetch");
    assert_eq!(restaurants, mock_restaurants());
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockSource::start(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"error":"boom"}"#.to_string(),
        Duration::ZERO,
    )
    .await;
    let fetcher = http_fetcher(server.url("/restaurants"), Duration::from_secs(5));

    match fetcher.fetch().await {
        Err(FetchError::Status { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server =
        MockSource::start(StatusCode::OK, r#"{"not":"a list"}"#.to_string(), Duration::ZERO).await;
    let fetcher = http_fetcher(server.url("/restaurants"), Duration::from_secs(5));

    let err = fetcher.fetch().await.unwrap_err();
    assert_eq!(err.kind(), "decode");
}

#[tokio::test]
async fn slow_source_times_out() {
    let server = MockSource::start(
        StatusCode::OK,
        mock_restaurants_json(),
        Duration::from_secs(5),
    )
    .await;
    let fetcher = http_fetcher(server.url("/slow"), Duration::from_secs(1));

    match fetcher.fetch().await {
        Err(FetchError::Timeout { seconds }) => assert_eq!(seconds, 1),
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_host_is_a_request_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let fetcher = http_fetcher(format!("http://{}/restaurants", addr), Duration::from_secs(2));

    let err = fetcher.fetch().await.unwrap_err();
    assert_eq!(err.kind(), "request");
}

#[tokio::test]
async fn fetches_restaurants_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("restaurants.json");
    std::fs::write(&path, mock_restaurants_json()).unwrap();

    let fetcher = Fetcher::from_config(&SourceConfig {
        location: path.display().to_string(),
        timeout_seconds: 5,
    })
    .unwrap();
    assert!(matches!(fetcher.source(), RestaurantSource::File { .. }));
    assert_eq!(fetcher.fetch().await.unwrap(), mock_restaurants());
}

#[tokio::test]
async fn missing_file_is_a_read_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let fetcher = Fetcher::new(
        RestaurantSource::File {
            path: dir.path().join("missing.json"),
        },
        Duration::from_secs(1),
    )
    .unwrap();

    assert!(matches!(fetcher.fetch().await, Err(FetchError::Read { .. })));
}

#[tokio::test]
async fn duplicate_ids_keep_first_record() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("dupes.json");
    let mut records = mock_restaurants();
    let mut dupe = records[0].clone();
    dupe.name = "Impostor".to_string();
    records.push(dupe);
    std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

    let fetcher = Fetcher::new(RestaurantSource::File { path }, Duration::from_secs(1)).unwrap();
    let restaurants = fetcher.fetch().await.unwrap();
    assert_eq!(restaurants, mock_restaurants());
}
