use crate::helpers::client::TestClient;
use crate::helpers::mock_server::{photo_record, search_body, unreachable_url, MockServer};
use axum::http::StatusCode;

/// 観点: /search が絞り込み済みの結果を JSON で返す
#[tokio::test]
async fn test_search_returns_filtered_photos() {
    let server = MockServer::start(search_body(vec![
        photo_record("may2016", "2016-05-01T08:00:00Z"),
        photo_record("june2017", "2017-06-15T08:00:00Z"),
        photo_record("feb2018", "2018-02-10T08:00:00Z"),
    ]))
    .await;
    let client = TestClient::new(&server.base_url());

    let (status, body) = client
        .get_json(
            "/search?term=sunset&cc=true&min_date=2017-01-01T00:00:00Z&max_date=2017-12-31T23:59:59Z",
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["photos"][0]["title"], "june2017");
    assert_eq!(body["photos"][0]["captured_at"], "2017-06-15T08:00:00Z");
    assert_eq!(server.requests()[0]["license_type"], "1,2,3,4,5,6");
}

#[tokio::test]
async fn test_search_without_dates_returns_everything() {
    let server = MockServer::start(search_body(vec![
        photo_record("may2016", "2016-05-01T08:00:00Z"),
        photo_record("feb2018", "2018-02-10T08:00:00Z"),
    ]))
    .await;
    let client = TestClient::new(&server.base_url());

    let (status, body) = client.get_json("/search?term=sunset").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(server.requests()[0]["license_type"], "0");
}

/// 観点: 日付が片方だけなら 400
#[tokio::test]
async fn test_search_with_one_date_is_bad_request() {
    let server = MockServer::start(search_body(vec![])).await;
    let client = TestClient::new(&server.base_url());

    let (status, body) = client
        .get_json("/search?term=sunset&min_date=2017-01-01T00:00:00Z")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("min_date"));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_search_with_malformed_date_is_bad_request() {
    let server = MockServer::start(search_body(vec![])).await;
    let client = TestClient::new(&server.base_url());

    let (status, _) = client
        .get("/search?term=sunset&min_date=yesterday&max_date=today")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(server.requests().is_empty());
}

/// 観点: 上流の異常は 502 とエラーメッセージ
#[tokio::test]
async fn test_upstream_failure_is_bad_gateway() {
    let server = MockServer::start_raw(StatusCode::OK, "<html>maintenance</html>").await;
    let client = TestClient::new(&server.base_url());

    let (status, body) = client.get_json("/search?term=sunset").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].is_string());
    assert!(body.get("photos").is_none());

    let client = TestClient::new(&unreachable_url().await);
    let (status, _) = client.get_json("/search?term=sunset").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}

/// 観点: consumer key がない設定ミスは 500
#[tokio::test]
async fn test_missing_key_is_internal_error() {
    let server = MockServer::start(search_body(vec![])).await;
    let client = TestClient::new_with_key(&server.base_url(), "");

    let (status, body) = client.get_json("/search?term=sunset").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
    assert!(server.requests().is_empty());
}
