use crate::helpers::client::TestClient;
use axum::http::StatusCode;
use photosearch::DEFAULT_API_URL;

/// 観点: /health エンドポイントが 200 OK を返すか
#[tokio::test]
async fn test_health_check() {
    let client = TestClient::new(DEFAULT_API_URL);
    let (status, body) = client.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
}

/// 観点: / が説明文を返すか
#[tokio::test]
async fn test_root() {
    let client = TestClient::new(DEFAULT_API_URL);
    let (status, body) = client.get("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/search"));
    assert_eq!(client.state.config.api_url, DEFAULT_API_URL);
}
