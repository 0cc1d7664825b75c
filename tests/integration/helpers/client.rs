use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use photo_search::{
    app,
    state::{AppConfig, AppState, SharedState},
};
use photosearch::{PhotoSearch, PxFetcher};
use tower::ServiceExt; // for oneshot

pub struct TestClient {
    pub router: Router,
    pub state: SharedState,
}

impl TestClient {
    /// ゲートウェイの向き先を `api_url` にした状態で作る
    pub fn new(api_url: &str) -> Self {
        Self::new_with_key(api_url, "test_consumer_key")
    }

    pub fn new_with_key(api_url: &str, consumer_key: &str) -> Self {
        let state = create_test_state(api_url, consumer_key);
        let router = app(state.clone());
        Self { router, state }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .uri(uri)
            .method("GET")
            .body(Body::empty())
            .unwrap();

        // Router is cheap to clone; oneshot consumes it
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body_bytes.to_vec()).unwrap())
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.get(uri).await;
        let json = serde_json::from_str(&body)
            .unwrap_or_else(|e| panic!("Response is not JSON ({}): {}", e, body));
        (status, json)
    }
}

fn create_test_state(api_url: &str, consumer_key: &str) -> SharedState {
    let config = AppConfig {
        consumer_key: consumer_key.to_string(),
        api_url: api_url.to_string(),
        port: 0,
    };
    let search = PhotoSearch::new(PxFetcher::new(reqwest::Client::new()), consumer_key)
        .with_api_url(api_url);

    AppState { config, search }
}
