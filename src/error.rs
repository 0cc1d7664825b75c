use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use photosearch::SearchError;
use serde_json::json;
use tracing::error;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Search(SearchError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Search(err @ SearchError::MalformedRequest(_)) => {
                // 設定ミス (API URL や consumer key) なのでサーバー側の問題として扱う
                error!("Search request could not be built: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    err.user_message().to_string(),
                )
            }
            AppError::Search(err) => {
                tracing::warn!("Search failed: {}", err);
                (StatusCode::BAD_GATEWAY, err.user_message().to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        AppError::Search(err)
    }
}
