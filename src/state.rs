use crate::error::AppError;
use anyhow::Context;
use chrono::{DateTime, Utc};
use photo_core::SearchQuery;
use photosearch::{PhotoSearch, DEFAULT_API_URL};
use serde::Deserialize;

/// `/search` のクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub term: String,
    #[serde(default)]
    pub cc: bool,
    pub min_date: Option<DateTime<Utc>>,
    pub max_date: Option<DateTime<Utc>>,
}

impl SearchParams {
    /// 日付は両方そろっているときだけフィルタとして使う
    pub fn into_query(self) -> Result<SearchQuery, AppError> {
        let query = SearchQuery::new(self.term);
        let query = if self.cc {
            query.creative_commons_only()
        } else {
            query
        };

        match (self.min_date, self.max_date) {
            (Some(min), Some(max)) => Ok(query.between(min, max)),
            (None, None) => Ok(query),
            _ => Err(AppError::BadRequest(
                "min_date and max_date must be given together".to_string(),
            )),
        }
    }
}

pub type SharedState = AppState;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub search: PhotoSearch,
}

#[derive(Clone)]
pub struct AppConfig {
    pub consumer_key: String,
    pub api_url: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let consumer_key = std::env::var("PX_CONSUMER_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .context("PX_CONSUMER_KEY environment variable is not set")?;
        let api_url =
            std::env::var("PX_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Ok(Self {
            consumer_key,
            api_url,
            port,
        })
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("consumer_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("port", &self.port)
            .finish()
    }
}
