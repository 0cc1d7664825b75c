use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

/// 検索結果の1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Photo {
    pub title: String,
    pub image_url: Url,
    pub captured_at: DateTime<Utc>,
}

/// サーバーの返却順を保ったままの検索結果
pub type PhotoResultSet = Vec<Photo>;

/// ライセンス種別の絞り込み
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LicenseFilter {
    Any,
    CreativeCommons,
}

impl LicenseFilter {
    /// `license_type` パラメータに載せる値
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "0",
            Self::CreativeCommons => "1,2,3,4,5,6",
        }
    }
}

/// 検索条件
///
/// `min_date` / `max_date` は `date_filter_enabled` が true のときだけ意味を持つ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub creative_commons_only: bool,
    pub date_filter_enabled: bool,
    pub min_date: DateTime<Utc>,
    pub max_date: DateTime<Utc>,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            creative_commons_only: false,
            date_filter_enabled: false,
            min_date: DateTime::<Utc>::MIN_UTC,
            max_date: DateTime::<Utc>::MAX_UTC,
        }
    }

    pub fn creative_commons_only(self) -> Self {
        Self {
            creative_commons_only: true,
            ..self
        }
    }

    /// 撮影日時が `min` と `max` の間 (両端を含まない) の写真だけに絞る
    pub fn between(self, min: DateTime<Utc>, max: DateTime<Utc>) -> Self {
        Self {
            date_filter_enabled: true,
            min_date: min,
            max_date: max,
            ..self
        }
    }

    pub fn license_filter(&self) -> LicenseFilter {
        if self.creative_commons_only {
            LicenseFilter::CreativeCommons
        } else {
            LicenseFilter::Any
        }
    }
}

/// `/search` のレスポンス型
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub photos: PhotoResultSet,
    pub count: usize,
}

impl From<PhotoResultSet> for SearchResponse {
    fn from(photos: PhotoResultSet) -> Self {
        Self {
            count: photos.len(),
            photos,
        }
    }
}
