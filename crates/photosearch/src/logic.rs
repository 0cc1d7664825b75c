use crate::api::PhotoFetcher;
use crate::error::SearchError;
use crate::parse::parse_search_results;
use crate::request::build_search_url;
use photo_core::{PhotoResultSet, SearchQuery};

/// 1回分の検索: URL 組み立て → 取得 → デコード → 日付フィルタ
pub async fn find_photos<F: PhotoFetcher + ?Sized>(
    fetcher: &F,
    api_url: &str,
    consumer_key: &str,
    query: &SearchQuery,
) -> Result<PhotoResultSet, SearchError> {
    let url = build_search_url(api_url, consumer_key, query)?;

    tracing::debug!(
        "Searching photos for {:?} (cc_only={}, date_filter={})",
        query.text,
        query.creative_commons_only,
        query.date_filter_enabled
    );

    // Transport failures decode as an empty body
    let body = match fetcher.fetch(&url).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!("Photo search request failed: {:#}", e);
            Vec::new()
        }
    };

    let photos = parse_search_results(&body)?;
    Ok(apply_date_filter(photos, query))
}

/// 日付フィルタが有効なら `min_date < captured_at < max_date` の写真だけを残す
pub fn apply_date_filter(photos: PhotoResultSet, query: &SearchQuery) -> PhotoResultSet {
    if !query.date_filter_enabled {
        return photos;
    }

    photos
        .into_iter()
        .filter(|p| p.captured_at > query.min_date && p.captured_at < query.max_date)
        .collect()
}
