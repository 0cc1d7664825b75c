use crate::error::SearchError;
use photo_core::SearchQuery;
use url::Url;

pub const DEFAULT_API_URL: &str = "https://api.500px.com";
const SEARCH_PATH: &str = "/v1/photos/search";

/// 500px image size tier requested for every result.
const IMAGE_SIZE: &str = "4";

/// 検索条件から 500px の検索 URL を組み立てる
///
/// `api_url` may carry a path prefix (e.g. a proxy mounted under `/500px`);
/// the search path is appended to it. Any query or fragment on `api_url` is
/// discarded.
pub fn build_search_url(
    api_url: &str,
    consumer_key: &str,
    query: &SearchQuery,
) -> Result<Url, SearchError> {
    if consumer_key.is_empty() {
        return Err(SearchError::MalformedRequest(
            "consumer key is empty".to_string(),
        ));
    }

    let mut url = Url::parse(api_url).map_err(|e| {
        SearchError::MalformedRequest(format!("invalid API url '{}': {}", api_url, e))
    })?;

    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(SearchError::MalformedRequest(format!(
            "API url '{}' has no host",
            api_url
        )));
    }

    let path = format!("{}{}", url.path().trim_end_matches('/'), SEARCH_PATH);
    url.set_path(&path);
    url.set_fragment(None);
    url.query_pairs_mut()
        .clear()
        .append_pair("consumer_key", consumer_key)
        .append_pair("image_size", IMAGE_SIZE)
        .append_pair("term", &query.text)
        .append_pair("license_type", query.license_filter().as_str());

    Ok(url)
}
