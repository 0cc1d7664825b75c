use thiserror::Error;

/// Errors a search call can end with.
///
/// Transport failures are reported as [`SearchError::Parse`]: the body of a
/// failed request is treated as empty and fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The request URL could not be assembled from the query and key
    #[error("Malformed search request: {0}")]
    MalformedRequest(String),

    /// The response body was absent, not JSON, or had no `photos` array
    #[error("Failed to parse search response")]
    Parse,
}

impl SearchError {
    /// 利用者に見せるメッセージ
    pub fn user_message(&self) -> &'static str {
        match self {
            SearchError::MalformedRequest(_) => "The search request could not be built.",
            SearchError::Parse => "The photo search service returned an unexpected response.",
        }
    }
}
