use crate::error::AppError;
use crate::state::{SearchParams, SharedState};
use axum::{
    extract::{Query, State},
    response::Json,
};
use photo_core::SearchResponse;

pub async fn search(
    State(state): State<SharedState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    tracing::info!(
        "Received search request: {:?} (cc={}, min_date={:?}, max_date={:?})",
        params.term,
        params.cc,
        params.min_date,
        params.max_date
    );

    let query = params.into_query()?;
    let photos = state.search.find_photos(query).await?;

    tracing::debug!("Returning {} photos", photos.len());
    Ok(Json(SearchResponse::from(photos)))
}
