use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use tzfinder_workflow::SearchOutcome;

use crate::dto::{SearchQuery, SearchResponse, SearchStatusResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn search_address(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
    tracing::info!(address = %query.address, "Processing address search");

    match tzfinder_workflow::search_address(&state.context, &query.address).await {
        SearchOutcome::Found { record, notice } => {
            let local_time = state.local_time(&record.timezone.name);
            Ok(Json(SearchResponse { notice, local_time, record }))
        }
        SearchOutcome::Rejected(e) | SearchOutcome::Failed(e) => Err(e.into()),
        SearchOutcome::Skipped => Err(ApiError::conflict("A search is already in progress")),
    }
}

pub async fn search_status(State(state): State<Arc<AppState>>) -> Json<SearchStatusResponse> {
    Json(SearchStatusResponse { searching: state.context.is_searching() })
}
