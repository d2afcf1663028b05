use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::RecordsResponse;
use crate::state::AppState;

pub async fn list_records(State(state): State<Arc<AppState>>) -> Json<RecordsResponse> {
    Json(RecordsResponse {
        current: state.context.current_record(),
        last_search: state.context.last_search_record(),
    })
}
