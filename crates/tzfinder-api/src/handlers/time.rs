use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::dto::{TimeQuery, TimeResponse};
use crate::state::AppState;

/// Never fails: unknown zones render as the formatter's error text
pub async fn local_time(
    State(state): State<Arc<AppState>>,
    Query(query): Query<TimeQuery>,
) -> Json<TimeResponse> {
    let local_time = state.formatter.format(query.zone.as_deref());
    Json(TimeResponse { zone: query.zone, local_time })
}
