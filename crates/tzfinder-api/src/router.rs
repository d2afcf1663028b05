use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Location
        .route("/api/v1/location/current", post(handlers::resolve_current_location))

        // Search
        .route("/api/v1/search", get(handlers::search_address))
        .route("/api/v1/search/status", get(handlers::search_status))

        // Records and time
        .route("/api/v1/records", get(handlers::list_records))
        .route("/api/v1/time", get(handlers::local_time))

        .with_state(state)
}
