use std::sync::Arc;

use axum::{extract::State, Json};
use tzfinder_workflow::{CurrentLocationOutcome, LocationWorkflow, ReportedPosition};

use crate::dto::{CurrentLocationRequest, CurrentLocationResponse};
use crate::error::ApiError;
use crate::state::AppState;

pub async fn resolve_current_location(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CurrentLocationRequest>,
) -> Result<Json<CurrentLocationResponse>, ApiError> {
    tracing::info!(
        has_position = request.latitude.is_some() && request.longitude.is_some(),
        reported_error = ?request.error,
        "Processing current location request"
    );

    let source = ReportedPosition::from_parts(
        request.latitude,
        request.longitude,
        request.accuracy,
        request.error,
    )?;

    let outcome = LocationWorkflow::new(&state.context).run(&source).await;
    let status = outcome.status();

    match outcome {
        CurrentLocationOutcome::Succeeded(record)
        | CurrentLocationOutcome::DegradedFallback(record) => {
            let local_time = state.local_time(&record.timezone.name);
            Ok(Json(CurrentLocationResponse { state: status.state, status, local_time, record }))
        }
        CurrentLocationOutcome::Failed(e) => Err(ApiError::from(e).with_details(status.message)),
    }
}
