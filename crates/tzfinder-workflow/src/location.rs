//! Current-location resolution
//!
//! ```text
//! IDLE -> REQUESTING_PERMISSION -> RESOLVING -> SUCCEEDED
//!                 |                    |------> DEGRADED_FALLBACK
//!                 '--------------------'------> FAILED
//! ```
//!
//! Terminal states are never left; there are no automatic retries.

use crate::context::AppContext;
use serde::Serialize;
use tzfinder_core::error::{GeolocationError, TzError};
use tzfinder_core::models::{Coordinates, TimezoneRecord};
use tzfinder_core::ports::LocationSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationState {
    Idle,
    RequestingPermission,
    Resolving,
    Succeeded,
    DegradedFallback,
    Failed,
}

impl LocationState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            LocationState::Succeeded | LocationState::DegradedFallback | LocationState::Failed
        )
    }
}

/// Three-state indicator shown next to the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusIndicator {
    Loading,
    Success,
    Error,
}

/// What a presentation layer shows while (and after) resolving
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationStatus {
    pub state: LocationState,
    pub indicator: StatusIndicator,
    pub message: String,
}

impl LocationStatus {
    pub fn idle() -> Self {
        Self {
            state: LocationState::Idle,
            indicator: StatusIndicator::Loading,
            message: "Waiting to detect location".to_string(),
        }
    }

    fn loading(state: LocationState, message: &str) -> Self {
        Self { state, indicator: StatusIndicator::Loading, message: message.to_string() }
    }
}

/// Terminal result of the current-location workflow
#[derive(Debug, Clone)]
pub enum CurrentLocationOutcome {
    /// The provider resolved the position
    Succeeded(TimezoneRecord),
    /// The provider was unusable; the record comes from the local environment
    DegradedFallback(TimezoneRecord),
    Failed(TzError),
}

impl CurrentLocationOutcome {
    pub fn state(&self) -> LocationState {
        match self {
            CurrentLocationOutcome::Succeeded(_) => LocationState::Succeeded,
            CurrentLocationOutcome::DegradedFallback(_) => LocationState::DegradedFallback,
            CurrentLocationOutcome::Failed(_) => LocationState::Failed,
        }
    }

    pub fn record(&self) -> Option<&TimezoneRecord> {
        match self {
            CurrentLocationOutcome::Succeeded(record)
            | CurrentLocationOutcome::DegradedFallback(record) => Some(record),
            CurrentLocationOutcome::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&TzError> {
        match self {
            CurrentLocationOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn status(&self) -> LocationStatus {
        let (indicator, message) = match self {
            CurrentLocationOutcome::Succeeded(_) => {
                (StatusIndicator::Success, "Location detected successfully")
            }
            CurrentLocationOutcome::DegradedFallback(_) => {
                (StatusIndicator::Success, "Location detected (using local timezone)")
            }
            CurrentLocationOutcome::Failed(TzError::Geolocation(e)) => {
                (StatusIndicator::Error, e.status_message())
            }
            CurrentLocationOutcome::Failed(_) => {
                (StatusIndicator::Error, "Failed to get timezone information")
            }
        };

        LocationStatus { state: self.state(), indicator, message: message.to_string() }
    }
}

/// One run of the current-location resolution
///
/// `run` consumes the workflow, so a workflow resolves at most once.
pub struct LocationWorkflow<'a> {
    ctx: &'a AppContext,
    state: LocationState,
}

impl<'a> LocationWorkflow<'a> {
    pub fn new(ctx: &'a AppContext) -> Self {
        Self { ctx, state: LocationState::Idle }
    }

    pub fn state(&self) -> LocationState {
        self.state
    }

    pub async fn run(mut self, source: &dyn LocationSource) -> CurrentLocationOutcome {
        self.transition(LocationStatus::loading(
            LocationState::RequestingPermission,
            "Requesting location permission...",
        ));

        let coordinates = match self.request_position(source).await {
            Ok(coordinates) => coordinates,
            Err(e) => {
                tracing::error!(error = ?e, "Geolocation error");
                return self.finish(CurrentLocationOutcome::Failed(e.into()));
            }
        };

        tracing::info!(
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            accuracy_meters = ?coordinates.accuracy_meters,
            "Location detected"
        );

        self.transition(LocationStatus::loading(
            LocationState::Resolving,
            "Getting timezone information...",
        ));

        let outcome = self.resolve(&coordinates).await;
        self.finish(outcome)
    }

    async fn request_position(
        &self,
        source: &dyn LocationSource,
    ) -> Result<Coordinates, GeolocationError> {
        let options = self.ctx.config().position;

        match tokio::time::timeout(options.timeout, source.current_position(&options)).await {
            Ok(result) => result,
            Err(_) => Err(GeolocationError::Timeout),
        }
    }

    async fn resolve(&self, coordinates: &Coordinates) -> CurrentLocationOutcome {
        let Some(provider) = self.ctx.provider() else {
            tracing::info!("No geocoding credential configured, using local timezone detection");
            return CurrentLocationOutcome::DegradedFallback(
                self.ctx.fallback().resolve(coordinates),
            );
        };

        match provider.reverse_lookup(coordinates).await {
            Ok(record) => CurrentLocationOutcome::Succeeded(record),
            Err(e) if e.is_auth() => {
                tracing::warn!(
                    status = ?e.http_status(),
                    "Provider rejected the API key, using local timezone detection"
                );
                CurrentLocationOutcome::DegradedFallback(self.ctx.fallback().resolve(coordinates))
            }
            Err(e) => {
                tracing::error!(error = %e, kind = ?e.kind(), "Error fetching timezone for current location");
                CurrentLocationOutcome::Failed(e)
            }
        }
    }

    fn finish(mut self, outcome: CurrentLocationOutcome) -> CurrentLocationOutcome {
        if let Some(record) = outcome.record() {
            self.ctx.set_current_record(record.clone());
        }
        self.transition(outcome.status());
        outcome
    }

    fn transition(&mut self, status: LocationStatus) {
        tracing::debug!(from = ?self.state, to = ?status.state, message = %status.message, "Location state change");
        self.state = status.state;
        self.ctx.set_location_status(status);
    }
}
