use serde::Serialize;
use tzfinder_core::TimezoneRecord;
use tzfinder_workflow::{LocationState, LocationStatus};

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "tzfinder-api", version: env!("CARGO_PKG_VERSION") }
    }
}

#[derive(Debug, Serialize)]
pub struct CurrentLocationResponse {
    pub state: LocationState,
    pub status: LocationStatus,
    pub local_time: String,
    pub record: TimezoneRecord,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub notice: &'static str,
    pub local_time: String,
    pub record: TimezoneRecord,
}

#[derive(Debug, Serialize)]
pub struct SearchStatusResponse {
    pub searching: bool,
}

#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub current: Option<TimezoneRecord>,
    pub last_search: Option<TimezoneRecord>,
}

#[derive(Debug, Serialize)]
pub struct TimeResponse {
    pub zone: Option<String>,
    pub local_time: String,
}
