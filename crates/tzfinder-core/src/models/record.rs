use crate::models::location::PlaceInfo;
use serde::{Deserialize, Serialize};

/// Timezone data attached to a place
///
/// An empty `name` is a valid state and renders as "Unknown".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneInfo {
    /// IANA zone id, or empty when unknown
    pub name: String,
    pub offset_standard: String,
    pub offset_daylight: Option<String>,
}

impl TimezoneInfo {
    pub fn is_known(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Where a record's timezone data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordSource {
    /// The remote geocoding provider
    Provider,
    /// Derived from the local environment's clock and zone
    Fallback,
}

/// The unit of output of every resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimezoneRecord {
    pub place: PlaceInfo,
    pub timezone: TimezoneInfo,
    pub source: RecordSource,
}
