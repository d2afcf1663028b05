//! Port definitions for the collaborators around resolution

use crate::error::{GeolocationError, Result};
use crate::models::{Coordinates, TimezoneRecord};
use async_trait::async_trait;
use std::time::Duration;

/// Port for a remote geocoding provider
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Resolve coordinates to a place and its timezone
    ///
    /// The returned record carries the supplied coordinates, not the
    /// provider's snapped ones.
    async fn reverse_lookup(&self, coordinates: &Coordinates) -> Result<TimezoneRecord>;

    /// Resolve free-text address to a place and its timezone
    async fn forward_lookup(&self, address: &str) -> Result<TimezoneRecord>;
}

/// Options handed to a geolocation source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,

    /// How long the source may take before reporting `Timeout`
    pub timeout: Duration,

    /// Cached positions up to this age are acceptable
    pub maximum_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_millis(10_000),
            maximum_age: Duration::from_millis(300_000),
        }
    }
}

/// Port for a one-shot "get current position" source
#[async_trait]
pub trait LocationSource: Send + Sync {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> std::result::Result<Coordinates, GeolocationError>;
}

/// Port for the local clock and zone database
pub trait LocalEnvironment: Send + Sync {
    /// Resolved IANA zone name of the local environment
    fn zone_name(&self) -> String;

    /// Current offset in minutes, positive west of UTC
    fn utc_offset_minutes(&self) -> i32;
}
