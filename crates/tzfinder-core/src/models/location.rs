use crate::error::{Result, TzError};
use serde::{Deserialize, Serialize};

/// A geographic position as reported by a geolocation source or a provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,

    /// Reported accuracy radius in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_meters: Option<f64>,
}

impl Coordinates {
    /// Create validated coordinates
    ///
    /// Latitude must lie in [-90, 90] and longitude in [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(TzError::validation(format!(
                "Latitude must be between -90 and 90, got {}",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(TzError::validation(format!(
                "Longitude must be between -180 and 180, got {}",
                longitude
            )));
        }

        Ok(Self { latitude, longitude, accuracy_meters: None })
    }

    /// Attach an accuracy radius; negative or non-finite values are dropped
    pub fn with_accuracy(mut self, accuracy_meters: Option<f64>) -> Self {
        self.accuracy_meters = accuracy_meters.filter(|a| a.is_finite() && *a >= 0.0);
        self
    }

    /// Render as "lat, lon" with a fixed number of decimals
    pub fn to_fixed(&self, decimals: usize) -> String {
        format!("{:.*}, {:.*}", decimals, self.latitude, decimals, self.longitude)
    }
}

/// Where a timezone record points to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceInfo {
    pub formatted_address: Option<String>,
    pub coordinates: Coordinates,
}
