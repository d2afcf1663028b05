use serde::Deserialize;
use tzfinder_core::GeolocationError;

/// What a browser reports after asking its own geolocation service
///
/// `error` carries the geolocation error code (e.g. `"PERMISSION_DENIED"`)
/// and wins over any coordinates sent with it.
#[derive(Debug, Default, Deserialize)]
pub struct CurrentLocationRequest {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub accuracy: Option<f64>,
    pub error: Option<GeolocationError>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct TimeQuery {
    pub zone: Option<String>,
}
