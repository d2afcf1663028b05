use async_trait::async_trait;
use tzfinder_core::error::{GeolocationError, Result, TzError};
use tzfinder_core::models::Coordinates;
use tzfinder_core::ports::{LocationSource, PositionOptions};

/// A position (or geolocation error) reported by a client
///
/// The CLI builds one from flags; the API builds one from the JSON body a
/// browser posts after calling its own geolocation service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportedPosition(std::result::Result<Coordinates, GeolocationError>);

impl ReportedPosition {
    pub fn coordinates(coordinates: Coordinates) -> Self {
        Self(Ok(coordinates))
    }

    pub fn error(error: GeolocationError) -> Self {
        Self(Err(error))
    }

    /// Build from loose parts
    ///
    /// A reported error wins over coordinates; no coordinates at all means
    /// the client has no geolocation support.
    pub fn from_parts(
        latitude: Option<f64>,
        longitude: Option<f64>,
        accuracy: Option<f64>,
        error: Option<GeolocationError>,
    ) -> Result<Self> {
        if let Some(error) = error {
            return Ok(Self::error(error));
        }

        match (latitude, longitude) {
            (Some(lat), Some(lon)) => {
                Ok(Self::coordinates(Coordinates::new(lat, lon)?.with_accuracy(accuracy)))
            }
            (None, None) => Ok(Self::error(GeolocationError::Unsupported)),
            _ => Err(TzError::validation("Both latitude and longitude are required")),
        }
    }
}

#[async_trait]
impl LocationSource for ReportedPosition {
    async fn current_position(
        &self,
        _options: &PositionOptions,
    ) -> std::result::Result<Coordinates, GeolocationError> {
        self.0
    }
}
