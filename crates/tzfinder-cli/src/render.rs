//! Plain-text rendering of a timezone record

use console::style;
use std::fmt;
use tzfinder_core::models::TimezoneRecord;

const UNAVAILABLE_ADDRESS: &str = "Location information unavailable";
const UNKNOWN: &str = "Unknown";
const NO_DAYLIGHT: &str = "N/A";

/// Which card is being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    CurrentLocation,
    SearchResult,
}

impl RecordKind {
    fn title(self) -> &'static str {
        match self {
            RecordKind::CurrentLocation => "Your Current Location",
            RecordKind::SearchResult => "Search Result",
        }
    }
}

/// A record with absent fields replaced by their display defaults
#[derive(Debug, Clone, PartialEq)]
pub struct RecordView {
    pub title: &'static str,
    pub address: String,
    /// Only shown for the current location
    pub accuracy: Option<String>,
    pub local_time: String,
    pub zone: String,
    pub offset_standard: String,
    pub offset_daylight: String,
    pub latitude: String,
    pub longitude: String,
}

impl RecordView {
    pub fn new(record: &TimezoneRecord, kind: RecordKind, local_time: String) -> Self {
        let timezone = &record.timezone;
        let coordinates = &record.place.coordinates;

        let accuracy = match kind {
            RecordKind::CurrentLocation => coordinates
                .accuracy_meters
                .filter(|meters| *meters > 0.0)
                .map(|meters| format!("GPS Accuracy: ±{} meters", meters.round())),
            RecordKind::SearchResult => None,
        };

        Self {
            title: kind.title(),
            address: record
                .place
                .formatted_address
                .clone()
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| UNAVAILABLE_ADDRESS.to_string()),
            accuracy,
            local_time,
            zone: non_empty_or(&timezone.name, UNKNOWN),
            offset_standard: non_empty_or(&timezone.offset_standard, UNKNOWN),
            offset_daylight: timezone
                .offset_daylight
                .as_deref()
                .map(|offset| non_empty_or(offset, NO_DAYLIGHT))
                .unwrap_or_else(|| NO_DAYLIGHT.to_string()),
            latitude: format!("{:.6}°", coordinates.latitude),
            longitude: format!("{:.6}°", coordinates.longitude),
        }
    }
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

impl fmt::Display for RecordView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", style(self.title).bold().underlined())?;
        writeln!(f, "📍 {}", self.address)?;
        if let Some(ref accuracy) = self.accuracy {
            writeln!(f, "   {}", style(accuracy).dim())?;
        }
        writeln!(f)?;
        writeln!(f, "{}: {}", style("Current Local Time").bold(), self.local_time)?;
        writeln!(f, "{}: {}", style("Timezone Name").bold(), self.zone)?;
        writeln!(f, "{}: {}", style("UTC Offset (Standard)").bold(), self.offset_standard)?;
        writeln!(f, "{}: {}", style("UTC Offset (Daylight)").bold(), self.offset_daylight)?;
        writeln!(f)?;
        writeln!(f, "{}", style("Geographic Coordinates").bold())?;
        writeln!(f, "  Latitude: {}", self.latitude)?;
        write!(f, "  Longitude: {}", self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tzfinder_core::models::{Coordinates, PlaceInfo, RecordSource, TimezoneInfo};

    fn record(accuracy: Option<f64>) -> TimezoneRecord {
        TimezoneRecord {
            place: PlaceInfo {
                formatted_address: Some("Paris, France".to_string()),
                coordinates: Coordinates::new(48.8566, 2.3522).unwrap().with_accuracy(accuracy),
            },
            timezone: TimezoneInfo {
                name: "Europe/Paris".to_string(),
                offset_standard: "+01:00".to_string(),
                offset_daylight: Some("+02:00".to_string()),
            },
            source: RecordSource::Provider,
        }
    }

    #[test]
    fn test_current_location_view() {
        let view = RecordView::new(&record(Some(24.6)), RecordKind::CurrentLocation, "now".into());
        assert_eq!(view.title, "Your Current Location");
        assert_eq!(view.accuracy.as_deref(), Some("GPS Accuracy: ±25 meters"));
        assert_eq!(view.latitude, "48.856600°");
        assert_eq!(view.longitude, "2.352200°");
        assert_eq!(view.offset_daylight, "+02:00");
    }

    #[test]
    fn test_search_result_hides_accuracy() {
        let view = RecordView::new(&record(Some(10.0)), RecordKind::SearchResult, "now".into());
        assert_eq!(view.title, "Search Result");
        assert!(view.accuracy.is_none());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let bare = TimezoneRecord {
            place: PlaceInfo {
                formatted_address: None,
                coordinates: Coordinates::new(0.0, 0.0).unwrap(),
            },
            timezone: TimezoneInfo::default(),
            source: RecordSource::Provider,
        };

        let view = RecordView::new(&bare, RecordKind::SearchResult, "Unknown".into());
        assert_eq!(view.address, "Location information unavailable");
        assert_eq!(view.zone, "Unknown");
        assert_eq!(view.offset_standard, "Unknown");
        assert_eq!(view.offset_daylight, "N/A");
        assert_eq!(view.latitude, "0.000000°");
    }

    #[test]
    fn test_display_contains_labels() {
        let view = RecordView::new(&record(None), RecordKind::SearchResult, "later".into());
        let text = console::strip_ansi_codes(&view.to_string()).to_string();
        assert!(text.contains("Paris, France"));
        assert!(text.contains("Timezone Name: Europe/Paris"));
        assert!(text.contains("UTC Offset (Standard): +01:00"));
        assert!(text.contains("Longitude: 2.352200°"));
    }
}
