//! Wire types of the geocoding provider

use serde::de::{Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use tzfinder_core::error::{Result, TzError};
use tzfinder_core::models::{Coordinates, PlaceInfo, RecordSource, TimezoneInfo, TimezoneRecord};

/// Body of both the reverse and the search endpoint
///
/// Provider ranking is trusted: only the first result is decoded, the rest
/// of the array is skipped without being inspected.
#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    #[serde(default, rename = "results", deserialize_with = "first_result")]
    first: Option<GeocodeResult>,
}

impl GeocodeResponse {
    pub fn into_first(self) -> Option<GeocodeResult> {
        self.first
    }
}

fn first_result<'de, D>(deserializer: D) -> std::result::Result<Option<GeocodeResult>, D::Error>
where
    D: Deserializer<'de>,
{
    struct FirstResult;

    impl<'de> Visitor<'de> for FirstResult {
        type Value = Option<GeocodeResult>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a list of geocoding results")
        }

        fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> std::result::Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_seq(self)
        }

        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let first = seq.next_element::<GeocodeResult>()?;
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(first)
        }
    }

    deserializer.deserialize_option(FirstResult)
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResult {
    /// Only read by forward lookups; reverse lookups keep the caller's position
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub formatted: Option<String>,
    #[serde(default)]
    pub timezone: Option<ProviderTimezone>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProviderTimezone {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "offset_STD")]
    pub offset_std: Option<String>,
    #[serde(default, rename = "offset_DST")]
    pub offset_dst: Option<String>,
}

impl GeocodeResult {
    /// Map into a provider record located at `coordinates`
    pub fn into_record_at(self, coordinates: Coordinates) -> TimezoneRecord {
        let timezone = self.timezone.unwrap_or_default();

        TimezoneRecord {
            place: PlaceInfo {
                formatted_address: self.formatted.filter(|f| !f.trim().is_empty()),
                coordinates,
            },
            timezone: TimezoneInfo {
                name: timezone.name.unwrap_or_default(),
                offset_standard: timezone.offset_std.unwrap_or_default(),
                offset_daylight: timezone.offset_dst,
            },
            source: RecordSource::Provider,
        }
    }

    /// Map into a provider record located where the provider says
    pub fn into_record(self) -> Result<TimezoneRecord> {
        let (Some(lat), Some(lon)) = (self.lat, self.lon) else {
            return Err(TzError::Provider {
                status: None,
                reason: "Provider result has no coordinates".to_string(),
            });
        };

        let coordinates = Coordinates::new(lat, lon).map_err(|e| TzError::Provider {
            status: None,
            reason: format!("Provider returned invalid coordinates: {}", e),
        })?;
        Ok(self.into_record_at(coordinates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PARIS: &str = r#"{
        "results": [
            {
                "lat": 48.8566,
                "lon": 2.3522,
                "formatted": "Paris, France",
                "country": "France",
                "timezone": {
                    "name": "Europe/Paris",
                    "offset_STD": "+01:00",
                    "offset_STD_seconds": 3600,
                    "offset_DST": "+02:00",
                    "offset_DST_seconds": 7200,
                    "abbreviation_STD": "CET"
                }
            },
            {
                "lat": 33.6609,
                "lon": -95.5555,
                "formatted": "Paris, TX, United States of America",
                "timezone": { "name": "America/Chicago", "offset_STD": "-06:00" }
            }
        ],
        "query": { "text": "Paris" }
    }"#;

    #[test]
    fn test_first_result_wins() {
        let response: GeocodeResponse = serde_json::from_str(PARIS).unwrap();
        let record = response.into_first().unwrap().into_record().unwrap();

        assert_eq!(record.source, RecordSource::Provider);
        assert_eq!(record.timezone.name, "Europe/Paris");
        assert_eq!(record.timezone.offset_standard, "+01:00");
        assert_eq!(record.timezone.offset_daylight.as_deref(), Some("+02:00"));
        assert_eq!(record.place.formatted_address.as_deref(), Some("Paris, France"));
        assert_eq!(record.place.coordinates.latitude, 48.8566);
    }

    #[test]
    fn test_missing_or_null_results_are_empty() {
        let missing: GeocodeResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.into_first().is_none());

        let null: GeocodeResponse = serde_json::from_str(r#"{"results": null}"#).unwrap();
        assert!(null.into_first().is_none());

        let empty: GeocodeResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(empty.into_first().is_none());
    }

    #[test]
    fn test_result_without_timezone_keeps_empty_name() {
        let response: GeocodeResponse =
            serde_json::from_str(r#"{"results": [{"lat": 0.0, "lon": 0.0}]}"#).unwrap();
        let record = response.into_first().unwrap().into_record().unwrap();

        assert!(!record.timezone.is_known());
        assert_eq!(record.timezone.offset_daylight, None);
        assert_eq!(record.place.formatted_address, None);
    }

    #[test]
    fn test_invalid_provider_coordinates_are_a_provider_error() {
        let response: GeocodeResponse =
            serde_json::from_str(r#"{"results": [{"lat": 123.0, "lon": 0.0}]}"#).unwrap();
        let err = response.into_first().unwrap().into_record().unwrap_err();

        assert_eq!(err.kind(), tzfinder_core::FailureKind::ProviderError);
    }

    #[test]
    fn test_entries_after_the_first_are_not_decoded() {
        let body = r#"{
            "results": [
                {
                    "lat": 48.8566,
                    "lon": 2.3522,
                    "formatted": "Paris, France",
                    "timezone": { "name": "Europe/Paris", "offset_STD": "+01:00" }
                },
                { "formatted": "junk" },
                { "lat": "not a number", "timezone": 42 },
                "garbage"
            ]
        }"#;

        let response: GeocodeResponse = serde_json::from_str(body).unwrap();
        let record = response.into_first().unwrap().into_record().unwrap();

        assert_eq!(record.timezone.name, "Europe/Paris");
        assert_eq!(record.place.formatted_address.as_deref(), Some("Paris, France"));
    }

    #[test]
    fn test_reverse_mapping_does_not_need_result_coordinates() {
        let body = r#"{"results": [{"formatted": "Somewhere", "timezone": {"name": "Europe/Rome"}}]}"#;
        let response: GeocodeResponse = serde_json::from_str(body).unwrap();
        let here = Coordinates::new(41.9, 12.5).unwrap();

        let record = response.into_first().unwrap().into_record_at(here);
        assert_eq!(record.timezone.name, "Europe/Rome");
        assert_eq!(record.place.coordinates, here);
    }

    #[test]
    fn test_forward_mapping_requires_result_coordinates() {
        let response: GeocodeResponse =
            serde_json::from_str(r#"{"results": [{"formatted": "Nowhere"}]}"#).unwrap();
        let err = response.into_first().unwrap().into_record().unwrap_err();

        assert_eq!(err.kind(), tzfinder_core::FailureKind::ProviderError);
    }

    #[test]
    fn test_malformed_first_result_is_rejected() {
        let result = serde_json::from_str::<GeocodeResponse>(r#"{"results": [{"lat": "north"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_at_keeps_supplied_coordinates() {
        let response: GeocodeResponse = serde_json::from_str(PARIS).unwrap();
        let here = Coordinates::new(48.85, 2.35).unwrap().with_accuracy(Some(15.0));
        let record = response.into_first().unwrap().into_record_at(here);

        assert_eq!(record.place.coordinates, here);
    }
}
