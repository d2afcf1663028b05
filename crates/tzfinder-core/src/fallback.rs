//! Timezone records derived from the local environment
//!
//! Used when the geocoding provider is unusable (no credential, or it rejects
//! the credential). The result is approximate: it describes the machine's own
//! zone, not the zone at the supplied coordinates.

use crate::models::{Coordinates, PlaceInfo, RecordSource, TimezoneInfo, TimezoneRecord};
use crate::ports::LocalEnvironment;
use chrono::Local;
use std::sync::Arc;

/// Stands in for the daylight offset, which is not computed locally
pub const LOCAL_DAYLIGHT_PLACEHOLDER: &str = "Detected locally";

/// Zone name used when the local zone cannot be determined
const DEFAULT_ZONE: &str = "UTC";

/// The machine's clock and zone database
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl LocalEnvironment for SystemEnvironment {
    fn zone_name(&self) -> String {
        match iana_time_zone::get_timezone() {
            Ok(name) if !name.is_empty() => name,
            Ok(_) => DEFAULT_ZONE.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not determine local zone, assuming {}", DEFAULT_ZONE);
                DEFAULT_ZONE.to_string()
            }
        }
    }

    fn utc_offset_minutes(&self) -> i32 {
        // east of UTC is negative in this convention
        let east_seconds = Local::now().offset().local_minus_utc();
        -(east_seconds / 60)
    }
}

/// Builds `RecordSource::Fallback` records; never fails
#[derive(Clone)]
pub struct FallbackResolver {
    environment: Arc<dyn LocalEnvironment>,
}

impl FallbackResolver {
    pub fn new(environment: Arc<dyn LocalEnvironment>) -> Self {
        Self { environment }
    }

    /// Resolver backed by the machine's own clock
    pub fn system() -> Self {
        Self::new(Arc::new(SystemEnvironment))
    }

    pub fn resolve(&self, coordinates: &Coordinates) -> TimezoneRecord {
        let name = self.environment.zone_name();
        let offset_minutes = self.environment.utc_offset_minutes();

        tracing::info!(
            zone = %name,
            offset_minutes = offset_minutes,
            "Using local timezone detection as fallback"
        );

        TimezoneRecord {
            place: PlaceInfo {
                formatted_address: Some(format!("Coordinates: {}", coordinates.to_fixed(4))),
                coordinates: *coordinates,
            },
            timezone: TimezoneInfo {
                name,
                offset_standard: format_offset(offset_minutes),
                offset_daylight: Some(LOCAL_DAYLIGHT_PLACEHOLDER.to_string()),
            },
            source: RecordSource::Fallback,
        }
    }
}

impl std::fmt::Debug for FallbackResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackResolver").finish_non_exhaustive()
    }
}

/// Render an offset (minutes, positive west of UTC) as `±HH:MM`
///
/// A non-positive offset renders with `+`.
pub fn format_offset(offset_minutes: i32) -> String {
    let sign = if offset_minutes <= 0 { '+' } else { '-' };
    let abs = offset_minutes.unsigned_abs();
    format!("{}{:02}:{:02}", sign, abs / 60, abs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct FixedEnvironment {
        zone: &'static str,
        offset: i32,
    }

    impl LocalEnvironment for FixedEnvironment {
        fn zone_name(&self) -> String {
            self.zone.to_string()
        }

        fn utc_offset_minutes(&self) -> i32 {
            self.offset
        }
    }

    fn is_offset_pattern(s: &str) -> bool {
        let bytes = s.as_bytes();
        bytes.len() == 6
            && (bytes[0] == b'+' || bytes[0] == b'-')
            && bytes[1..3].iter().all(u8::is_ascii_digit)
            && bytes[3] == b':'
            && bytes[4..6].iter().all(u8::is_ascii_digit)
    }

    #[test]
    fn test_format_offset_examples() {
        assert_eq!(format_offset(0), "+00:00");
        assert_eq!(format_offset(-60), "+01:00");
        assert_eq!(format_offset(-330), "+05:30");
        assert_eq!(format_offset(480), "-08:00");
        assert_eq!(format_offset(210), "-03:30");
        assert_eq!(format_offset(-765), "+12:45");
    }

    #[test]
    fn test_resolve_san_francisco_with_system_environment() {
        let coords = Coordinates::new(37.7749, -122.4194).unwrap();
        let record = FallbackResolver::system().resolve(&coords);

        assert_eq!(record.source, RecordSource::Fallback);
        assert!(!record.timezone.name.is_empty());
        assert!(is_offset_pattern(&record.timezone.offset_standard));
    }

    #[test]
    fn test_resolve_uses_environment_values() {
        let resolver = FallbackResolver::new(Arc::new(FixedEnvironment {
            zone: "America/Los_Angeles",
            offset: 420,
        }));
        let coords = Coordinates::new(37.7749, -122.4194).unwrap().with_accuracy(Some(30.0));
        let record = resolver.resolve(&coords);

        assert_eq!(record.timezone.name, "America/Los_Angeles");
        assert_eq!(record.timezone.offset_standard, "-07:00");
        assert_eq!(record.timezone.offset_daylight.as_deref(), Some(LOCAL_DAYLIGHT_PLACEHOLDER));
        assert_eq!(
            record.place.formatted_address.as_deref(),
            Some("Coordinates: 37.7749, -122.4194")
        );
        assert_eq!(record.place.coordinates.accuracy_meters, Some(30.0));
    }

    proptest! {
        #[test]
        fn prop_offset_matches_pattern(offset in -1440i32..=1440) {
            let text = format_offset(offset);
            prop_assert!(is_offset_pattern(&text), "{}", text);
            prop_assert_eq!(text.starts_with('+'), offset <= 0);

            let hours: u32 = text[1..3].parse().unwrap();
            let minutes: u32 = text[4..6].parse().unwrap();
            prop_assert_eq!(hours * 60 + minutes, offset.unsigned_abs());
        }
    }
}
