//! Local time rendering for IANA zones

use crate::error::{Result, TzError};
use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;

/// Returned for an empty or absent zone name
pub const UNKNOWN_TIME: &str = "Unknown";

/// Returned when the zone name cannot be resolved
pub const FORMAT_ERROR_TIME: &str = "Time formatting error";

/// "Monday, January 15, 2024 at 12:30:45 PM", followed by the zone label
const DISPLAY_FORMAT: &str = "%A, %B %-d, %Y at %I:%M:%S %p";

/// Renders the current date and time in a named zone, en-US style
///
/// Never fails: unknown zones map to [`FORMAT_ERROR_TIME`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeFormatter;

impl TimeFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Format "now" in the given zone
    pub fn format(&self, zone_name: Option<&str>) -> String {
        self.format_at(zone_name, Utc::now())
    }

    /// Format a fixed instant in the given zone
    pub fn format_at(&self, zone_name: Option<&str>, instant: DateTime<Utc>) -> String {
        let zone = match zone_name {
            Some(zone) if !zone.is_empty() => zone,
            _ => return UNKNOWN_TIME.to_string(),
        };

        match render(zone, instant) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(zone = %zone, error = %e, "Failed to format local time");
                FORMAT_ERROR_TIME.to_string()
            }
        }
    }
}

/// Parse an IANA zone name, ignoring ASCII case
pub fn parse_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .or_else(|_| Tz::from_str_insensitive(name))
        .map_err(|_| TzError::Format { zone: name.to_string() })
}

fn render(zone: &str, instant: DateTime<Utc>) -> Result<String> {
    let tz = parse_zone(zone)?;
    let local = instant.with_timezone(&tz);
    Ok(format!("{} {}", local.format(DISPLAY_FORMAT), zone_label(&local)))
}

/// Short zone name, or "GMT-3" style when the database only has a numeric one
fn zone_label(local: &DateTime<Tz>) -> String {
    let abbreviation = local.format("%Z").to_string();
    if !abbreviation.starts_with(['+', '-']) {
        return abbreviation;
    }
    gmt_label(local.offset().fix().local_minus_utc())
}

fn gmt_label(offset_seconds: i32) -> String {
    if offset_seconds == 0 {
        return "GMT".to_string();
    }

    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let total = offset_seconds.unsigned_abs();
    let (hours, minutes) = (total / 3600, total % 3600 / 60);
    if minutes == 0 {
        format!("GMT{}{}", sign, hours)
    } else {
        format!("GMT{}{}:{:02}", sign, hours, minutes)
    }
}
