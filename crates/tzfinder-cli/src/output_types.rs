use serde::Serialize;
use tabled::Tabled;
use tzfinder_core::config::ConfigSource;
use tzfinder_core::models::TimezoneRecord;
use tzfinder_workflow::{LocationState, LocationStatus};

/// Output for current command
#[derive(Debug, Serialize)]
pub struct CurrentOutput {
    pub state: LocationState,
    pub status: LocationStatus,
    pub local_time: String,
    pub record: TimezoneRecord,
}

/// Output for search command
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub query: String,
    pub notice: String,
    pub local_time: String,
    pub record: TimezoneRecord,
}

/// Output for time command
#[derive(Debug, Serialize)]
pub struct TimeOutput {
    pub zone: String,
    pub local_time: String,
}

/// One row of the config command
#[derive(Debug, Serialize, Tabled)]
pub struct ConfigEntry {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source", display_with = "display_source")]
    pub source: ConfigSource,
}

fn display_source(source: &ConfigSource) -> String {
    format!("{:?}", source)
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub credential_configured: bool,
    pub entries: Vec<ConfigEntry>,
}
