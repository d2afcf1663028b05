use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tzfinder_core::GeolocationError;

/// tzfinder - timezone of your position or of any address
#[derive(Parser, Debug)]
#[command(name = "tzfinder")]
#[command(about = "Find the timezone of your current position or of any address", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (TOML); defaults to ./tzfinder.toml when present
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Geoapify API key
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Base URL of the geocoding endpoint
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Provider request timeout in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    pub timeout_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the timezone of the current position
    Current(CurrentArgs),

    /// Resolve the timezone of an address
    Search(SearchArgs),

    /// Show the current local time in a zone
    Time(TimeArgs),

    /// Show configuration values and where they come from
    Config,
}

#[derive(Parser, Debug)]
pub struct CurrentArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    pub lon: Option<f64>,

    /// Reported accuracy in meters
    #[arg(long)]
    pub accuracy: Option<f64>,

    /// Report a geolocation error instead of a position
    #[arg(long, value_name = "CODE", conflicts_with_all = ["lat", "lon"])]
    pub position_error: Option<PositionErrorCode>,
}

/// Error codes a geolocation source can report
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PositionErrorCode {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown,
}

impl From<PositionErrorCode> for GeolocationError {
    fn from(code: PositionErrorCode) -> Self {
        match code {
            PositionErrorCode::PermissionDenied => GeolocationError::PermissionDenied,
            PositionErrorCode::PositionUnavailable => GeolocationError::PositionUnavailable,
            PositionErrorCode::Timeout => GeolocationError::Timeout,
            PositionErrorCode::Unknown => GeolocationError::Unknown,
        }
    }
}

#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Address, city or landmark
    pub address: Option<String>,

    /// Interactive mode - prompt for the address
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(Parser, Debug)]
pub struct TimeArgs {
    /// IANA zone name, e.g. Europe/Paris
    pub zone: String,
}
