//! Error types for tzfinder
//!
//! `Display` on every variant is the user-readable text; `kind()` is the
//! machine-readable classification that presentation layers keep alongside it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine-readable failure classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureKind {
    Timeout,
    NotFound,
    ProviderError,
    /// A `ProviderError` for HTTP 401/403
    AuthError,
    GeolocationDenied,
    GeolocationUnavailable,
    GeolocationTimeout,
    GeolocationUnsupported,
    GeolocationUnknown,
    ValidationError,
    /// Recovered inside `TimeFormatter`, never surfaced as a hard failure
    FormatError,
    ConfigError,
}

/// Which provider lookup produced a result (or failed to)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    Reverse,
    Forward,
}

impl LookupKind {
    pub fn not_found_message(&self) -> &'static str {
        match self {
            LookupKind::Reverse => "No timezone information found for these coordinates",
            LookupKind::Forward => {
                "Address not found. Please check the spelling and try with a more complete address."
            }
        }
    }
}

/// Error codes reported by a geolocation source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GeolocationError {
    #[error("Location access was denied. Please enable location permission or search by address.")]
    PermissionDenied,

    #[error("Your location could not be determined. Please check your GPS settings or search by address.")]
    PositionUnavailable,

    #[error("Location request timed out. Please try again or search by address.")]
    Timeout,

    #[error("An unknown error occurred while detecting your location. Please search by address.")]
    Unknown,

    #[error("Your system does not support location detection. Please search by address instead.")]
    Unsupported,
}

impl GeolocationError {
    /// Short line for the location status indicator
    pub fn status_message(&self) -> &'static str {
        match self {
            GeolocationError::PermissionDenied => "Location access denied",
            GeolocationError::PositionUnavailable => "Location unavailable",
            GeolocationError::Timeout => "Location request timed out",
            GeolocationError::Unknown => "Location error occurred",
            GeolocationError::Unsupported => "Geolocation is not supported on this system",
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            GeolocationError::PermissionDenied => FailureKind::GeolocationDenied,
            GeolocationError::PositionUnavailable => FailureKind::GeolocationUnavailable,
            GeolocationError::Timeout => FailureKind::GeolocationTimeout,
            GeolocationError::Unknown => FailureKind::GeolocationUnknown,
            GeolocationError::Unsupported => FailureKind::GeolocationUnsupported,
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum TzError {
    // Provider errors
    #[error("Request timed out. Please check your internet connection and try again.")]
    Timeout { after_ms: u64 },

    #[error("{}", .lookup.not_found_message())]
    NotFound { lookup: LookupKind },

    #[error("API authentication failed. Please check your Geoapify API key configuration.")]
    Auth { status: u16 },

    #[error("{reason}")]
    Provider { status: Option<u16>, reason: String },

    // Geolocation errors
    #[error(transparent)]
    Geolocation(#[from] GeolocationError),

    // Input errors
    #[error("{reason}")]
    Validation { reason: String },

    #[error("Time formatting error for zone '{zone}'")]
    Format { zone: String },

    // Configuration errors
    #[error("API key not configured. Please add your Geoapify API key to use address search functionality.")]
    MissingCredential,

    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },
}

impl TzError {
    pub fn validation(reason: impl Into<String>) -> Self {
        TzError::Validation { reason: reason.into() }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            TzError::Timeout { .. } => FailureKind::Timeout,
            TzError::NotFound { .. } => FailureKind::NotFound,
            TzError::Auth { .. } => FailureKind::AuthError,
            TzError::Provider { .. } => FailureKind::ProviderError,
            TzError::Geolocation(e) => e.kind(),
            TzError::Validation { .. } => FailureKind::ValidationError,
            TzError::Format { .. } => FailureKind::FormatError,
            TzError::MissingCredential | TzError::ConfigInvalid { .. } => FailureKind::ConfigError,
        }
    }

    /// True for 401/403 responses from the provider
    pub fn is_auth(&self) -> bool {
        matches!(self, TzError::Auth { .. })
    }

    /// HTTP status returned by the provider, when there was one
    pub fn http_status(&self) -> Option<u16> {
        match self {
            TzError::Auth { status } => Some(*status),
            TzError::Provider { status, .. } => *status,
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TzError>;
