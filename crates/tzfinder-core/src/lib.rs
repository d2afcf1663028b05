//! tzfinder Core - Domain models, configuration and local timezone logic
//!
//! This crate contains the domain types, the failure taxonomy, the port
//! definitions and the parts of resolution that never touch the network.

pub mod config;
pub mod error;
pub mod fallback;
pub mod models;
pub mod ports;
pub mod time;

pub use error::{FailureKind, GeolocationError, LookupKind, Result, TzError};
pub use fallback::{FallbackResolver, SystemEnvironment};
pub use models::{Coordinates, PlaceInfo, RecordSource, TimezoneInfo, TimezoneRecord};
pub use time::TimeFormatter;
