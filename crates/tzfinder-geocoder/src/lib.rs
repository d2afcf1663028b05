//! tzfinder Geocoder - Geocoding provider adapter
//!
//! Implements the `GeocodingProvider` port against a Geoapify-compatible
//! reverse/search API.

pub mod geoapify;
mod response;

pub use geoapify::GeoClient;
