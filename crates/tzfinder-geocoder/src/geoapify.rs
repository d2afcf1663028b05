use crate::response::{GeocodeResponse, GeocodeResult};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};
use std::time::Duration;
use tzfinder_core::config::AppConfig;
use tzfinder_core::error::{LookupKind, Result, TzError};
use tzfinder_core::models::{Coordinates, TimezoneRecord};
use tzfinder_core::ports::GeocodingProvider;

/// Geoapify-compatible geocoding client
///
/// Every call is a single request with a hard deadline: no retries, and a
/// request still running at the deadline is dropped and reported as
/// `TzError::Timeout`.
pub struct GeoClient {
    /// Endpoint root (e.g., "https://api.geoapify.com/v1/geocode")
    base_url: String,

    /// Provider credential, sent as the `apiKey` query parameter
    api_key: String,

    /// Deadline for one request, body included
    timeout: Duration,

    /// HTTP client
    client: reqwest::Client,
}

impl GeoClient {
    /// Create a new client
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    /// Create from resolved configuration; `None` without a usable credential
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        config
            .provider_api_key
            .as_ref()
            .map(|key| Self::new(config.base_url.clone(), key.clone(), config.request_timeout))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let mut query: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        query.push(("format", "json"));
        query.push(("apiKey", self.api_key.as_str()));

        Url::parse_with_params(&format!("{}/{}", self.base_url, path), &query).map_err(|e| {
            TzError::ConfigInvalid {
                key: "base_url".to_string(),
                reason: format!("Invalid provider URL '{}': {}", self.base_url, e),
            }
        })
    }

    async fn fetch(&self, url: Url, lookup: LookupKind) -> Result<GeocodeResult> {
        let request = async {
            let response = self
                .client
                .get(url)
                .header(ACCEPT, "application/json")
                .send()
                .await
                .map_err(|e| TzError::Provider {
                    status: None,
                    reason: format!("Failed to reach geocoding provider: {}", e),
                })?;

            let status = response.status();
            if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
                return Err(TzError::Auth { status: status.as_u16() });
            }
            if !status.is_success() {
                return Err(TzError::Provider {
                    status: Some(status.as_u16()),
                    reason: format!("API request failed: {}", status),
                });
            }

            response.json::<GeocodeResponse>().await.map_err(|e| TzError::Provider {
                status: Some(status.as_u16()),
                reason: format!("Failed to parse provider response: {}", e),
            })
        };

        let body = match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::warn!(
                    lookup = ?lookup,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Geocoding request timed out"
                );
                return Err(TzError::Timeout { after_ms: self.timeout.as_millis() as u64 });
            }
        };

        body.into_first().ok_or(TzError::NotFound { lookup })
    }
}

#[async_trait]
impl GeocodingProvider for GeoClient {
    async fn reverse_lookup(&self, coordinates: &Coordinates) -> Result<TimezoneRecord> {
        tracing::debug!(
            latitude = coordinates.latitude,
            longitude = coordinates.longitude,
            "Fetching timezone data for coordinates"
        );

        let url = self.endpoint(
            "reverse",
            &[("lat", coordinates.latitude.to_string()), ("lon", coordinates.longitude.to_string())],
        )?;

        let result = self.fetch(url, LookupKind::Reverse).await.inspect_err(|e| {
            tracing::error!(error = %e, kind = ?e.kind(), "Reverse lookup failed");
        })?;

        tracing::info!("Timezone data retrieved successfully");
        Ok(result.into_record_at(*coordinates))
    }

    async fn forward_lookup(&self, address: &str) -> Result<TimezoneRecord> {
        let address = address.trim();
        if address.is_empty() {
            return Err(TzError::validation(
                "Please enter an address to search for timezone information.",
            ));
        }

        tracing::debug!(address = %address, "Searching timezone for address");

        let url = self.endpoint("search", &[("text", address.to_string())])?;

        let result = self.fetch(url, LookupKind::Forward).await.inspect_err(|e| {
            tracing::error!(error = %e, kind = ?e.kind(), "Address lookup failed");
        })?;

        tracing::info!("Address timezone data retrieved successfully");
        result.into_record()
    }
}
