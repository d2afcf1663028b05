use crate::error::{Result, TzError};
use crate::ports::PositionOptions;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default geocoding endpoint root
pub const DEFAULT_BASE_URL: &str = "https://api.geoapify.com/v1/geocode";

/// Key value shipped in sample configs; treated as "not configured"
pub const API_KEY_PLACEHOLDER: &str = "YOUR_GEOAPIFY_API_KEY_HERE";

pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_MIN_ADDRESS_LENGTH: usize = 3;
pub const DEFAULT_MAX_POSITION_AGE_MS: u64 = 300_000;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for tzfinder
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub api_key: ConfigValue<Option<String>>,
    pub base_url: ConfigValue<String>,
    pub request_timeout_ms: ConfigValue<u64>,
    pub min_address_length: ConfigValue<usize>,
    pub high_accuracy: ConfigValue<bool>,
    pub geolocation_timeout_ms: ConfigValue<u64>,
    pub max_position_age_ms: ConfigValue<u64>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            api_key: ConfigValue::new(None, ConfigSource::Default),
            base_url: ConfigValue::new(DEFAULT_BASE_URL.to_string(), ConfigSource::Default),
            request_timeout_ms: ConfigValue::new(DEFAULT_REQUEST_TIMEOUT_MS, ConfigSource::Default),
            min_address_length: ConfigValue::new(DEFAULT_MIN_ADDRESS_LENGTH, ConfigSource::Default),
            high_accuracy: ConfigValue::new(true, ConfigSource::Default),
            geolocation_timeout_ms: ConfigValue::new(
                DEFAULT_REQUEST_TIMEOUT_MS,
                ConfigSource::Default,
            ),
            max_position_age_ms: ConfigValue::new(
                DEFAULT_MAX_POSITION_AGE_MS,
                ConfigSource::Default,
            ),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| TzError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| TzError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(api_key) = file_config.api_key {
            self.api_key.update(Some(api_key), ConfigSource::File);
        }

        if let Some(base_url) = file_config.base_url {
            self.base_url.update(base_url, ConfigSource::File);
        }

        if let Some(timeout) = file_config.request_timeout_ms {
            self.request_timeout_ms.update(timeout, ConfigSource::File);
        }

        if let Some(min_len) = file_config.min_address_length {
            self.min_address_length.update(min_len, ConfigSource::File);
        }

        if let Some(high_accuracy) = file_config.high_accuracy {
            self.high_accuracy.update(high_accuracy, ConfigSource::File);
        }

        if let Some(timeout) = file_config.geolocation_timeout_ms {
            self.geolocation_timeout_ms.update(timeout, ConfigSource::File);
        }

        if let Some(age) = file_config.max_position_age_ms {
            self.max_position_age_ms.update(age, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load the file if it exists, otherwise keep the current values
    pub fn load_from_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        if path.as_ref().exists() {
            self.load_from_file(path)
        } else {
            tracing::debug!(path = %path.as_ref().display(), "No config file, using defaults");
            Ok(self)
        }
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // TZFINDER_API_KEY
        if let Ok(api_key) = env::var("TZFINDER_API_KEY") {
            self.api_key.update(Some(api_key), ConfigSource::Environment);
        }

        // TZFINDER_BASE_URL
        if let Ok(base_url) = env::var("TZFINDER_BASE_URL") {
            self.base_url.update(base_url, ConfigSource::Environment);
        }

        // TZFINDER_REQUEST_TIMEOUT_MS
        if let Some(timeout) = parse_env::<u64>("TZFINDER_REQUEST_TIMEOUT_MS", "milliseconds") {
            self.request_timeout_ms.update(timeout, ConfigSource::Environment);
        }

        // TZFINDER_MIN_ADDRESS_LENGTH
        if let Some(min_len) = parse_env::<usize>("TZFINDER_MIN_ADDRESS_LENGTH", "character count")
        {
            self.min_address_length.update(min_len, ConfigSource::Environment);
        }

        // TZFINDER_HIGH_ACCURACY
        if let Ok(value) = env::var("TZFINDER_HIGH_ACCURACY") {
            match parse_bool(&value) {
                Ok(flag) => self.high_accuracy.update(flag, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid TZFINDER_HIGH_ACCURACY value '{}': expected true or false",
                    value
                ),
            }
        }

        // TZFINDER_GEOLOCATION_TIMEOUT_MS
        if let Some(timeout) = parse_env::<u64>("TZFINDER_GEOLOCATION_TIMEOUT_MS", "milliseconds")
        {
            self.geolocation_timeout_ms.update(timeout, ConfigSource::Environment);
        }

        // TZFINDER_MAX_POSITION_AGE_MS
        if let Some(age) = parse_env::<u64>("TZFINDER_MAX_POSITION_AGE_MS", "milliseconds") {
            self.max_position_age_ms.update(age, ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(api_key) = overrides.api_key {
            self.api_key.update(Some(api_key), ConfigSource::Cli);
        }

        if let Some(base_url) = overrides.base_url {
            self.base_url.update(base_url, ConfigSource::Cli);
        }

        if let Some(timeout) = overrides.request_timeout_ms {
            self.request_timeout_ms.update(timeout, ConfigSource::Cli);
        }

        if let Some(min_len) = overrides.min_address_length {
            self.min_address_length.update(min_len, ConfigSource::Cli);
        }
    }

    /// The usable credential, if any
    pub fn credential(&self) -> Option<&str> {
        usable_credential(self.api_key.value.as_deref())
    }

    /// Flatten into the values the rest of the system consumes
    pub fn resolve(&self) -> AppConfig {
        AppConfig {
            provider_api_key: self.credential().map(str::to_string),
            base_url: self.base_url.value.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_millis(self.request_timeout_ms.value),
            min_address_length: self.min_address_length.value,
            position: PositionOptions {
                high_accuracy: self.high_accuracy.value,
                timeout: Duration::from_millis(self.geolocation_timeout_ms.value),
                maximum_age: Duration::from_millis(self.max_position_age_ms.value),
            },
        }
    }

    /// Get all configuration values as a map for inspection
    ///
    /// The API key is masked.
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        let key_display = match self.credential() {
            Some(key) => mask_credential(key),
            None => "(not configured)".to_string(),
        };
        map.insert("api_key".to_string(), (key_display, self.api_key.source));

        map.insert("base_url".to_string(), (self.base_url.value.clone(), self.base_url.source));

        map.insert(
            "request_timeout_ms".to_string(),
            (self.request_timeout_ms.value.to_string(), self.request_timeout_ms.source),
        );

        map.insert(
            "min_address_length".to_string(),
            (self.min_address_length.value.to_string(), self.min_address_length.source),
        );

        map.insert(
            "high_accuracy".to_string(),
            (self.high_accuracy.value.to_string(), self.high_accuracy.source),
        );

        map.insert(
            "geolocation_timeout_ms".to_string(),
            (self.geolocation_timeout_ms.value.to_string(), self.geolocation_timeout_ms.source),
        );

        map.insert(
            "max_position_age_ms".to_string(),
            (self.max_position_age_ms.value.to_string(), self.max_position_age_ms.source),
        );

        map
    }
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `None` when no usable credential is configured
    pub provider_api_key: Option<String>,
    pub base_url: String,
    pub request_timeout: Duration,
    pub min_address_length: usize,
    pub position: PositionOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        LayeredConfig::with_defaults().resolve()
    }
}

impl AppConfig {
    pub fn has_credential(&self) -> bool {
        self.provider_api_key.is_some()
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    api_key: Option<String>,
    base_url: Option<String>,
    request_timeout_ms: Option<u64>,
    min_address_length: Option<usize>,
    high_accuracy: Option<bool>,
    geolocation_timeout_ms: Option<u64>,
    max_position_age_ms: Option<u64>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub request_timeout_ms: Option<u64>,
    pub min_address_length: Option<usize>,
}

/// Treat empty and placeholder keys as absent
pub fn usable_credential(key: Option<&str>) -> Option<&str> {
    key.map(str::trim).filter(|k| !k.is_empty() && *k != API_KEY_PLACEHOLDER)
}

/// Parse a boolean flag from string
pub fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(TzError::ConfigInvalid {
            key: "high_accuracy".to_string(),
            reason: format!("Invalid boolean: {}. Use true or false", s),
        }),
    }
}

fn parse_env<T: std::str::FromStr>(var: &str, expected: &str) -> Option<T> {
    let raw = env::var(var).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Invalid {} value '{}': expected {}", var, raw, expected);
            None
        }
    }
}

fn mask_credential(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    format!("{}****", visible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.api_key.value, None);
        assert_eq!(config.base_url.value, DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_ms.value, 10_000);
        assert_eq!(config.min_address_length.value, 3);
        assert_eq!(config.max_position_age_ms.value, 300_000);
        assert_eq!(config.base_url.source, ConfigSource::Default);
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        // File should override default
        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // CLI should override environment
        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
api_key = "abc123"
base_url = "http://localhost:8080/v1/geocode/"
request_timeout_ms = 2500
min_address_length = 5
high_accuracy = false
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.api_key.value.as_deref(), Some("abc123"));
        assert_eq!(config.api_key.source, ConfigSource::File);
        assert_eq!(config.request_timeout_ms.value, 2500);
        assert_eq!(config.min_address_length.value, 5);
        assert!(!config.high_accuracy.value);

        let resolved = config.resolve();
        assert_eq!(resolved.base_url, "http://localhost:8080/v1/geocode");
        assert_eq!(resolved.request_timeout, Duration::from_millis(2500));
        assert!(!resolved.position.high_accuracy);
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "request_timeout_ms = \"soon\"").unwrap();

        let err = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, TzError::ConfigInvalid { .. }));
    }

    #[test]
    fn test_missing_optional_file_keeps_defaults() {
        let config = LayeredConfig::with_defaults()
            .load_from_optional_file("/nonexistent/tzfinder/config.toml")
            .unwrap();
        assert_eq!(config.base_url.source, ConfigSource::Default);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        let overrides = CliConfigOverrides {
            api_key: Some("cli-key".to_string()),
            request_timeout_ms: Some(500),
            ..Default::default()
        };

        config.update_from_cli(overrides);

        assert_eq!(config.credential(), Some("cli-key"));
        assert_eq!(config.api_key.source, ConfigSource::Cli);
        assert_eq!(config.request_timeout_ms.value, 500);
        assert_eq!(config.base_url.source, ConfigSource::Default);
    }

    #[test]
    fn test_placeholder_and_empty_keys_are_not_credentials() {
        assert_eq!(usable_credential(None), None);
        assert_eq!(usable_credential(Some("")), None);
        assert_eq!(usable_credential(Some("   ")), None);
        assert_eq!(usable_credential(Some(API_KEY_PLACEHOLDER)), None);
        assert_eq!(usable_credential(Some("real-key")), Some("real-key"));

        let mut config = LayeredConfig::with_defaults();
        config.api_key.update(Some(API_KEY_PLACEHOLDER.to_string()), ConfigSource::File);
        assert!(!config.resolve().has_credential());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn test_inspection_map_masks_key() {
        let mut config = LayeredConfig::with_defaults();
        config.api_key.update(Some("38d7a9f23bfc".to_string()), ConfigSource::Environment);
        let map = config.to_inspection_map();

        let (key, source) = &map["api_key"];
        assert_eq!(key, "38d7****");
        assert_eq!(*source, ConfigSource::Environment);
        assert!(map.contains_key("base_url"));
        assert!(map.contains_key("max_position_age_ms"));
    }
}
