use std::env;

/// API server configuration loaded from environment variables
///
/// Provider settings come from the shared layered configuration; this only
/// covers how the server itself listens.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: 3001, cors_origin: "http://localhost:3000".to_string() }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env::var("TZFINDER_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let cors_origin = env::var("TZFINDER_CORS_ORIGIN").unwrap_or(defaults.cors_origin);

        Self { port, cors_origin }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = ApiConfig { port: 8080, ..ApiConfig::default() };
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }
}
