use crate::location::LocationStatus;
use crate::session::SearchSession;
use std::sync::{Arc, PoisonError, RwLock};
use tzfinder_core::config::AppConfig;
use tzfinder_core::fallback::FallbackResolver;
use tzfinder_core::models::TimezoneRecord;
use tzfinder_core::ports::GeocodingProvider;
use tzfinder_geocoder::GeoClient;

/// Everything the workflows share: configuration, collaborators, the
/// search guard and the last resolved records
pub struct AppContext {
    config: AppConfig,
    provider: Option<Arc<dyn GeocodingProvider>>,
    fallback: FallbackResolver,
    session: SearchSession,
    current: RwLock<Option<TimezoneRecord>>,
    last_search: RwLock<Option<TimezoneRecord>>,
    location_status: RwLock<LocationStatus>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        provider: Option<Arc<dyn GeocodingProvider>>,
        fallback: FallbackResolver,
    ) -> Self {
        Self {
            config,
            provider,
            fallback,
            session: SearchSession::new(),
            current: RwLock::new(None),
            last_search: RwLock::new(None),
            location_status: RwLock::new(LocationStatus::idle()),
        }
    }

    /// Context backed by the Geoapify client and the system clock
    pub fn from_config(config: AppConfig) -> Self {
        let provider = GeoClient::from_config(&config)
            .map(|client| Arc::new(client) as Arc<dyn GeocodingProvider>);

        if provider.is_none() {
            tracing::warn!(
                "No geocoding API key configured; current location will use local timezone detection and address search is disabled"
            );
        }

        Self::new(config, provider, FallbackResolver::system())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The provider, when a usable credential is configured
    pub fn provider(&self) -> Option<&Arc<dyn GeocodingProvider>> {
        if self.config.has_credential() {
            self.provider.as_ref()
        } else {
            None
        }
    }

    pub fn fallback(&self) -> &FallbackResolver {
        &self.fallback
    }

    pub fn session(&self) -> &SearchSession {
        &self.session
    }

    pub fn is_searching(&self) -> bool {
        self.session.is_searching()
    }

    pub fn current_record(&self) -> Option<TimezoneRecord> {
        self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn last_search_record(&self) -> Option<TimezoneRecord> {
        self.last_search.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn location_status(&self) -> LocationStatus {
        self.location_status.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub(crate) fn set_current_record(&self, record: TimezoneRecord) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(record);
    }

    pub(crate) fn set_last_search_record(&self, record: TimezoneRecord) {
        *self.last_search.write().unwrap_or_else(PoisonError::into_inner) = Some(record);
    }

    pub(crate) fn set_location_status(&self, status: LocationStatus) {
        *self.location_status.write().unwrap_or_else(PoisonError::into_inner) = status;
    }
}
