//! Address search
//!
//! Input is validated before anything else; nothing reaches the network
//! unless the input is long enough, no other search is in flight and a
//! credential is configured. There is no fallback on this path.

use crate::context::AppContext;
use tzfinder_core::error::TzError;
use tzfinder_core::models::TimezoneRecord;

/// Transient notice shown after a successful search
pub const SEARCH_SUCCESS_NOTICE: &str = "Timezone information retrieved successfully!";

#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Found { record: TimezoneRecord, notice: &'static str },
    /// Refused before any network call
    Rejected(TzError),
    /// The provider lookup failed
    Failed(TzError),
    /// Another search was in flight; nothing happened
    Skipped,
}

impl SearchOutcome {
    pub fn record(&self) -> Option<&TimezoneRecord> {
        match self {
            SearchOutcome::Found { record, .. } => Some(record),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&TzError> {
        match self {
            SearchOutcome::Rejected(e) | SearchOutcome::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, SearchOutcome::Skipped)
    }
}

pub async fn search_address(ctx: &AppContext, input: &str) -> SearchOutcome {
    let address = input.trim();

    if let Err(e) = validate_address(address, ctx.config().min_address_length) {
        return SearchOutcome::Rejected(e);
    }

    let Some(_guard) = ctx.session().try_begin() else {
        tracing::debug!(address = %address, "Search already in progress, ignoring request");
        return SearchOutcome::Skipped;
    };

    let Some(provider) = ctx.provider() else {
        return SearchOutcome::Rejected(TzError::MissingCredential);
    };

    match provider.forward_lookup(address).await {
        Ok(record) => {
            ctx.set_last_search_record(record.clone());
            SearchOutcome::Found { record, notice: SEARCH_SUCCESS_NOTICE }
        }
        Err(e) => {
            if e.is_auth() {
                tracing::warn!(status = ?e.http_status(), "Provider rejected the API key during address search");
            } else {
                tracing::error!(error = %e, kind = ?e.kind(), "Address search failed");
            }
            SearchOutcome::Failed(e)
        }
    }
}

/// Check trimmed address input against the minimum length
pub fn validate_address(address: &str, min_length: usize) -> Result<(), TzError> {
    if address.is_empty() {
        return Err(TzError::validation(
            "Please enter an address to search for timezone information.",
        ));
    }

    if address.chars().count() < min_length {
        return Err(TzError::validation(format!(
            "Please enter at least {} characters for the address.",
            min_length
        )));
    }

    Ok(())
}
