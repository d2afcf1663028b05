//! tzfinder Workflow - Location resolution orchestration
//!
//! Ties the geolocation source, the geocoding provider and the local
//! fallback together into the two user-facing flows: resolving the current
//! location, and searching an address.

pub mod context;
pub mod location;
pub mod search;
pub mod session;
pub mod source;

pub use context::AppContext;
pub use location::{
    CurrentLocationOutcome, LocationState, LocationStatus, LocationWorkflow, StatusIndicator,
};
pub use search::{search_address, validate_address, SearchOutcome, SEARCH_SUCCESS_NOTICE};
pub use session::{SearchGuard, SearchSession};
pub use source::ReportedPosition;
