use tzfinder_core::TimeFormatter;
use tzfinder_workflow::AppContext;

/// Shared handler state
///
/// One context per server: the in-flight search flag and the last records
/// are shared by every client.
pub struct AppState {
    pub context: AppContext,
    pub formatter: TimeFormatter,
}

impl AppState {
    pub fn new(context: AppContext) -> Self {
        Self { context, formatter: TimeFormatter::new() }
    }

    /// Current local time for a zone name, as shown next to a record
    pub fn local_time(&self, zone: &str) -> String {
        self.formatter.format(Some(zone))
    }
}
