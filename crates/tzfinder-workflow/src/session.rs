use std::sync::atomic::{AtomicBool, Ordering};

/// Guards address searches: at most one forward lookup in flight
///
/// A second search while one is active is dropped, not queued.
#[derive(Debug, Default)]
pub struct SearchSession {
    in_flight: AtomicBool,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the session, or `None` when a search is already running
    pub fn try_begin(&self) -> Option<SearchGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SearchGuard { session: self })
    }

    pub fn is_searching(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Clears the in-flight flag when dropped, whatever path the search took
#[derive(Debug)]
pub struct SearchGuard<'a> {
    session: &'a SearchSession,
}

impl Drop for SearchGuard<'_> {
    fn drop(&mut self) {
        self.session.in_flight.store(false, Ordering::Release);
    }
}
