use sealine_shared::QueryTicket;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stale-response guard for in-flight searches.
///
/// Every search begins by taking a ticket; starting a newer search bumps
/// the generation, so results that come back for an older ticket are
/// discarded instead of overwriting the fresher view. The itinerary and
/// catalogs are untouched by staleness; only search results are guarded.
#[derive(Debug, Default)]
pub struct QuerySession {
    current: AtomicU64,
}

impl QuerySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new query, superseding any still in flight.
    pub fn begin(&self) -> QueryTicket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        QueryTicket::new(generation)
    }

    /// Is this ticket still the latest issued?
    pub fn is_current(&self, ticket: &QueryTicket) -> bool {
        self.current.load(Ordering::SeqCst) == ticket.generation
    }
}
