use crate::filter::filter_and_sort;
use crate::model::EnrichedShip;
use crate::reconcile::reconcile;
use crate::session::QuerySession;
use chrono::NaiveDate;
use sealine_availability::AvailabilityFetcher;
use sealine_catalog::CatalogLoader;
use sealine_core::criteria::SearchCriteria;
use sealine_shared::QueryTicket;
use std::sync::Arc;
use tracing::{debug, info};

/// One search cycle's result. `stale` means a newer query superseded this
/// one while its fetches were in flight; its ships must be discarded.
#[derive(Debug)]
pub struct SearchOutcome {
    pub ticket: QueryTicket,
    pub stale: bool,
    pub ships: Vec<EnrichedShip>,
}

/// Ties the whole pipeline together: fan out the catalog and availability
/// fetches, reconcile, then filter and sort. Every failure below this
/// point has already degraded to an empty snapshot, so a search never
/// errors; the worst case is an empty ship list.
pub struct SearchEngine {
    catalog: CatalogLoader,
    availability: AvailabilityFetcher,
    session: Arc<QuerySession>,
}

impl SearchEngine {
    pub fn new(catalog: CatalogLoader, availability: AvailabilityFetcher) -> Self {
        Self {
            catalog,
            availability,
            session: Arc::new(QuerySession::new()),
        }
    }

    /// Share a query session, e.g. so UI teardown can supersede in-flight
    /// searches from outside the engine.
    pub fn with_session(mut self, session: Arc<QuerySession>) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> Arc<QuerySession> {
        Arc::clone(&self.session)
    }

    pub async fn search(&self, criteria: &SearchCriteria, today: NaiveDate) -> SearchOutcome {
        let ticket = self.session.begin();

        let (mut catalog_snapshot, availability_snapshot) = match criteria.date_range {
            Some(range) => {
                tokio::join!(self.catalog.load(), self.availability.fetch_targeted(range))
            }
            None => tokio::join!(self.catalog.load(), self.availability.fetch_browse(today)),
        };

        if !self.session.is_current(&ticket) {
            debug!("Query {} superseded in flight, discarding results", ticket.id);
            return SearchOutcome {
                ticket,
                stale: true,
                ships: Vec::new(),
            };
        }

        self.catalog.enrich_cabin_images(&mut catalog_snapshot).await;

        let ships = reconcile(
            &catalog_snapshot,
            &availability_snapshot,
            criteria.date_range.as_ref(),
        );
        let ships = filter_and_sort(ships, criteria);
        info!(
            "Query {} resolved: {} ships from {} catalog entries, {} operators",
            ticket.id,
            ships.len(),
            catalog_snapshot.ships.len(),
            availability_snapshot.operators.len()
        );

        SearchOutcome {
            ticket,
            stale: false,
            ships,
        }
    }
}
