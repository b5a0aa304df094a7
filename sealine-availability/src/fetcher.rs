use crate::model::AvailabilitySnapshot;
use crate::sampling::SamplingConfig;
use crate::source::AvailabilityBackend;
use chrono::NaiveDate;
use futures_util::future::join_all;
use sealine_shared::DateRange;
use std::sync::Arc;
use tracing::warn;

/// Resolves cabin availability under a bounded number of backend calls.
///
/// Targeted mode (user picked dates) is a single ranged call. Browse mode
/// probes one day per stride period across the horizon, concurrently, and
/// aggregates whatever comes back; a failed probe never cancels its
/// siblings and a fully failed fetch degrades to an empty snapshot.
pub struct AvailabilityFetcher {
    backend: Arc<dyn AvailabilityBackend>,
    sampling: SamplingConfig,
}

impl AvailabilityFetcher {
    pub fn new(backend: Arc<dyn AvailabilityBackend>, sampling: SamplingConfig) -> Self {
        Self { backend, sampling }
    }

    pub fn sampling(&self) -> &SamplingConfig {
        &self.sampling
    }

    /// One ranged call over `[from, to]`, with reported dates clamped to
    /// the window.
    pub async fn fetch_targeted(&self, range: DateRange) -> AvailabilitySnapshot {
        let mut snapshot = AvailabilitySnapshot::default();
        match self.backend.fetch_window(range.from, Some(range.to)).await {
            Ok(report) => {
                snapshot.merge(report);
                for operator in snapshot.operators.values_mut() {
                    operator.restrict_to(&range);
                }
            }
            Err(e) => {
                warn!(
                    "Availability fetch for {}..{} failed, continuing without it: {}",
                    range.from, range.to, e
                );
            }
        }
        snapshot
    }

    /// Sample the configured horizon starting at `start` (browse mode).
    pub async fn fetch_browse(&self, start: NaiveDate) -> AvailabilitySnapshot {
        let dates = self.sampling.sample_dates(start);
        self.fetch_sampled(&dates).await
    }

    /// Probe an explicit list of days concurrently and merge the reports.
    pub async fn fetch_sampled(&self, dates: &[NaiveDate]) -> AvailabilitySnapshot {
        let probes = dates.iter().map(|date| {
            let backend = Arc::clone(&self.backend);
            let date = *date;
            async move { (date, backend.fetch_window(date, None).await) }
        });

        let mut snapshot = AvailabilitySnapshot::default();
        for (date, result) in join_all(probes).await {
            match result {
                Ok(report) => snapshot.merge(report),
                Err(e) => warn!("Availability probe for {} failed, skipping: {}", date, e),
            }
        }
        snapshot.rebuild_browse_pool();
        snapshot
    }
}
