use crate::model::OperatorAvailability;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;

pub type SourceResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// The raw per-window availability client. One call covers either a single
/// day (`date_to = None`) or a contiguous range; the fetcher decides how
/// many windows to probe.
#[async_trait]
pub trait AvailabilityBackend: Send + Sync {
    async fn fetch_window(
        &self,
        date_from: NaiveDate,
        date_to: Option<NaiveDate>,
    ) -> SourceResult<HashMap<String, OperatorAvailability>>;
}
