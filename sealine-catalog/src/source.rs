use crate::cabin::CabinCatalogEntry;
use crate::ship::ShipCatalogEntry;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub type SourceResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Source of the full ship catalog. No paging is assumed.
#[async_trait]
pub trait ShipCatalogSource: Send + Sync {
    async fn fetch_ship_catalog(&self) -> SourceResult<Vec<ShipCatalogEntry>>;
}

/// Source of the full cabin catalog.
#[async_trait]
pub trait CabinCatalogSource: Send + Sync {
    async fn fetch_cabin_catalog(&self) -> SourceResult<Vec<CabinCatalogEntry>>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CabinImageDetails {
    #[serde(default)]
    pub images: Vec<String>,
}

/// Optional per-cabin gallery enrichment. Callers tolerate failures
/// silently; a cabin without extra images still renders.
#[async_trait]
pub trait CabinImageSource: Send + Sync {
    async fn fetch_cabin_image_details(&self, cabin_id: &str) -> SourceResult<CabinImageDetails>;
}
