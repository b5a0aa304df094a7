use crate::cabin::CabinCatalogEntry;
use crate::ship::ShipCatalogEntry;
use crate::source::{CabinCatalogSource, CabinImageSource, ShipCatalogSource};
use std::sync::Arc;
use tracing::{debug, warn};

/// One consistent read of both catalogs. Replaced wholesale on reload,
/// never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub ships: Vec<ShipCatalogEntry>,
    pub cabins: Vec<CabinCatalogEntry>,
}

/// Fetches the ship and cabin catalogs together. A failed feed degrades to
/// an empty list so the rest of the pipeline still renders.
pub struct CatalogLoader {
    ships: Arc<dyn ShipCatalogSource>,
    cabins: Arc<dyn CabinCatalogSource>,
    images: Option<Arc<dyn CabinImageSource>>,
}

impl CatalogLoader {
    pub fn new(ships: Arc<dyn ShipCatalogSource>, cabins: Arc<dyn CabinCatalogSource>) -> Self {
        Self {
            ships,
            cabins,
            images: None,
        }
    }

    pub fn with_image_source(mut self, images: Arc<dyn CabinImageSource>) -> Self {
        self.images = Some(images);
        self
    }

    /// Fetch both catalogs concurrently.
    pub async fn load(&self) -> CatalogSnapshot {
        let (ships, cabins) = tokio::join!(
            self.ships.fetch_ship_catalog(),
            self.cabins.fetch_cabin_catalog()
        );

        let ships = ships.unwrap_or_else(|e| {
            warn!("Ship catalog fetch failed, continuing without it: {}", e);
            Vec::new()
        });
        let cabins = cabins.unwrap_or_else(|e| {
            warn!("Cabin catalog fetch failed, continuing without it: {}", e);
            Vec::new()
        });

        CatalogSnapshot { ships, cabins }
    }

    /// Best-effort gallery enrichment. Each cabin that fails keeps its
    /// main image only.
    pub async fn enrich_cabin_images(&self, snapshot: &mut CatalogSnapshot) {
        let Some(images) = &self.images else {
            return;
        };
        for cabin in &mut snapshot.cabins {
            match images.fetch_cabin_image_details(&cabin.cabin_id).await {
                Ok(details) => cabin.images = details.images,
                Err(e) => {
                    debug!("Image details unavailable for cabin {}: {}", cabin.cabin_id, e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{CabinImageDetails, SourceResult};
    use async_trait::async_trait;

    struct FixtureShips(Vec<ShipCatalogEntry>);

    #[async_trait]
    impl ShipCatalogSource for FixtureShips {
        async fn fetch_ship_catalog(&self) -> SourceResult<Vec<ShipCatalogEntry>> {
            Ok(self.0.clone())
        }
    }

    struct FixtureCabins(Vec<CabinCatalogEntry>);

    #[async_trait]
    impl CabinCatalogSource for FixtureCabins {
        async fn fetch_cabin_catalog(&self) -> SourceResult<Vec<CabinCatalogEntry>> {
            Ok(self.0.clone())
        }
    }

    struct FailingShips;

    #[async_trait]
    impl ShipCatalogSource for FailingShips {
        async fn fetch_ship_catalog(&self) -> SourceResult<Vec<ShipCatalogEntry>> {
            Err("upstream 503".into())
        }
    }

    struct FailingImages;

    #[async_trait]
    impl CabinImageSource for FailingImages {
        async fn fetch_cabin_image_details(&self, _: &str) -> SourceResult<CabinImageDetails> {
            Err("timeout".into())
        }
    }

    fn ship(name: &str) -> ShipCatalogEntry {
        serde_json::from_str(&format!(r#"{{ "name": "{}" }}"#, name)).unwrap()
    }

    fn cabin(id: &str, boat: &str) -> CabinCatalogEntry {
        serde_json::from_str(&format!(
            r#"{{ "cabinId": "{}", "cabinName": "Twin", "boatName": "{}" }}"#,
            id, boat
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_load_joins_both_feeds() {
        let loader = CatalogLoader::new(
            Arc::new(FixtureShips(vec![ship("Aurora Liveaboard")])),
            Arc::new(FixtureCabins(vec![cabin("c-1", "Aurora Liveaboard")])),
        );
        let snapshot = loader.load().await;
        assert_eq!(snapshot.ships.len(), 1);
        assert_eq!(snapshot.cabins.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_feed_degrades_to_empty() {
        let loader = CatalogLoader::new(
            Arc::new(FailingShips),
            Arc::new(FixtureCabins(vec![cabin("c-1", "Aurora Liveaboard")])),
        );
        let snapshot = loader.load().await;
        assert!(snapshot.ships.is_empty());
        // The surviving feed is still aggregated.
        assert_eq!(snapshot.cabins.len(), 1);
    }

    #[tokio::test]
    async fn test_image_enrichment_failures_are_silent() {
        let loader = CatalogLoader::new(
            Arc::new(FixtureShips(vec![])),
            Arc::new(FixtureCabins(vec![cabin("c-1", "Aurora Liveaboard")])),
        )
        .with_image_source(Arc::new(FailingImages));

        let mut snapshot = loader.load().await;
        loader.enrich_cabin_images(&mut snapshot).await;
        assert!(snapshot.cabins[0].images.is_empty());
    }
}
