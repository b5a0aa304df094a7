//! JSON seed files standing in for the remote catalog and availability
//! backends. The storefront's real feeds live behind HTTP; these sources
//! implement the same traits over local files so the engine runs (and is
//! tested) without the network.

use async_trait::async_trait;
use chrono::NaiveDate;
use sealine_availability::{AvailabilityBackend, CabinAvailability, OperatorAvailability};
use sealine_catalog::{
    CabinCatalogEntry, CabinCatalogSource, ShipCatalogEntry, ShipCatalogSource, SourceResult,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

/// Serves both catalogs from JSON files.
pub struct SeedCatalogSource {
    ships_path: PathBuf,
    cabins_path: PathBuf,
}

impl SeedCatalogSource {
    pub fn new(ships_path: impl Into<PathBuf>, cabins_path: impl Into<PathBuf>) -> Self {
        Self {
            ships_path: ships_path.into(),
            cabins_path: cabins_path.into(),
        }
    }
}

#[async_trait]
impl ShipCatalogSource for SeedCatalogSource {
    async fn fetch_ship_catalog(&self) -> SourceResult<Vec<ShipCatalogEntry>> {
        let raw = tokio::fs::read(&self.ships_path).await?;
        Ok(serde_json::from_slice(&raw)?)
    }
}

#[async_trait]
impl CabinCatalogSource for SeedCatalogSource {
    async fn fetch_cabin_catalog(&self) -> SourceResult<Vec<CabinCatalogEntry>> {
        let raw = tokio::fs::read(&self.cabins_path).await?;
        Ok(serde_json::from_slice(&raw)?)
    }
}

/// One operator's full sailing schedule as the seed file records it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OperatorSeed {
    operator_name: String,
    #[serde(default)]
    cabins: Vec<CabinSeed>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CabinSeed {
    name: String,
    #[serde(default)]
    count: u32,
    #[serde(default)]
    sailing_dates: Vec<NaiveDate>,
}

/// Answers per-window availability queries from a seed schedule, the way
/// the real backend answers a date-scoped request.
pub struct SeedAvailabilityBackend {
    path: PathBuf,
}

impl SeedAvailabilityBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load_seeds(&self) -> SourceResult<Vec<OperatorSeed>> {
        let raw = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&raw)?)
    }
}

#[async_trait]
impl AvailabilityBackend for SeedAvailabilityBackend {
    async fn fetch_window(
        &self,
        date_from: NaiveDate,
        date_to: Option<NaiveDate>,
    ) -> SourceResult<HashMap<String, OperatorAvailability>> {
        let to = date_to.unwrap_or(date_from);
        let seeds = self.load_seeds().await?;

        let mut report = HashMap::new();
        for seed in seeds {
            let cabins: Vec<CabinAvailability> = seed
                .cabins
                .iter()
                .filter_map(|cabin| {
                    let hits: Vec<NaiveDate> = cabin
                        .sailing_dates
                        .iter()
                        .copied()
                        .filter(|d| *d >= date_from && *d <= to)
                        .collect();
                    if hits.is_empty() {
                        return None;
                    }
                    Some(CabinAvailability {
                        name: cabin.name.clone(),
                        available_count: cabin.count,
                        available_dates: hits,
                    })
                })
                .collect();

            if cabins.is_empty() {
                continue;
            }

            let mut available_dates: Vec<NaiveDate> = cabins
                .iter()
                .flat_map(|c| c.available_dates.iter().copied())
                .collect();
            available_dates.sort();
            available_dates.dedup();

            let total_available_cabins = cabins.iter().map(|c| c.available_count).sum();
            report.insert(
                seed.operator_name.clone(),
                OperatorAvailability {
                    operator_name: seed.operator_name,
                    total_available_cabins,
                    cabins,
                    available_dates,
                },
            );
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write_seed(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sealine-seed-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn cleanup(path: &Path) {
        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_catalog_seed_round_trip() {
        let ships = write_seed(
            "ships.json",
            r#"[{ "name": "Aurora Liveaboard", "tripLengthDays": "4D3N" }]"#,
        );
        let cabins = write_seed(
            "cabins.json",
            r#"[{ "cabinId": "c-1", "cabinName": "Master Suite", "boatName": "Aurora Liveaboard" }]"#,
        );
        let source = SeedCatalogSource::new(&ships, &cabins);

        assert_eq!(source.fetch_ship_catalog().await.unwrap().len(), 1);
        assert_eq!(source.fetch_cabin_catalog().await.unwrap().len(), 1);
        cleanup(&ships);
        cleanup(&cabins);
    }

    #[tokio::test]
    async fn test_availability_window_filters_schedule() {
        let seed = write_seed(
            "availability.json",
            r#"[{
                "operatorName": "MV Aurora",
                "cabins": [
                    { "name": "MASTER SUITE", "count": 2,
                      "sailingDates": ["2026-01-05", "2026-01-12", "2026-02-09"] },
                    { "name": "BUDGET TWIN", "count": 4,
                      "sailingDates": ["2026-03-01"] }
                ]
            }]"#,
        );
        let backend = SeedAvailabilityBackend::new(&seed);

        let report = backend
            .fetch_window(date("2026-01-10"), Some(date("2026-01-17")))
            .await
            .unwrap();

        let aurora = report.get("MV Aurora").unwrap();
        // Only the suite sails inside the window.
        assert_eq!(aurora.cabins.len(), 1);
        assert_eq!(aurora.total_available_cabins, 2);
        assert_eq!(aurora.available_dates, vec![date("2026-01-12")]);

        // A window with no sailings reports nothing at all.
        let empty = backend
            .fetch_window(date("2027-01-01"), None)
            .await
            .unwrap();
        assert!(empty.is_empty());
        cleanup(&seed);
    }
}
