use chrono::NaiveDate;
use sealine_catalog::{CabinCatalogEntry, ShipCatalogEntry};
use serde::{Deserialize, Serialize};

/// A catalog cabin tagged with the dates it can actually sail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedCabin {
    #[serde(flatten)]
    pub cabin: CabinCatalogEntry,
    /// Always a list, possibly empty. Never absent.
    #[serde(default)]
    pub available_dates: Vec<NaiveDate>,
}

/// The reconciled view of one ship: catalog metadata joined with the
/// availability feed. Derived, never persisted; rebuilt from the current
/// snapshots on every search cycle rather than patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedShip {
    #[serde(flatten)]
    pub ship: ShipCatalogEntry,
    pub cabins: Vec<EnrichedCabin>,
    pub is_available: bool,
    pub available_cabin_count: u32,
    /// Minimum real cabin price, or 0 when no cabin carries one.
    pub lowest_valid_price: i64,
    /// True when the ship was synthesized from operator data alone.
    pub synthetic: bool,
}

impl EnrichedShip {
    /// Minimum over cabin prices that are positive and not the upstream
    /// placeholder; 0 if none qualify.
    pub fn compute_lowest_valid_price(cabins: &[EnrichedCabin]) -> i64 {
        cabins
            .iter()
            .filter(|c| c.cabin.has_real_price())
            .map(|c| c.cabin.price)
            .min()
            .unwrap_or(0)
    }
}
