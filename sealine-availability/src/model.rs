use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Availability of one cabin type as an operator reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinAvailability {
    pub name: String,
    #[serde(default)]
    pub available_count: u32,
    #[serde(default)]
    pub available_dates: Vec<NaiveDate>,
}

/// Everything one operator reported for a query window. The operator name
/// is the feed's name for a ship and may not match the catalog's spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorAvailability {
    pub operator_name: String,
    #[serde(default)]
    pub total_available_cabins: u32,
    #[serde(default)]
    pub cabins: Vec<CabinAvailability>,
    #[serde(default)]
    pub available_dates: Vec<NaiveDate>,
}

impl OperatorAvailability {
    /// Fold in the same operator's report for another sampled day.
    ///
    /// Dates are unioned; counts take the max across samples, since every
    /// sample describes the same physical inventory on a different day and
    /// summing would multiply-count cabins.
    pub fn merge_sample(&mut self, other: OperatorAvailability) {
        self.total_available_cabins = self.total_available_cabins.max(other.total_available_cabins);
        union_dates(&mut self.available_dates, &other.available_dates);
        for incoming in other.cabins {
            match self.cabins.iter_mut().find(|c| c.name == incoming.name) {
                Some(existing) => {
                    existing.available_count = existing.available_count.max(incoming.available_count);
                    union_dates(&mut existing.available_dates, &incoming.available_dates);
                }
                None => self.cabins.push(incoming),
            }
        }
    }

    /// Drop any reported dates outside the window and prune cabins left
    /// with nothing.
    pub fn restrict_to(&mut self, range: &sealine_shared::DateRange) {
        self.available_dates.retain(|d| range.contains(*d));
        for cabin in &mut self.cabins {
            cabin.available_dates.retain(|d| range.contains(*d));
        }
    }
}

/// One read of the availability feed: per-operator reports plus, in browse
/// mode, the global date pool used as a fallback date source.
#[derive(Debug, Clone, Default)]
pub struct AvailabilitySnapshot {
    pub operators: HashMap<String, OperatorAvailability>,
    pub browse_pool: Vec<NaiveDate>,
}

impl AvailabilitySnapshot {
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    /// Merge another per-day report into this snapshot.
    pub fn merge(&mut self, incoming: HashMap<String, OperatorAvailability>) {
        for (name, report) in incoming {
            match self.operators.get_mut(&name) {
                Some(existing) => existing.merge_sample(report),
                None => {
                    self.operators.insert(name, report);
                }
            }
        }
    }

    /// Recompute the global browse pool as the union of every operator's
    /// reported dates.
    pub fn rebuild_browse_pool(&mut self) {
        let mut pool = Vec::new();
        for operator in self.operators.values() {
            pool.extend_from_slice(&operator.available_dates);
        }
        pool.sort();
        pool.dedup();
        self.browse_pool = pool;
    }
}

pub(crate) fn union_dates(target: &mut Vec<NaiveDate>, incoming: &[NaiveDate]) {
    target.extend_from_slice(incoming);
    target.sort();
    target.dedup();
}
