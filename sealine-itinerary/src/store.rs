use crate::item::ItineraryLineItem;
use crate::storage::ItineraryStorage;
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum ItineraryError {
    #[error("Itinerary storage failed: {0}")]
    Storage(String),

    #[error("Itinerary serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No itinerary line item at index {0}")]
    IndexOutOfRange(usize),
}

/// What [`Itinerary::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Aggregates over the current line items. Zero-priced items count toward
/// `cabin_count` and `guest_count` and add nothing to `price_total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryTotals {
    pub cabin_count: usize,
    pub guest_count: u32,
    pub price_total: i64,
}

/// The user's in-progress reservation list.
///
/// The persisted list is the single source of truth: it is read once when
/// the store is opened and rewritten in full, synchronously, before any
/// mutating call returns. The in-memory copy is only a read-through view.
pub struct Itinerary {
    items: Vec<ItineraryLineItem>,
    storage: Box<dyn ItineraryStorage>,
}

impl Itinerary {
    /// Open the itinerary, reading whatever the storage already holds.
    /// An unreadable store starts empty rather than failing the session.
    pub fn open(storage: Box<dyn ItineraryStorage>) -> Self {
        let items = match storage.read() {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Stored itinerary unreadable, starting empty: {}", e);
                Vec::new()
            }
        };
        Self { items, storage }
    }

    pub fn items(&self) -> &[ItineraryLineItem] {
        &self.items
    }

    pub fn is_present(&self, cabin_name: &str, ship_name: &str, date: NaiveDate) -> bool {
        self.items
            .iter()
            .any(|item| item.matches(cabin_name, ship_name, date))
    }

    pub fn add(&mut self, item: ItineraryLineItem) -> Result<(), ItineraryError> {
        self.items.push(item);
        self.persist()
    }

    /// Remove by position, returning the removed item.
    pub fn remove(&mut self, index: usize) -> Result<ItineraryLineItem, ItineraryError> {
        if index >= self.items.len() {
            return Err(ItineraryError::IndexOutOfRange(index));
        }
        let removed = self.items.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// The sole entry point for reservation buttons: remove the exact
    /// matching triple if present, otherwise add a new line item with the
    /// confirmed guest count.
    pub fn toggle(
        &mut self,
        cabin_name: &str,
        ship_name: &str,
        date: NaiveDate,
        price: i64,
        guest_count_if_adding: u32,
    ) -> Result<ToggleOutcome, ItineraryError> {
        if self.is_present(cabin_name, ship_name, date) {
            self.items
                .retain(|item| !item.matches(cabin_name, ship_name, date));
            self.persist()?;
            return Ok(ToggleOutcome::Removed);
        }

        self.items.push(ItineraryLineItem {
            cabin_name: cabin_name.to_string(),
            ship_name: ship_name.to_string(),
            date,
            price,
            guest_count: guest_count_if_adding,
            added_at_epoch_ms: Utc::now().timestamp_millis(),
        });
        self.persist()?;
        Ok(ToggleOutcome::Added)
    }

    pub fn clear(&mut self) -> Result<(), ItineraryError> {
        self.items.clear();
        self.persist()
    }

    pub fn totals(&self) -> ItineraryTotals {
        ItineraryTotals {
            cabin_count: self.items.len(),
            guest_count: self.items.iter().map(|i| i.guest_count).sum(),
            price_total: self.items.iter().map(|i| i.price).sum(),
        }
    }

    fn persist(&self) -> Result<(), ItineraryError> {
        self.storage.write(&self.items)
    }
}
