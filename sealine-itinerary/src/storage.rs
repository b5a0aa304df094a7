use crate::item::ItineraryLineItem;
use crate::store::ItineraryError;
use std::sync::Mutex;

/// Durable storage for the itinerary list.
///
/// Deliberately synchronous: every mutation persists before it returns so
/// a reload never loses a confirmed reservation. The implementation only
/// needs "survives reload, single key, JSON-serializable" semantics;
/// writes are last-write-wins with no partial-write recovery.
pub trait ItineraryStorage: Send + Sync {
    /// `Ok(None)` means nothing has ever been stored.
    fn read(&self) -> Result<Option<Vec<ItineraryLineItem>>, ItineraryError>;
    fn write(&self, items: &[ItineraryLineItem]) -> Result<(), ItineraryError>;
}

/// Storage that lives for the process only. Used in tests and as the
/// fallback when no durable path is configured.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    slot: Mutex<Option<Vec<ItineraryLineItem>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItineraryStorage for InMemoryStorage {
    fn read(&self) -> Result<Option<Vec<ItineraryLineItem>>, ItineraryError> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| ItineraryError::Storage("storage lock poisoned".to_string()))?;
        Ok(slot.clone())
    }

    fn write(&self, items: &[ItineraryLineItem]) -> Result<(), ItineraryError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| ItineraryError::Storage("storage lock poisoned".to_string()))?;
        *slot = Some(items.to_vec());
        Ok(())
    }
}
