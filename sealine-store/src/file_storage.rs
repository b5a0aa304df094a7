use sealine_itinerary::{ItineraryError, ItineraryLineItem, ItineraryStorage};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Durable itinerary storage over a single JSON file.
///
/// Writes are synchronous and whole-file, last-write-wins. All the store
/// promises is "survives reload, single key, JSON-serializable".
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ItineraryStorage for JsonFileStorage {
    fn read(&self) -> Result<Option<Vec<ItineraryLineItem>>, ItineraryError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No stored itinerary at {:?}", self.path);
                return Ok(None);
            }
            Err(e) => return Err(ItineraryError::Storage(e.to_string())),
        };
        let items = serde_json::from_slice(&raw)?;
        Ok(Some(items))
    }

    fn write(&self, items: &[ItineraryLineItem]) -> Result<(), ItineraryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ItineraryError::Storage(e.to_string()))?;
        }
        let raw = serde_json::to_vec_pretty(items)?;
        fs::write(&self.path, raw).map_err(|e| ItineraryError::Storage(e.to_string()))
    }
}
