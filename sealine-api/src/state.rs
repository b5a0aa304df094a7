use sealine_itinerary::Itinerary;
use sealine_search::SearchEngine;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<SearchEngine>,
    /// The itinerary mutates only behind this lock; every mutation
    /// persists through its storage before the lock is released.
    pub itinerary: Arc<Mutex<Itinerary>>,
}
