pub mod item;
pub mod storage;
pub mod store;

pub use item::ItineraryLineItem;
pub use storage::{InMemoryStorage, ItineraryStorage};
pub use store::{Itinerary, ItineraryError, ItineraryTotals, ToggleOutcome};
