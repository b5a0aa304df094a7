pub mod cabin;
pub mod loader;
pub mod ship;
pub mod source;

pub use cabin::{CabinCatalogEntry, CabinFacilities};
pub use loader::{CatalogLoader, CatalogSnapshot};
pub use ship::ShipCatalogEntry;
pub use source::{
    CabinCatalogSource, CabinImageDetails, CabinImageSource, ShipCatalogSource, SourceResult,
};
