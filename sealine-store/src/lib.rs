pub mod app_config;
pub mod file_storage;
pub mod seed;

pub use app_config::Config;
pub use file_storage::JsonFileStorage;
pub use seed::{SeedAvailabilityBackend, SeedCatalogSource};
