pub mod fetcher;
pub mod model;
pub mod sampling;
pub mod source;

pub use fetcher::AvailabilityFetcher;
pub use model::{AvailabilitySnapshot, CabinAvailability, OperatorAvailability};
pub use sampling::SamplingConfig;
pub use source::{AvailabilityBackend, SourceResult};
