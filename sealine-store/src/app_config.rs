use sealine_availability::SamplingConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub itinerary: ItineraryConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// Paths to the JSON seed files standing in for the remote feeds.
#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    pub ships_path: String,
    pub cabins_path: String,
    pub availability_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ItineraryConfig {
    /// Where the reservation list survives reloads.
    pub path: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("SEALINE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
