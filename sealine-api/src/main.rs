use sealine_api::{app, AppState};
use sealine_availability::AvailabilityFetcher;
use sealine_catalog::CatalogLoader;
use sealine_itinerary::Itinerary;
use sealine_search::SearchEngine;
use sealine_store::{JsonFileStorage, SeedAvailabilityBackend, SeedCatalogSource};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sealine_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = sealine_store::Config::load().expect("Failed to load config");
    tracing::info!("Starting Sealine API on port {}", config.server.port);

    let catalog_source = Arc::new(SeedCatalogSource::new(
        &config.data.ships_path,
        &config.data.cabins_path,
    ));
    let catalog = CatalogLoader::new(catalog_source.clone(), catalog_source);

    let backend = Arc::new(SeedAvailabilityBackend::new(&config.data.availability_path));
    let availability = AvailabilityFetcher::new(backend, config.sampling);

    let itinerary = Itinerary::open(Box::new(JsonFileStorage::new(&config.itinerary.path)));

    let state = AppState {
        engine: Arc::new(SearchEngine::new(catalog, availability)),
        itinerary: Arc::new(Mutex::new(itinerary)),
    };

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
