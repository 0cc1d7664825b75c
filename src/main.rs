use photo_search::app;
use photo_search::state::{AppConfig, AppState};
use photosearch::{PhotoSearch, PxFetcher};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    photo_search::init_tracing();

    tracing::info!("Log initialized");

    let config = AppConfig::from_env()?;
    tracing::info!("Using photo search API at {}", config.api_url);

    let http_client = photo_search::http_client()?;
    let search = PhotoSearch::new(PxFetcher::new(http_client), config.consumer_key.clone())
        .with_api_url(config.api_url.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let app_state = AppState { config, search };

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Photo search gateway listening on {}", addr);

    let router = app(app_state);
    axum::serve(listener, router).await?;

    Ok(())
}
