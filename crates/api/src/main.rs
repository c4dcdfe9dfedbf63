use anyhow::Result;
use tracing::info;

use talent_portal_api::{app, config, middleware};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging);
    middleware::metrics::init_metrics()?;

    info!(
        unknown_artist = ?config.filters.unknown_artist,
        "Starting Talent Portal API v{}",
        env!("CARGO_PKG_VERSION")
    );

    let addr = config.socket_addr()?;
    let app = app::create_app(config);

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
