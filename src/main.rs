//! HTTP server for the Recruiter Ranking Engine.
//!
//! Reads the configuration directory from `RANKING_ENGINE_CONFIG`
//! (default `./config/default`) and the log filter from `RUST_LOG`.

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ranking_engine::api::{AppState, create_router};
use ranking_engine::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "./config/default";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("ranking_engine=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config_dir =
        std::env::var("RANKING_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let config = ConfigLoader::load(&config_dir)?;
    let bind_address = config.server().bind_address.clone();

    info!(
        config_dir = %config_dir,
        engine = %config.engine().name,
        version = %config.engine().version,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;

    info!(bind_address = %bind_address, "Ranking engine listening");
    axum::serve(listener, router).await?;

    Ok(())
}
