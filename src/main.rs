//! HTTP server for the Attendance Engine.
//!
//! Reads `ENGINE_CONFIG_DIR` (default `./config/default`) and `ENGINE_ADDR`
//! (default `127.0.0.1:3000`). Log verbosity follows `RUST_LOG`.

use std::env;

use anyhow::Context;
use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::ConfigLoader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir = env::var("ENGINE_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = env::var("ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("loading configuration from {}", config_dir))?;
    info!(
        program = %config.metadata().name,
        version = %config.metadata().version,
        max_periods = config.rules().max_periods,
        "Configuration loaded"
    );

    let app = create_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(addr = %addr, "Attendance engine listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
