//! Expensa API Server
//!
//! Main entry point for the expense approval backend.

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use axum::http::StatusCode;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use expensa_api::{AppState, create_router};
use expensa_db::connect_with;
use expensa_shared::{AppConfig, JwtConfig, JwtService, config::LogConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.log);

    let db = connect_with(&config.database)
        .await
        .context("failed to connect to database")?;
    info!(max_connections = config.database.max_connections, "Connected to database");

    let jwt_service = JwtService::new(JwtConfig::from(&config.jwt));

    let state = AppState {
        db: Arc::new(db),
        jwt_service: Arc::new(jwt_service),
    };

    let app = create_router(state).layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        Duration::from_secs(config.server.request_timeout_secs),
    ));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log.filter.as_str().into());
    let registry = tracing_subscriber::registry().with(filter);

    if log.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
