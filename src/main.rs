//! Application entry point for the `sensorflow-fire-risk` service.
//!
//! This binary orchestrates the startup sequence:
//! - Loading configuration from environment variables or `.env`
//! - Initializing structured logging/tracing
//! - Connecting to PostgreSQL and creating the schema, when `DATABASE_URL` is set
//! - Mounting all API routes via the `routes` gateway (EMBP pattern)
//! - Binding the Axum HTTP server and serving requests
//!
//! # Environment Variables
//! - `DATABASE_URL` (optional) – PostgreSQL connection string
//! - `SENSOR_API_URL` (optional) – telemetry feed; the station fixture otherwise
//! - `BIND_ADDR` (optional) – listen address (default: `0.0.0.0:8080`)
//! - `AXUM_LOG_LEVEL` (optional) – log verbosity (default: `debug`)
//! - `AXUM_SPAN_EVENTS` (optional) – span event mode for tracing
use anyhow::{Context, Result};
use axum::Router;
use dotenvy::dotenv;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use fire_risk::config::{self, mask_db_url};
use fire_risk::routes::{self, AppState};
use fire_risk::telemetry::init_tracing;
use fire_risk::{schema, Config};

// ---

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    dotenv().ok();
    init_tracing();

    let cfg = config::load_from_env()?;
    cfg.log_config();

    let pool = connect(&cfg).await?;

    let app: Router = routes::router(AppState::new(pool, cfg.clone()));

    tracing::info!("Listening on {}", cfg.bind_addr);

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", cfg.bind_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ---

/// Open the connection pool and ensure the schema exists.
///
/// Returns `None` when no database is configured; the service then scores
/// readings without persisting them.
async fn connect(cfg: &Config) -> Result<Option<PgPool>> {
    // ---
    let Some(db_url) = cfg.db_url.as_deref() else {
        tracing::info!("DATABASE_URL not set, persistence disabled");
        return Ok(None);
    };

    tracing::info!("Attempting to connect to database: {}", mask_db_url(db_url));

    let pool = PgPoolOptions::new()
        .max_connections(cfg.db_pool_max)
        .connect(db_url)
        .await
        .with_context(|| format!("Failed to connect to database '{}'", mask_db_url(db_url)))?;

    tracing::info!("Successfully connected to database");

    schema::create_schema(&pool).await?;
    Ok(Some(pool))
}
