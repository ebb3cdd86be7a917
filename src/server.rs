//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, migrations, sweeper spawning, and the Axum
//! server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;

use crate::application::services::{
    ClickService, ExpirationService, LinkService, StatsService, run_sweeper,
};
use crate::config::Config;
use crate::infrastructure::persistence::{PgClickRepository, PgLinkRepository};
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes the PostgreSQL pool, applies migrations, spawns the
/// expiration sweeper on its own periodic task, and serves the router.
///
/// # Errors
///
/// Returns an error if the database connection, migration run, or server
/// bind fails.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);
    let link_repository = Arc::new(PgLinkRepository::new(Arc::clone(&pool)));
    let click_repository = Arc::new(PgClickRepository::new(Arc::clone(&pool)));

    let link_service = Arc::new(LinkService::new(
        link_repository.clone(),
        config.base_url.clone(),
        chrono::Duration::hours(config.link_ttl_hours),
    ));
    let click_service = Arc::new(ClickService::new(
        link_repository.clone(),
        click_repository.clone(),
    ));
    let stats_service = Arc::new(StatsService::new(
        link_repository.clone(),
        click_repository,
    ));

    let expiration_service = Arc::new(ExpirationService::new(link_repository));
    tokio::spawn(run_sweeper(
        expiration_service,
        Duration::from_secs(config.sweep_interval_seconds),
    ));
    tracing::info!(
        interval_seconds = config.sweep_interval_seconds,
        "Expiration sweeper started"
    );

    let state = AppState::new(link_service, click_service, stats_service);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
