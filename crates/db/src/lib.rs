//! Database access for the `usuarios` service.
//!
//! Owns the connection provider (configuration, pool, liveness checks,
//! migrations), the row models and the repository layer.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Connection, PgConnection};

pub mod config;
pub mod models;
pub mod repositories;

pub use config::DbConfig;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from the injected configuration.
///
/// Every checkout is pinged before it is handed to a caller, so a dead
/// connection surfaces as an acquire error instead of a failed statement.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    tracing::debug!(
        max_connections = config.max_connections,
        acquire_timeout_secs = config.acquire_timeout_secs,
        "Opening database pool",
    );
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .test_before_acquire(true)
        .connect_with(config.connect_options()?)
        .await
}

/// Open a single dedicated connection and verify it with a round-trip ping.
pub async fn connect(config: &DbConfig) -> Result<PgConnection, sqlx::Error> {
    connect_with(&config.connect_options()?).await
}

/// Like [`connect`], for callers that already hold connect options.
pub async fn connect_with(options: &PgConnectOptions) -> Result<PgConnection, sqlx::Error> {
    let mut conn = PgConnection::connect_with(options).await?;
    conn.ping().await?;
    Ok(conn)
}

/// Round-trip `SELECT 1` through the pool.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
