use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::domain::ChamadoError;

pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, ChamadoError> {
    let connect_options = SqliteConnectOptions::from_str(database_url)
        .map_err(ChamadoError::connection)?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options)
        .await
        .map_err(ChamadoError::connection)?;

    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await
        .map_err(ChamadoError::connection)?;

    tracing::debug!(max_connections, "Database pool opened with WAL mode enabled");

    Ok(pool)
}

/// Opens the pool and synchronizes the schema once. A failed sync is logged
/// and the pool is still returned; only a connection failure is an error.
pub async fn init_db(database_url: &str, max_connections: u32) -> Result<SqlitePool, ChamadoError> {
    let pool = connect(database_url, max_connections).await?;

    match sync_schema(&pool).await {
        Ok(()) => tracing::info!("Database schema synchronized"),
        Err(e) => tracing::error!(error = %e, "Schema sync failed, continuing in degraded mode"),
    }

    Ok(pool)
}

/// Round-trips a trivial query to prove the pool can reach the database.
pub async fn verify(pool: &SqlitePool) -> Result<(), ChamadoError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(ChamadoError::connection)?;

    Ok(())
}

/// Creates the `chamados` table if it is missing. Safe to run repeatedly.
pub async fn sync_schema(pool: &SqlitePool) -> Result<(), ChamadoError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub async fn list_tables(pool: &SqlitePool) -> Result<Vec<String>, ChamadoError> {
    sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .fetch_all(pool)
    .await
    .map_err(ChamadoError::connection)
}
