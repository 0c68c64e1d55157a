//! SQLite adapters.
//!
//! `sqlx::migrate!("./migrations")` embeds the migration files at compile
//! time; the database location comes from configuration at runtime.

mod lead_repository;

pub use lead_repository::SqliteLeadRepository;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::DomainError;

/// Opens (creating if missing) the configured database and runs pending
/// migrations when enabled.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, DomainError> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| DomainError::database(format!("Invalid database URL: {}", e)))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_with(options)
        .await
        .map_err(|e| DomainError::database(format!("Failed to connect to SQLite: {}", e)))?;

    if config.run_migrations {
        migrate(&pool).await?;
    }

    Ok(pool)
}

/// Single-connection in-memory database with the schema applied.
///
/// Every connection to `sqlite::memory:` is a separate database, so the
/// pool is pinned to one connection that is never recycled.
pub async fn connect_in_memory() -> Result<SqlitePool, DomainError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .map_err(|e| DomainError::database(format!("Invalid database URL: {}", e)))?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .map_err(|e| DomainError::database(format!("Failed to open in-memory SQLite: {}", e)))?;

    migrate(&pool).await?;
    Ok(pool)
}

async fn migrate(pool: &SqlitePool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to run migrations: {}", e)))
}
