//! Lifecycle of the process-wide database handle.

use std::path::Path;
use std::time::Duration;

use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::{DatabaseConnection, DbErr, RuntimeErr, SqlxSqliteConnector};
use sea_orm_migration::MigratorTrait;
use tokio::sync::RwLock;
use tracing::info;

use super::error::StoreError;
use super::migrator::Migrator;

/// Owns at most one pooled connection to the SQLite database.
///
/// `connect` is idempotent; until it has been called, `get_connection`
/// fails with [`StoreError::NotConnected`]. Foreign-key enforcement is set
/// on the connect options so every pooled connection honors cascade rules.
pub struct Database {
    db_url: String,
    max_connections: u32,
    min_connections: u32,
    conn: RwLock<Option<DatabaseConnection>>,
}

impl Database {
    #[must_use]
    pub fn new(db_url: &str) -> Self {
        Self::with_pool_options(db_url, 5, 1)
    }

    #[must_use]
    pub fn with_pool_options(db_url: &str, max_connections: u32, min_connections: u32) -> Self {
        Self {
            db_url: db_url.to_owned(),
            max_connections,
            min_connections,
            conn: RwLock::new(None),
        }
    }

    /// Opens the pool, enables foreign-key enforcement, applies migrations
    /// and caches the handle. Calling it again returns the cached handle.
    pub async fn connect(&self) -> Result<DatabaseConnection, StoreError> {
        let mut guard = self.conn.write().await;
        if let Some(conn) = guard.as_ref() {
            return Ok(conn.clone());
        }

        let memory = self.db_url.contains(":memory:");

        let base_options = if memory {
            SqliteConnectOptions::new().in_memory(true)
        } else {
            let path = self
                .db_url
                .trim_start_matches("sqlite://")
                .trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            SqliteConnectOptions::new()
                .filename(path)
                .create_if_missing(true)
        };
        let options = base_options.foreign_keys(true);

        // An in-memory database only exists for as long as its one
        // connection does, so the pool must never grow or reap it.
        let pool_options = if memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new()
                .max_connections(self.max_connections)
                .min_connections(self.min_connections)
                .acquire_timeout(Duration::from_secs(10))
                .idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(600))
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Database(DbErr::Conn(RuntimeErr::SqlxError(e))))?;

        let conn = SqlxSqliteConnector::from_sqlx_sqlite_pool(pool);

        Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            self.min_connections, self.max_connections
        );

        *guard = Some(conn.clone());
        Ok(conn)
    }

    /// Returns the live handle, or fails when `connect` has not run yet.
    pub async fn get_connection(&self) -> Result<DatabaseConnection, StoreError> {
        self.conn
            .read()
            .await
            .as_ref()
            .cloned()
            .ok_or(StoreError::NotConnected)
    }

    /// Closes the pool. Safe to call when already disconnected.
    pub async fn disconnect(&self) -> Result<(), StoreError> {
        let mut guard = self.conn.write().await;
        if let Some(conn) = guard.take() {
            conn.close().await.map_err(StoreError::from)?;
            info!("Database connection closed");
        }
        Ok(())
    }

    pub async fn is_connected(&self) -> bool {
        self.conn.read().await.is_some()
    }
}
