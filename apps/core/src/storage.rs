//! Durable local state.
//!
//! A flat key/value namespace mirroring the browser's local storage: each key
//! holds one string value that is read at startup and replaced wholesale on
//! every change.

use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

/// Key of the persisted theme preference.
pub const THEME_KEY: &str = "theme";
/// Key of the persisted feed snapshot.
pub const FEED_KEY: &str = "ra-feed-v1";

/// Whole-value key/value storage.
#[async_trait]
pub trait LocalStore: Send + Sync + 'static {
    /// Returns the stored value, or `None` when the key was never written.
    async fn get_item(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Replaces the value stored under `key`.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// SQLite-backed store, one row per key.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Opens (or creates) the database file and applies the schema.
    pub async fn open(db_path: &Path) -> Result<Self, AppError> {
        let db_url = format!("sqlite://{}", db_path.to_string_lossy());
        info!("Initializing local store at: {}", db_url);

        let options = SqliteConnectOptions::from_str(&db_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    /// Private in-memory database. A single connection keeps every query on the same database.
    pub async fn in_memory() -> Result<Self, AppError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> Result<Self, AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS local_state (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&pool)
        .await?;

        info!("Local store ready.");
        Ok(Self { pool })
    }
}

#[async_trait]
impl LocalStore for SqliteStore {
    #[instrument(skip(self))]
    async fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        let value: Option<(String,)> =
            sqlx::query_as("SELECT value FROM local_state WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
        Ok(value.map(|(v,)| v))
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO local_state (key, value, updated_at)
            VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().timestamp_millis())
        .execute(&self.pool)
        .await?;
        debug!("Persisted {}", key);
        Ok(())
    }
}

/// Volatile store used when no database is available, and in tests.
#[derive(Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LocalStore for MemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
