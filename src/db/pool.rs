//! Database connection pool
//!
//! Creates the SQLite connection pool from configuration. For
//! file-based databases the parent directory is created on demand so a
//! fresh checkout starts without manual setup. Foreign keys are
//! enabled per connection; deletion semantics depend on them.

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::config::DatabaseConfig;

/// Create a SQLite connection pool from configuration.
///
/// Accepts `:memory:`, `sqlite:`-prefixed URLs, and bare file paths.
/// File-based databases are created if missing.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    let url = config.url.as_str();
    let in_memory = url == ":memory:" || url == "sqlite::memory:";

    let options = if in_memory {
        SqliteConnectOptions::from_str("sqlite::memory:")
            .context("Failed to parse in-memory database URL")?
    } else {
        let path = url.strip_prefix("sqlite:").unwrap_or(url);

        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create database directory: {:?}", parent)
                })?;
            }
        }

        SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
    }
    .foreign_keys(true);

    // An in-memory database exists per connection, so the pool must
    // hold exactly one for every query to see the same tables.
    let max_connections = if in_memory { 1 } else { 20 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to connect to SQLite database: {}", url))?;

    Ok(pool)
}

/// Create a SQLite in-memory database pool for testing
///
/// This is a convenience function for creating an in-memory SQLite
/// database, useful for unit tests and integration tests.
pub async fn create_test_pool() -> Result<SqlitePool> {
    let config = DatabaseConfig {
        url: ":memory:".to_string(),
    };
    create_pool(&config).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    #[tokio::test]
    async fn test_in_memory_pool_creation() {
        let pool = create_test_pool().await.expect("Failed to create pool");

        sqlx::query("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("Ping should succeed");
    }

    #[tokio::test]
    async fn test_in_memory_pool_shares_one_database() {
        let pool = create_test_pool().await.expect("Failed to create pool");

        sqlx::query("CREATE TABLE t (id INTEGER PRIMARY KEY)")
            .execute(&pool)
            .await
            .expect("Failed to create table");
        sqlx::query("INSERT INTO t (id) VALUES (1)")
            .execute(&pool)
            .await
            .expect("Failed to insert");

        let row = sqlx::query("SELECT COUNT(*) as count FROM t")
            .fetch_one(&pool)
            .await
            .expect("Failed to count");
        let count: i64 = row.get("count");
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_foreign_keys_enabled() {
        let pool = create_test_pool().await.expect("Failed to create pool");

        let row = sqlx::query("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .expect("Failed to query pragma");
        let enabled: i64 = row.get(0);

        assert_eq!(enabled, 1);
    }

    #[tokio::test]
    async fn test_file_pool_creation() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");

        let config = DatabaseConfig {
            url: db_path.to_string_lossy().to_string(),
        };

        let pool = create_pool(&config).await.expect("Failed to create pool");
        sqlx::query("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("Ping should succeed");

        assert!(db_path.exists());
    }

    #[tokio::test]
    async fn test_nested_directory_creation() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("nested").join("dir").join("test.db");

        let config = DatabaseConfig {
            url: db_path.to_string_lossy().to_string(),
        };

        let pool = create_pool(&config).await.expect("Failed to create pool");
        sqlx::query("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("Ping should succeed");

        assert!(db_path.exists());
    }
}
