#![allow(dead_code)]

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tierdns_domain::config::DatabaseConfig;
use tierdns_infrastructure::database::run_migrations;

/// Single-connection in-memory database with the schema applied. One connection
/// so every query sees the same memory database.
pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

pub fn fast_flush_config() -> DatabaseConfig {
    DatabaseConfig {
        query_log_max_batch_size: 10,
        query_log_flush_interval_ms: 10,
        ..DatabaseConfig::default()
    }
}
