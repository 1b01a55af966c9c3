mod writer;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tierdns_application::ports::QueryLogRepository;
use tierdns_domain::{config::DatabaseConfig, DomainError, QueryLog, QueryType};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use writer::QueryLogEntry;

type QueryLogRow = (i64, String, String, String, String, String);

/// Query log backed by the `dns_queries` table.
///
/// `log_query_sync` only enqueues; a background task drains the channel and
/// writes batches, so resolution never waits on the database.
pub struct SqliteQueryLogRepository {
    pool: SqlitePool,
    sender: mpsc::Sender<QueryLogEntry>,
}

impl SqliteQueryLogRepository {
    /// Must be called from within a tokio runtime; spawns the flush task.
    pub fn new(pool: SqlitePool, cfg: &DatabaseConfig) -> Self {
        let channel_capacity = cfg.query_log_channel_capacity.max(1);
        let max_batch_size = cfg.query_log_max_batch_size.max(1);
        let flush_interval_ms = cfg.query_log_flush_interval_ms.max(1);

        let (sender, receiver) = mpsc::channel(channel_capacity);

        let flush_pool = pool.clone();
        tokio::spawn(async move {
            writer::flush_loop(flush_pool, receiver, max_batch_size, flush_interval_ms).await;
        });

        info!(
            channel_capacity,
            batch_size = max_batch_size,
            flush_interval_ms,
            "Query log batching enabled"
        );

        Self { pool, sender }
    }

    fn row_to_query_log(row: QueryLogRow) -> Option<QueryLog> {
        let (id, client_ip, query_name, query_type, response, timestamp) = row;
        let query_type = query_type.parse::<QueryType>().ok()?;
        Some(QueryLog {
            id: Some(id),
            client_ip: client_ip.into(),
            query_name: query_name.into(),
            query_type,
            response: response.into(),
            timestamp: Some(timestamp),
        })
    }
}

#[async_trait]
impl QueryLogRepository for SqliteQueryLogRepository {
    async fn log_query(&self, query: &QueryLog) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO dns_queries (client_ip, query_name, query_type, response) VALUES (?, ?, ?, ?)",
        )
        .bind(query.client_ip.as_ref())
        .bind(query.query_name.as_ref())
        .bind(query.query_type.as_str())
        .bind(query.response.as_ref())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::DatabaseError(format!("Failed to log query: {}", e)))?;
        Ok(())
    }

    fn log_query_sync(&self, query: &QueryLog) -> Result<(), DomainError> {
        let entry = QueryLogEntry::from_query_log(query);
        match self.sender.try_send(entry) {
            Ok(()) => Ok(()),
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!("Query log channel full, dropping entry");
                Ok(())
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                error!("Query log channel closed");
                Ok(())
            }
        }
    }

    async fn get_recent(&self, limit: u32) -> Result<Vec<QueryLog>, DomainError> {
        let rows = sqlx::query_as::<_, QueryLogRow>(
            "SELECT id, client_ip, query_name, query_type, response, datetime(timestamp)
             FROM dns_queries
             ORDER BY id DESC
             LIMIT ?",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to fetch recent queries");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().filter_map(Self::row_to_query_log).collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM dns_queries")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;
        Ok(count as u64)
    }
}
