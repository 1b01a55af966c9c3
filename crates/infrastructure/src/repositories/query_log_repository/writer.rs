use compact_str::CompactString;
use sqlx::SqlitePool;
use std::time::Duration;
use tierdns_domain::QueryLog;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

const COLS_PER_ROW: usize = 4;
const ROWS_PER_CHUNK: usize = 999 / COLS_PER_ROW;

pub(super) struct QueryLogEntry {
    client_ip: CompactString,
    query_name: CompactString,
    query_type: &'static str,
    response: CompactString,
}

impl QueryLogEntry {
    pub fn from_query_log(q: &QueryLog) -> Self {
        Self {
            client_ip: CompactString::from(q.client_ip.as_ref()),
            query_name: CompactString::from(q.query_name.as_ref()),
            query_type: q.query_type.as_str(),
            response: CompactString::from(q.response.as_ref()),
        }
    }
}

fn build_multi_insert_sql(n: usize) -> String {
    debug_assert!(n > 0 && n <= ROWS_PER_CHUNK);
    const HEADER: &str =
        "INSERT INTO dns_queries (client_ip, query_name, query_type, response) VALUES ";
    const PLACEHOLDER: &str = "(?,?,?,?)";
    let mut sql = String::with_capacity(HEADER.len() + n * (PLACEHOLDER.len() + 1));
    sql.push_str(HEADER);
    for i in 0..n {
        if i > 0 {
            sql.push(',');
        }
        sql.push_str(PLACEHOLDER);
    }
    sql
}

/// Entries waiting for the next write. Filled from the channel, emptied when
/// full, on every interval tick, and once more when the channel closes.
struct PendingBatch {
    entries: Vec<QueryLogEntry>,
    capacity: usize,
}

impl PendingBatch {
    fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds `first` plus whatever is already queued, up to capacity.
    /// Returns true once the batch is full.
    fn fill(
        &mut self,
        first: QueryLogEntry,
        receiver: &mut mpsc::Receiver<QueryLogEntry>,
    ) -> bool {
        self.entries.push(first);
        while self.entries.len() < self.capacity {
            let Ok(entry) = receiver.try_recv() else {
                break;
            };
            self.entries.push(entry);
        }
        self.entries.len() >= self.capacity
    }

    async fn write(&mut self, pool: &SqlitePool) {
        if self.entries.is_empty() {
            return;
        }
        let pending = self.entries.len();
        match insert_all(pool, &self.entries).await {
            Ok(written) => debug!(written, "Query log batch written"),
            Err(e) => error!(error = %e, dropped = pending, "Query log batch lost"),
        }
        self.entries.clear();
    }
}

pub(super) async fn flush_loop(
    pool: SqlitePool,
    mut receiver: mpsc::Receiver<QueryLogEntry>,
    max_batch_size: usize,
    flush_interval_ms: u64,
) {
    let mut batch = PendingBatch::new(max_batch_size);
    let mut ticker = tokio::time::interval(Duration::from_millis(flush_interval_ms));

    loop {
        tokio::select! {
            received = receiver.recv() => {
                let Some(entry) = received else { break };
                if batch.fill(entry, &mut receiver) {
                    batch.write(&pool).await;
                }
            }
            _ = ticker.tick() => batch.write(&pool).await,
        }
    }

    batch.write(&pool).await;
    info!("Query log writer stopped");
}

/// Writes every entry inside one transaction, split into statements that stay
/// under SQLite's bound-parameter limit. A failing chunk is skipped.
async fn insert_all(pool: &SqlitePool, entries: &[QueryLogEntry]) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut written = 0;

    for chunk in entries.chunks(ROWS_PER_CHUNK) {
        let sql = build_multi_insert_sql(chunk.len());
        let insert = chunk.iter().fold(sqlx::query(&sql), |q, entry| {
            q.bind(entry.client_ip.as_str())
                .bind(entry.query_name.as_str())
                .bind(entry.query_type)
                .bind(entry.response.as_str())
        });
        match insert.execute(&mut *tx).await {
            Ok(result) => written += result.rows_affected(),
            Err(e) => warn!(error = %e, rows = chunk.len(), "Skipping query log chunk"),
        }
    }

    tx.commit().await?;
    Ok(written)
}
