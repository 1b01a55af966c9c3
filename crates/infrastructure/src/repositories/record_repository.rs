use async_trait::async_trait;
use sqlx::SqlitePool;
use tierdns_application::ports::RecordRepository;
use tierdns_domain::{DnsRecord, DomainError, RecordType};
use tracing::{error, info, instrument, warn};

type RecordRow = (String, String, String, i64);

const SELECT_COLUMNS: &str = "SELECT name, type, value, ttl FROM dns_records";

pub struct SqliteRecordRepository {
    pool: SqlitePool,
}

impl SqliteRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: RecordRow) -> Option<DnsRecord> {
        let (name, record_type, value, ttl) = row;
        let record_type = match record_type.parse::<RecordType>() {
            Ok(rt) => rt,
            Err(_) => {
                warn!(domain = %name, record_type = %record_type, "Skipping row with unknown record type");
                return None;
            }
        };
        Some(DnsRecord::new(
            name,
            record_type,
            value,
            u32::try_from(ttl).unwrap_or(0),
        ))
    }

    fn rows_to_records(rows: Vec<RecordRow>) -> Vec<DnsRecord> {
        rows.into_iter().filter_map(Self::row_to_record).collect()
    }
}

fn db_error(context: &str, e: sqlx::Error) -> DomainError {
    error!(error = %e, "{}", context);
    DomainError::DatabaseError(format!("{}: {}", context, e))
}

/// Escapes `%`, `_` and `\` so `value` matches literally inside a LIKE pattern.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    async fn lookup(
        &self,
        name: &str,
        record_type: Option<RecordType>,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        let rows = match record_type {
            Some(rt) => {
                sqlx::query_as::<_, RecordRow>(&format!(
                    "{SELECT_COLUMNS} WHERE name = ? AND type = ? ORDER BY id"
                ))
                .bind(name)
                .bind(rt.as_str())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, RecordRow>(&format!(
                    "{SELECT_COLUMNS} WHERE name = ? ORDER BY id"
                ))
                .bind(name)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| DomainError::DatabaseError(format!("Failed to look up {}: {}", name, e)))?;

        Ok(Self::rows_to_records(rows))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<DnsRecord>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(&format!("{SELECT_COLUMNS} ORDER BY name, id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch DNS records", e))?;

        Ok(Self::rows_to_records(rows))
    }

    #[instrument(skip(self))]
    async fn get_zone(&self, domain: &str) -> Result<Vec<DnsRecord>, DomainError> {
        let suffix_pattern = format!("%.{}", escape_like(domain));

        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "{SELECT_COLUMNS} WHERE name = ? OR name LIKE ? ESCAPE '\\' ORDER BY name, id"
        ))
        .bind(domain)
        .bind(&suffix_pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Failed to fetch zone records", e))?;

        Ok(Self::rows_to_records(rows))
    }

    #[instrument(skip(self))]
    async fn create(&self, record: &DnsRecord) -> Result<DnsRecord, DomainError> {
        sqlx::query("INSERT INTO dns_records (name, type, value, ttl) VALUES (?, ?, ?, ?)")
            .bind(record.name.as_ref())
            .bind(record.record_type.as_str())
            .bind(record.value.as_ref())
            .bind(record.ttl as i64)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Failed to insert DNS record", e))?;

        Ok(record.clone())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM dns_records")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to count DNS records", e))?;

        Ok(count as u64)
    }

    async fn insert_if_empty(&self, records: &[DnsRecord]) -> Result<u64, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM dns_records")
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to count DNS records", e))?;

        if existing > 0 {
            return Ok(0);
        }

        for record in records {
            sqlx::query("INSERT INTO dns_records (name, type, value, ttl) VALUES (?, ?, ?, ?)")
                .bind(record.name.as_ref())
                .bind(record.record_type.as_str())
                .bind(record.value.as_ref())
                .bind(record.ttl as i64)
                .execute(&mut *tx)
                .await
                .map_err(|e| db_error("Failed to insert default record", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit default records", e))?;

        info!(count = records.len(), "Default records written");
        Ok(records.len() as u64)
    }
}
