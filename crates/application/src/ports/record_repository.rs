use async_trait::async_trait;
use tierdns_domain::{DnsRecord, DomainError, RecordType};

/// Access to the persistent record table.
///
/// Names passed in are expected to be normalized already; implementations compare
/// them verbatim.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Records for `name`, restricted to `record_type` when given, in storage order.
    async fn lookup(
        &self,
        name: &str,
        record_type: Option<RecordType>,
    ) -> Result<Vec<DnsRecord>, DomainError>;

    async fn get_all(&self) -> Result<Vec<DnsRecord>, DomainError>;

    /// Records named `domain` or ending in `.domain`.
    async fn get_zone(&self, domain: &str) -> Result<Vec<DnsRecord>, DomainError>;

    async fn create(&self, record: &DnsRecord) -> Result<DnsRecord, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// Inserts `records` only when the table holds no rows. Returns how many were
    /// inserted.
    async fn insert_if_empty(&self, records: &[DnsRecord]) -> Result<u64, DomainError>;
}
