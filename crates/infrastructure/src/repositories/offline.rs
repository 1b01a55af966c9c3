use async_trait::async_trait;
use tierdns_application::ports::{QueryLogRepository, RecordRepository};
use tierdns_domain::{DnsRecord, DomainError, QueryLog, RecordType};

/// Stands in for the record table when the database could not be opened.
/// Every call fails with [`DomainError::StoreUnavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineRecordStore;

#[async_trait]
impl RecordRepository for OfflineRecordStore {
    async fn lookup(
        &self,
        _name: &str,
        _record_type: Option<RecordType>,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        Err(DomainError::StoreUnavailable)
    }

    async fn get_all(&self) -> Result<Vec<DnsRecord>, DomainError> {
        Err(DomainError::StoreUnavailable)
    }

    async fn get_zone(&self, _domain: &str) -> Result<Vec<DnsRecord>, DomainError> {
        Err(DomainError::StoreUnavailable)
    }

    async fn create(&self, _record: &DnsRecord) -> Result<DnsRecord, DomainError> {
        Err(DomainError::StoreUnavailable)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Err(DomainError::StoreUnavailable)
    }

    async fn insert_if_empty(&self, _records: &[DnsRecord]) -> Result<u64, DomainError> {
        Err(DomainError::StoreUnavailable)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineQueryLog;

#[async_trait]
impl QueryLogRepository for OfflineQueryLog {
    async fn log_query(&self, _query: &QueryLog) -> Result<(), DomainError> {
        Err(DomainError::StoreUnavailable)
    }

    fn log_query_sync(&self, _query: &QueryLog) -> Result<(), DomainError> {
        Err(DomainError::StoreUnavailable)
    }

    async fn get_recent(&self, _limit: u32) -> Result<Vec<QueryLog>, DomainError> {
        Err(DomainError::StoreUnavailable)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Err(DomainError::StoreUnavailable)
    }
}
