use async_trait::async_trait;
use tierdns_domain::{DomainError, QueryLog};

#[async_trait]
pub trait QueryLogRepository: Send + Sync {
    async fn log_query(&self, query: &QueryLog) -> Result<(), DomainError>;

    /// Enqueue without waiting on the store.
    fn log_query_sync(&self, query: &QueryLog) -> Result<(), DomainError>;

    /// Newest first.
    async fn get_recent(&self, limit: u32) -> Result<Vec<QueryLog>, DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
