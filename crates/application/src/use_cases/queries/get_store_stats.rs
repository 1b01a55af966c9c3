use crate::ports::{QueryLogRepository, RecordRepository};
use std::sync::Arc;
use tierdns_domain::{DomainError, StoreStats};

pub struct GetStoreStatsUseCase {
    records: Arc<dyn RecordRepository>,
    query_log: Arc<dyn QueryLogRepository>,
}

impl GetStoreStatsUseCase {
    pub fn new(records: Arc<dyn RecordRepository>, query_log: Arc<dyn QueryLogRepository>) -> Self {
        Self { records, query_log }
    }

    pub async fn execute(&self) -> Result<StoreStats, DomainError> {
        let (record_count, query_count) =
            tokio::try_join!(self.records.count(), self.query_log.count())?;

        Ok(StoreStats {
            record_count,
            query_count,
        })
    }
}
