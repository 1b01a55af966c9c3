mod helpers;

use async_trait::async_trait;
use helpers::{MockQueryLogRepository, MockRecordRepository};
use std::sync::{Arc, Mutex};
use tierdns_application::ports::QueryLogRepository;
use tierdns_application::use_cases::{
    GetRecentQueriesUseCase, GetStoreStatsUseCase, DEFAULT_RECENT_LIMIT,
};
use tierdns_domain::{seed_records, DomainError, QueryLog, RecordType};

struct CaptureLimitRepository {
    last_limit: Arc<Mutex<u32>>,
}

#[async_trait]
impl QueryLogRepository for CaptureLimitRepository {
    async fn log_query(&self, _: &QueryLog) -> Result<(), DomainError> {
        Ok(())
    }

    fn log_query_sync(&self, _: &QueryLog) -> Result<(), DomainError> {
        Ok(())
    }

    async fn get_recent(&self, limit: u32) -> Result<Vec<QueryLog>, DomainError> {
        *self.last_limit.lock().unwrap() = limit;
        Ok(vec![])
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(0)
    }
}

async fn limit_seen(requested: Option<u32>) -> u32 {
    let last_limit = Arc::new(Mutex::new(0));
    let repo = Arc::new(CaptureLimitRepository {
        last_limit: last_limit.clone(),
    });
    GetRecentQueriesUseCase::new(repo)
        .execute(requested)
        .await
        .unwrap();
    let seen = *last_limit.lock().unwrap();
    seen
}

#[tokio::test]
async fn test_recent_limit_defaults() {
    assert_eq!(limit_seen(None).await, DEFAULT_RECENT_LIMIT);
}

#[tokio::test]
async fn test_recent_limit_is_clamped() {
    assert_eq!(limit_seen(Some(0)).await, 1);
    assert_eq!(limit_seen(Some(50)).await, 50);
    assert_eq!(limit_seen(Some(1_000_000)).await, 1000);
}

#[tokio::test]
async fn test_recent_queries_newest_first() {
    let log = Arc::new(MockQueryLogRepository::new());
    log.push(QueryLog::new("10.0.0.1", "a.lan", RecordType::A, "10.1.1.1"))
        .await;
    log.push(QueryLog::new("10.0.0.1", "b.lan", RecordType::A, "NXDOMAIN"))
        .await;

    let recent = GetRecentQueriesUseCase::new(log)
        .execute(Some(10))
        .await
        .unwrap();

    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].query_name.as_ref(), "b.lan");
}

#[tokio::test]
async fn test_store_stats_counts_both_tables() {
    let records = Arc::new(MockRecordRepository::with_records(seed_records()).await);
    let log = Arc::new(MockQueryLogRepository::new());
    log.push(QueryLog::new("10.0.0.1", "a.lan", RecordType::A, "10.1.1.1"))
        .await;

    let stats = GetStoreStatsUseCase::new(records, log)
        .execute()
        .await
        .unwrap();

    assert_eq!(stats.record_count, 9);
    assert_eq!(stats.query_count, 1);
}

#[tokio::test]
async fn test_store_stats_propagates_unavailable() {
    let records = Arc::new(MockRecordRepository::new());
    records.set_unavailable(true);
    let log = Arc::new(MockQueryLogRepository::new());

    let err = GetStoreStatsUseCase::new(records, log)
        .execute()
        .await
        .unwrap_err();

    assert_eq!(err, DomainError::StoreUnavailable);
}
