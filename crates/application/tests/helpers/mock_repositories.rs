#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tierdns_application::ports::{QueryLogRepository, RecordRepository};
use tierdns_domain::{DnsRecord, DomainError, QueryLog, RecordType};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct MockRecordRepository {
    records: Arc<RwLock<Vec<DnsRecord>>>,
    unavailable: Arc<AtomicBool>,
    lookup_calls: Arc<AtomicUsize>,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            unavailable: Arc::new(AtomicBool::new(false)),
            lookup_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn with_records(records: Vec<DnsRecord>) -> Self {
        let repo = Self::new();
        repo.records.write().await.extend(records);
        repo
    }

    pub async fn add(&self, name: &str, record_type: RecordType, value: &str, ttl: u32) {
        self.records
            .write()
            .await
            .push(DnsRecord::new(name, record_type, value, ttl));
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(DomainError::StoreUnavailable)
        } else {
            Ok(())
        }
    }
}

impl Default for MockRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn lookup(
        &self,
        name: &str,
        record_type: Option<RecordType>,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.name.as_ref() == name)
            .filter(|r| record_type.map_or(true, |rt| r.record_type == rt))
            .cloned()
            .collect())
    }

    async fn get_all(&self) -> Result<Vec<DnsRecord>, DomainError> {
        self.check_available()?;
        let mut all = self.records.read().await.clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn get_zone(&self, domain: &str) -> Result<Vec<DnsRecord>, DomainError> {
        self.check_available()?;
        let suffix = format!(".{}", domain);
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.name.as_ref() == domain || r.name.ends_with(&suffix))
            .cloned()
            .collect())
    }

    async fn create(&self, record: &DnsRecord) -> Result<DnsRecord, DomainError> {
        self.check_available()?;
        self.records.write().await.push(record.clone());
        Ok(record.clone())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.check_available()?;
        Ok(self.records.read().await.len() as u64)
    }

    async fn insert_if_empty(&self, records: &[DnsRecord]) -> Result<u64, DomainError> {
        self.check_available()?;
        let mut stored = self.records.write().await;
        if !stored.is_empty() {
            return Ok(0);
        }
        stored.extend_from_slice(records);
        Ok(records.len() as u64)
    }
}

#[derive(Clone)]
pub struct MockQueryLogRepository {
    logs: Arc<RwLock<Vec<QueryLog>>>,
    sync_logs: Arc<std::sync::Mutex<Vec<QueryLog>>>,
    should_fail: Arc<AtomicBool>,
}

impl MockQueryLogRepository {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(RwLock::new(Vec::new())),
            sync_logs: Arc::new(std::sync::Mutex::new(Vec::new())),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub fn sync_log_count(&self) -> usize {
        self.sync_logs.lock().unwrap().len()
    }

    pub fn get_sync_logs(&self) -> Vec<QueryLog> {
        self.sync_logs.lock().unwrap().clone()
    }

    pub async fn push(&self, log: QueryLog) {
        self.logs.write().await.push(log);
    }
}

impl Default for MockQueryLogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueryLogRepository for MockQueryLogRepository {
    async fn log_query(&self, query: &QueryLog) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable);
        }
        self.logs.write().await.push(query.clone());
        Ok(())
    }

    fn log_query_sync(&self, query: &QueryLog) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable);
        }
        self.sync_logs.lock().unwrap().push(query.clone());
        Ok(())
    }

    async fn get_recent(&self, limit: u32) -> Result<Vec<QueryLog>, DomainError> {
        let logs = self.logs.read().await;
        Ok(logs.iter().rev().take(limit as usize).cloned().collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::StoreUnavailable);
        }
        Ok(self.logs.read().await.len() as u64)
    }
}
