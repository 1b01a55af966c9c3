use crate::ports::RecordRepository;
use std::sync::Arc;
use tierdns_domain::{DnsRecord, DomainError};
use tracing::info;

/// Writes the default record set into an empty store. A populated store is left
/// untouched, so running this on every start is harmless.
pub struct BootstrapRecordsUseCase {
    repository: Arc<dyn RecordRepository>,
    seeds: Vec<DnsRecord>,
}

impl BootstrapRecordsUseCase {
    pub fn new(repository: Arc<dyn RecordRepository>, seeds: Vec<DnsRecord>) -> Self {
        Self { repository, seeds }
    }

    pub async fn execute(&self) -> Result<u64, DomainError> {
        let inserted = self.repository.insert_if_empty(&self.seeds).await?;
        if inserted > 0 {
            info!(inserted, "Inserted default DNS records");
        } else {
            info!("Record table already populated, skipping defaults");
        }
        Ok(inserted)
    }
}
