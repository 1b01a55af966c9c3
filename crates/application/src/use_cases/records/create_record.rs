use crate::ports::RecordRepository;
use std::sync::Arc;
use tierdns_domain::{DnsRecord, DomainError, RecordType, DEFAULT_TTL};
use tracing::info;

pub struct CreateRecordUseCase {
    repository: Arc<dyn RecordRepository>,
}

impl CreateRecordUseCase {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        name: &str,
        record_type: &str,
        value: &str,
        ttl: Option<u32>,
    ) -> Result<DnsRecord, DomainError> {
        let record_type: RecordType = record_type
            .parse()
            .map_err(DomainError::InvalidRecordType)?;

        let record = DnsRecord::new(
            name.trim(),
            record_type,
            value.trim(),
            ttl.unwrap_or(DEFAULT_TTL),
        );
        record.validate()?;

        let created = self.repository.create(&record).await?;

        info!(
            domain = %created.name,
            record_type = %created.record_type,
            value = %created.value,
            ttl = created.ttl,
            "DNS record created"
        );

        Ok(created)
    }
}
