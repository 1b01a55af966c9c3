use crate::ports::RecordRepository;
use std::sync::Arc;
use tierdns_domain::{normalize_name, DnsRecord, DomainError};

pub struct GetRecordsUseCase {
    repository: Arc<dyn RecordRepository>,
}

impl GetRecordsUseCase {
    pub fn new(repository: Arc<dyn RecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_all(&self) -> Result<Vec<DnsRecord>, DomainError> {
        self.repository.get_all().await
    }

    pub async fn get_zone(&self, domain: &str) -> Result<Vec<DnsRecord>, DomainError> {
        let domain = normalize_name(domain.trim());
        if domain.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "zone name cannot be empty".to_string(),
            ));
        }
        self.repository.get_zone(&domain).await
    }
}
