use crate::ports::QueryLogRepository;
use std::sync::Arc;
use tierdns_domain::{DomainError, QueryLog};

pub const DEFAULT_RECENT_LIMIT: u32 = 100;
pub const MAX_RECENT_LIMIT: u32 = 1000;

pub struct GetRecentQueriesUseCase {
    repository: Arc<dyn QueryLogRepository>,
}

impl GetRecentQueriesUseCase {
    pub fn new(repository: Arc<dyn QueryLogRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, limit: Option<u32>) -> Result<Vec<QueryLog>, DomainError> {
        let limit = limit
            .unwrap_or(DEFAULT_RECENT_LIMIT)
            .clamp(1, MAX_RECENT_LIMIT);
        self.repository.get_recent(limit).await
    }
}
