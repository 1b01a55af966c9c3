use super::Repositories;
use std::sync::Arc;
use tierdns_api::AppState;
use tierdns_application::use_cases::{
    CreateRecordUseCase, GetRecentQueriesUseCase, GetRecordsUseCase, GetStoreStatsUseCase,
    ResolveRecordUseCase,
};
use tierdns_domain::{Config, FallbackTable};
use tracing::info;

pub struct UseCases {
    pub resolve: Arc<ResolveRecordUseCase>,
    pub get_records: Arc<GetRecordsUseCase>,
    pub create_record: Arc<CreateRecordUseCase>,
    pub get_queries: Arc<GetRecentQueriesUseCase>,
    pub get_stats: Arc<GetStoreStatsUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, repos: &Repositories) -> anyhow::Result<Self> {
        let fallback = Arc::new(FallbackTable::builtin_with(config.dns.static_records()?));
        info!(records = fallback.len(), "Static fallback table loaded");

        let mut resolve = ResolveRecordUseCase::new(repos.records.clone(), fallback);
        if config.database.log_queries && repos.online {
            resolve = resolve.with_query_log(repos.query_log.clone());
        }

        Ok(Self {
            resolve: Arc::new(resolve),
            get_records: Arc::new(GetRecordsUseCase::new(repos.records.clone())),
            create_record: Arc::new(CreateRecordUseCase::new(repos.records.clone())),
            get_queries: Arc::new(GetRecentQueriesUseCase::new(repos.query_log.clone())),
            get_stats: Arc::new(GetStoreStatsUseCase::new(
                repos.records.clone(),
                repos.query_log.clone(),
            )),
        })
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            resolve: self.resolve.clone(),
            get_records: self.get_records.clone(),
            create_record: self.create_record.clone(),
            get_queries: self.get_queries.clone(),
            get_stats: self.get_stats.clone(),
        }
    }
}
