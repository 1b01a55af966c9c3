use std::sync::Arc;
use tierdns_application::use_cases::{
    CreateRecordUseCase, GetRecentQueriesUseCase, GetRecordsUseCase, GetStoreStatsUseCase,
    ResolveRecordUseCase,
};

#[derive(Clone)]
pub struct AppState {
    /// Same engine instance the UDP listener answers from.
    pub resolve: Arc<ResolveRecordUseCase>,
    pub get_records: Arc<GetRecordsUseCase>,
    pub create_record: Arc<CreateRecordUseCase>,
    pub get_queries: Arc<GetRecentQueriesUseCase>,
    pub get_stats: Arc<GetStoreStatsUseCase>,
}
