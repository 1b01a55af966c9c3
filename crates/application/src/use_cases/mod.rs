pub mod dns;
pub mod queries;
pub mod records;

pub use dns::{RecordSource, Resolution, ResolveRecordUseCase};
pub use queries::{
    GetRecentQueriesUseCase, GetStoreStatsUseCase, DEFAULT_RECENT_LIMIT, MAX_RECENT_LIMIT,
};
pub use records::{BootstrapRecordsUseCase, CreateRecordUseCase, GetRecordsUseCase};
