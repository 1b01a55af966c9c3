mod get_recent_queries;
mod get_store_stats;

pub use get_recent_queries::{GetRecentQueriesUseCase, DEFAULT_RECENT_LIMIT, MAX_RECENT_LIMIT};
pub use get_store_stats::GetStoreStatsUseCase;
