pub mod offline;
pub mod query_log_repository;
pub mod record_repository;

pub use offline::{OfflineQueryLog, OfflineRecordStore};
pub use query_log_repository::SqliteQueryLogRepository;
pub use record_repository::SqliteRecordRepository;
