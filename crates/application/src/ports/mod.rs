mod query_log_repository;
mod record_repository;

pub use query_log_repository::QueryLogRepository;
pub use record_repository::RecordRepository;
