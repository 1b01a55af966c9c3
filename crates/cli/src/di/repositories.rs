use sqlx::SqlitePool;
use std::sync::Arc;
use tierdns_application::ports::{QueryLogRepository, RecordRepository};
use tierdns_domain::config::DatabaseConfig;
use tierdns_infrastructure::repositories::{
    OfflineQueryLog, OfflineRecordStore, SqliteQueryLogRepository, SqliteRecordRepository,
};

pub struct Repositories {
    pub records: Arc<dyn RecordRepository>,
    pub query_log: Arc<dyn QueryLogRepository>,
    /// False when the database could not be opened and the offline stand-ins
    /// are in use.
    pub online: bool,
}

impl Repositories {
    pub fn new(pool: Option<SqlitePool>, cfg: &DatabaseConfig) -> Self {
        match pool {
            Some(pool) => Self {
                records: Arc::new(SqliteRecordRepository::new(pool.clone())),
                query_log: Arc::new(SqliteQueryLogRepository::new(pool, cfg)),
                online: true,
            },
            None => Self {
                records: Arc::new(OfflineRecordStore),
                query_log: Arc::new(OfflineQueryLog),
                online: false,
            },
        }
    }
}
