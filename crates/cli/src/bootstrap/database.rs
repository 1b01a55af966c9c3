use crate::di::Repositories;
use sqlx::SqlitePool;
use tierdns_application::use_cases::BootstrapRecordsUseCase;
use tierdns_domain::{config::DatabaseConfig, seed_records};
use tierdns_infrastructure::database::create_pool;
use tracing::{info, warn};

/// Opens the record database. Returns `None` when it cannot be opened; the
/// server then answers from the static table alone.
pub async fn init_database(cfg: &DatabaseConfig) -> Option<SqlitePool> {
    let database_url = cfg.url();
    info!(url = %database_url, "Initializing database");

    match create_pool(&database_url, cfg).await {
        Ok(pool) => Some(pool),
        Err(e) => {
            warn!(
                error = %e,
                "Database unavailable, serving static records only"
            );
            None
        }
    }
}

pub async fn seed_defaults(repos: &Repositories) {
    let use_case = BootstrapRecordsUseCase::new(repos.records.clone(), seed_records());
    if let Err(e) = use_case.execute().await {
        warn!(error = %e, "Failed to write default records");
    }
}
