use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,

    #[serde(default = "default_true")]
    pub log_queries: bool,

    /// Insert the default record set when the record table is empty.
    #[serde(default = "default_true")]
    pub seed_defaults: bool,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_query_log_channel_capacity")]
    pub query_log_channel_capacity: usize,

    #[serde(default = "default_query_log_max_batch_size")]
    pub query_log_max_batch_size: usize,

    #[serde(default = "default_query_log_flush_interval_ms")]
    pub query_log_flush_interval_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            log_queries: true,
            seed_defaults: true,
            max_connections: default_max_connections(),
            query_log_channel_capacity: default_query_log_channel_capacity(),
            query_log_max_batch_size: default_query_log_max_batch_size(),
            query_log_flush_interval_ms: default_query_log_flush_interval_ms(),
        }
    }
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!("sqlite:{}", self.path)
    }
}

fn default_db_path() -> String {
    "./tierdns.db".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_connections() -> u32 {
    5
}

fn default_query_log_channel_capacity() -> usize {
    10_000
}

fn default_query_log_max_batch_size() -> usize {
    500
}

fn default_query_log_flush_interval_ms() -> u64 {
    100
}
