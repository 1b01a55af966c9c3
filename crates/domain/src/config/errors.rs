use crate::errors::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid bind address: {0}")]
    BindAddress(String),

    #[error("{0} port cannot be 0")]
    ZeroPort(&'static str),

    #[error("server.max_inflight_queries must be at least 1")]
    NoInflightCapacity,

    #[error("Invalid static record: {0}")]
    StaticRecord(#[source] DomainError),
}
