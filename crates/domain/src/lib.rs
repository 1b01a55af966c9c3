//! tierdns domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod fallback_table;
pub mod query_log;
pub mod seed;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_query::DnsQuery;
pub use dns_record::{normalize_name, DnsRecord, MxData, RecordType, SoaData, DEFAULT_TTL};
pub use errors::DomainError;
pub use fallback_table::FallbackTable;
pub use query_log::{QueryLog, QueryType, StoreStats, NXDOMAIN};
pub use seed::seed_records;
