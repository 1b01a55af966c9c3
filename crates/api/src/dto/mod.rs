pub mod query;
pub mod record;
pub mod stats;

pub use query::{QueryParams, QueryResponse};
pub use record::{CreateRecordRequest, LookupParams, LookupResponse, RecordDto};
pub use stats::StatsResponse;
