use crate::dns_record::RecordType;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Response text logged when neither tier holds a matching record.
pub const NXDOMAIN: &str = "NXDOMAIN";

/// Question type as recorded in the query log. Queries for a type the
/// resolver cannot answer are still logged, as `UNKNOWN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryType {
    Known(RecordType),
    Unknown,
}

impl QueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryType::Known(t) => t.as_str(),
            QueryType::Unknown => "UNKNOWN",
        }
    }
}

impl From<RecordType> for QueryType {
    fn from(record_type: RecordType) -> Self {
        QueryType::Known(record_type)
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("UNKNOWN") {
            return Ok(QueryType::Unknown);
        }
        s.parse::<RecordType>().map(QueryType::Known)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryLog {
    pub id: Option<i64>,
    pub client_ip: Arc<str>,
    pub query_name: Arc<str>,
    pub query_type: QueryType,
    pub response: Arc<str>,
    pub timestamp: Option<String>,
}

impl QueryLog {
    pub fn new(
        client_ip: impl Into<Arc<str>>,
        query_name: impl Into<Arc<str>>,
        query_type: impl Into<QueryType>,
        response: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            id: None,
            client_ip: client_ip.into(),
            query_name: query_name.into(),
            query_type: query_type.into(),
            response: response.into(),
            timestamp: None,
        }
    }

    pub fn is_nxdomain(&self) -> bool {
        self.response.as_ref() == NXDOMAIN
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub record_count: u64,
    pub query_count: u64,
}
