use serde::{Deserialize, Serialize};
use tierdns_domain::QueryLog;

#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub limit: Option<u32>,
}

#[derive(Serialize, Debug, Clone)]
pub struct QueryResponse {
    pub id: Option<i64>,
    pub timestamp: String,
    pub client: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: &'static str,
    pub response: String,
}

impl From<QueryLog> for QueryResponse {
    fn from(q: QueryLog) -> Self {
        Self {
            id: q.id,
            timestamp: q.timestamp.unwrap_or_default(),
            client: q.client_ip.to_string(),
            name: q.query_name.to_string(),
            record_type: q.query_type.as_str(),
            response: q.response.to_string(),
        }
    }
}
