use serde::{Deserialize, Serialize};
use tierdns_domain::DnsRecord;

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordDto {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
    pub ttl: u32,
}

impl From<&DnsRecord> for RecordDto {
    fn from(record: &DnsRecord) -> Self {
        Self {
            name: record.name.to_string(),
            record_type: record.record_type.as_str().to_string(),
            value: record.value.to_string(),
            ttl: record.ttl,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub value: String,
    pub ttl: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub name: String,
    #[serde(rename = "type", default = "default_lookup_type")]
    pub record_type: String,
}

fn default_lookup_type() -> String {
    "A".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LookupResponse {
    #[serde(flatten)]
    pub record: RecordDto,
    /// `"store"` or `"static"`.
    pub source: String,
}
