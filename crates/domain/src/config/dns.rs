use serde::{Deserialize, Serialize};

use crate::dns_record::{DnsRecord, RecordType, DEFAULT_TTL};
use crate::DomainError;

/// Operator-supplied entry appended to the built-in fallback table.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StaticRecord {
    pub name: String,

    pub record_type: String,

    pub value: String,

    #[serde(default)]
    pub ttl: Option<u32>,
}

impl StaticRecord {
    pub fn to_record(&self, default_ttl: u32) -> Result<DnsRecord, DomainError> {
        let record_type: RecordType = self
            .record_type
            .parse()
            .map_err(DomainError::InvalidRecordType)?;
        let record = DnsRecord::new(
            &self.name,
            record_type,
            self.value.as_str(),
            self.ttl.unwrap_or(default_ttl),
        );
        record.validate()?;
        Ok(record)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    #[serde(default)]
    pub static_records: Vec<StaticRecord>,
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            default_ttl: default_ttl(),
            static_records: Vec::new(),
        }
    }
}

impl DnsConfig {
    pub fn static_records(&self) -> Result<Vec<DnsRecord>, DomainError> {
        self.static_records
            .iter()
            .map(|r| r.to_record(self.default_ttl))
            .collect()
    }
}

fn default_ttl() -> u32 {
    DEFAULT_TTL
}
