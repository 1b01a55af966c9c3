#![allow(dead_code)]
use tierdns_domain::{DnsRecord, QueryLog, RecordType};

pub struct DnsRecordBuilder {
    name: String,
    record_type: RecordType,
    value: String,
    ttl: u32,
}

impl DnsRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com".to_string(),
            record_type: RecordType::A,
            value: "192.0.2.1".to_string(),
            ttl: 300,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn build(self) -> DnsRecord {
        DnsRecord::new(&self.name, self.record_type, self.value.as_str(), self.ttl)
    }
}

impl Default for DnsRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct QueryLogBuilder {
    client_ip: String,
    query_name: String,
    query_type: RecordType,
    response: String,
}

impl QueryLogBuilder {
    pub fn new() -> Self {
        Self {
            client_ip: "192.168.1.100".to_string(),
            query_name: "example.com".to_string(),
            query_type: RecordType::A,
            response: "192.0.2.1".to_string(),
        }
    }

    pub fn query_name(mut self, name: &str) -> Self {
        self.query_name = name.to_string();
        self
    }

    pub fn response(mut self, response: &str) -> Self {
        self.response = response.to_string();
        self
    }

    pub fn build(self) -> QueryLog {
        QueryLog::new(
            self.client_ip.as_str(),
            self.query_name.as_str(),
            self.query_type,
            self.response.as_str(),
        )
    }
}

impl Default for QueryLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}
