use super::RecordType;
use std::sync::Arc;

/// One question decoded from a query datagram.
///
/// `name` keeps the exact spelling the client sent so the response can echo it;
/// `qtype` and `qclass` are the raw wire codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub transaction_id: u16,
    pub name: Arc<str>,
    pub qtype: u16,
    pub qclass: u16,
}

impl DnsQuery {
    pub fn new(transaction_id: u16, name: impl Into<Arc<str>>, qtype: u16, qclass: u16) -> Self {
        Self {
            transaction_id,
            name: name.into(),
            qtype,
            qclass,
        }
    }

    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.qtype)
    }
}
