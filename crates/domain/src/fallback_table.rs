use crate::dns_record::{DnsRecord, RecordType};
use std::collections::HashMap;
use std::sync::Arc;

const BUILTIN_RECORDS: &[(&str, RecordType, &str)] = &[
    ("localhost", RecordType::A, "127.0.0.1"),
    ("payment-app", RecordType::A, "172.18.0.3"),
    ("wordpress", RecordType::A, "172.18.0.4"),
    ("db", RecordType::A, "172.18.0.2"),
    ("futurebank.local", RecordType::A, "192.168.1.100"),
    ("futurebank.local", RecordType::MX, "10 mail.futurebank.local"),
];

/// In-process records consulted when the persistent store has no answer.
///
/// Built once at startup and never mutated. Records for a name keep the order in
/// which they were added, and lookups return the first one whose type matches.
#[derive(Debug, Clone, Default)]
pub struct FallbackTable {
    records: HashMap<Arc<str>, Vec<DnsRecord>>,
}

impl FallbackTable {
    pub fn new(records: impl IntoIterator<Item = DnsRecord>) -> Self {
        let mut table: HashMap<Arc<str>, Vec<DnsRecord>> = HashMap::new();
        for record in records {
            table
                .entry(Arc::clone(&record.name))
                .or_default()
                .push(record);
        }
        Self { records: table }
    }

    /// The built-in host entries followed by `extra`.
    pub fn builtin_with(extra: impl IntoIterator<Item = DnsRecord>) -> Self {
        Self::new(builtin_records().into_iter().chain(extra))
    }

    pub fn builtin() -> Self {
        Self::builtin_with(std::iter::empty())
    }

    /// `name` must already be normalized.
    pub fn lookup(&self, name: &str, record_type: RecordType) -> Option<&DnsRecord> {
        self.records
            .get(name)?
            .iter()
            .find(|r| r.record_type == record_type)
    }

    pub fn records_for(&self, name: &str) -> &[DnsRecord] {
        self.records.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub fn builtin_records() -> Vec<DnsRecord> {
    BUILTIN_RECORDS
        .iter()
        .map(|(name, rt, value)| DnsRecord::with_default_ttl(name, *rt, *value))
        .collect()
}
