use crate::dns_record::{DnsRecord, RecordType};

const SEED_RECORDS: &[(&str, RecordType, &str)] = &[
    ("internal.futurebank.local", RecordType::A, "192.168.1.100"),
    ("payment.futurebank.local", RecordType::A, "192.168.1.101"),
    ("admin.futurebank.local", RecordType::A, "192.168.1.102"),
    ("api.futurebank.local", RecordType::A, "192.168.1.103"),
    (
        "futurebank.local",
        RecordType::SOA,
        "ns1.futurebank.local admin.futurebank.local 1 3600 1800 1209600 86400",
    ),
    ("futurebank.local", RecordType::NS, "ns1.futurebank.local"),
    ("ns1.futurebank.local", RecordType::A, "192.168.1.1"),
    ("backup.futurebank.local", RecordType::A, "10.0.0.50"),
    (
        "staging.futurebank.local",
        RecordType::CNAME,
        "payment.futurebank.local",
    ),
];

/// Rows written into an empty record table on first start.
pub fn seed_records() -> Vec<DnsRecord> {
    SEED_RECORDS
        .iter()
        .map(|(name, rt, value)| DnsRecord::with_default_ttl(name, *rt, *value))
        .collect()
}
