mod rdata;
mod record;
mod record_type;

pub use rdata::{MxData, SoaData};
pub use record::{normalize_name, DnsRecord, DEFAULT_TTL, MAX_TXT_LEN};
pub use record_type::RecordType;
