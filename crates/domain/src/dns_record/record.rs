use super::rdata::{MxData, SoaData};
use super::RecordType;
use crate::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

pub const DEFAULT_TTL: u32 = 300;

/// Longest character-string a TXT record can carry in one length-prefixed chunk.
pub const MAX_TXT_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: Arc<str>,

    pub record_type: RecordType,

    pub value: Arc<str>,

    pub ttl: u32,
}

impl DnsRecord {
    /// Builds a record with its name lowercased and a single trailing dot removed.
    pub fn new(
        name: impl AsRef<str>,
        record_type: RecordType,
        value: impl Into<Arc<str>>,
        ttl: u32,
    ) -> Self {
        Self {
            name: normalize_name(name.as_ref()).into(),
            record_type,
            value: value.into(),
            ttl,
        }
    }

    pub fn with_default_ttl(
        name: impl AsRef<str>,
        record_type: RecordType,
        value: impl Into<Arc<str>>,
    ) -> Self {
        Self::new(name, record_type, value, DEFAULT_TTL)
    }

    /// Checks that `value` is well formed for `record_type`.
    ///
    /// Administrative writers call this before a record reaches the store; the wire
    /// encoder assumes stored values already passed it.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "record name cannot be empty".to_string(),
            ));
        }
        if let Some(label) = self.name.split('.').find(|l| l.is_empty() || l.len() > 63) {
            return Err(DomainError::InvalidDomainName(format!(
                "invalid label '{}' in {}",
                label, self.name
            )));
        }

        let value = self.value.as_ref();
        let ok = match self.record_type {
            RecordType::A => value.parse::<Ipv4Addr>().is_ok(),
            RecordType::AAAA => value.parse::<Ipv6Addr>().is_ok(),
            RecordType::CNAME | RecordType::NS => is_valid_target(value),
            RecordType::MX => MxData::parse(value).is_some(),
            RecordType::SOA => SoaData::parse(value).is_some(),
            RecordType::TXT => value.len() <= MAX_TXT_LEN,
        };

        if ok {
            Ok(())
        } else {
            Err(DomainError::InvalidRecord(format!(
                "{} value '{}' is not valid for {}",
                self.record_type, self.value, self.name
            )))
        }
    }
}

/// Lowercases a name and strips one trailing dot.
pub fn normalize_name(name: &str) -> String {
    let lower = name.to_lowercase();
    match lower.strip_suffix('.') {
        Some(stripped) => stripped.to_string(),
        None => lower,
    }
}

pub(crate) fn is_valid_target(name: &str) -> bool {
    let name = name.strip_suffix('.').unwrap_or(name);
    !name.is_empty() && name.split('.').all(|l| !l.is_empty() && l.len() <= 63)
}
