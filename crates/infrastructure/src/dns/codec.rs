use std::net::{Ipv4Addr, Ipv6Addr};
use thiserror::Error;
use tierdns_domain::{DnsQuery, DnsRecord, MxData, RecordType, SoaData};

pub const HEADER_LEN: usize = 12;
pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_TXT_LEN: usize = 255;

const RESPONSE_FLAGS: u16 = 0x8180;
const QUERY_FLAGS: u16 = 0x0100;
const NAME_POINTER: [u8; 2] = [0xC0, 0x0C];
const CLASS_IN: u16 = 1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("datagram shorter than the 12-byte header ({0} bytes)")]
    TooShort(usize),

    #[error("expected exactly one question, got {0}")]
    QuestionCount(u16),

    #[error("label length {0} exceeds 63")]
    LabelTooLong(usize),

    #[error("datagram truncated at offset {0}")]
    Truncated(usize),

    #[error("label is not valid UTF-8")]
    InvalidUtf8,

    #[error("invalid address for {record_type} record: {value}")]
    InvalidAddress {
        record_type: RecordType,
        value: String,
    },

    #[error("malformed {record_type} record value: {value}")]
    InvalidRdata {
        record_type: RecordType,
        value: String,
    },

    #[error("TXT value of {0} bytes exceeds 255")]
    TxtTooLong(usize),
}

/// Parses a query datagram into its single question.
///
/// Only the header and the first question are read; anything after the question
/// (additional records, EDNS) is ignored. Compression pointers in the question
/// name are rejected since their length byte is above 63.
pub fn decode_query(buf: &[u8]) -> Result<DnsQuery, CodecError> {
    if buf.len() < HEADER_LEN {
        return Err(CodecError::TooShort(buf.len()));
    }

    let id = u16::from_be_bytes([buf[0], buf[1]]);
    let qdcount = u16::from_be_bytes([buf[4], buf[5]]);
    if qdcount != 1 {
        return Err(CodecError::QuestionCount(qdcount));
    }

    let mut pos = HEADER_LEN;
    let mut labels: Vec<&str> = Vec::new();

    loop {
        if pos >= buf.len() {
            return Err(CodecError::Truncated(pos));
        }
        let label_len = buf[pos] as usize;
        pos += 1;
        if label_len == 0 {
            break;
        }
        if label_len > MAX_LABEL_LEN {
            return Err(CodecError::LabelTooLong(label_len));
        }
        if pos + label_len > buf.len() {
            return Err(CodecError::Truncated(pos));
        }
        let label = std::str::from_utf8(&buf[pos..pos + label_len])
            .map_err(|_| CodecError::InvalidUtf8)?;
        labels.push(label);
        pos += label_len;
    }

    if pos + 4 > buf.len() {
        return Err(CodecError::Truncated(pos));
    }
    let qtype = u16::from_be_bytes([buf[pos], buf[pos + 1]]);
    let qclass = u16::from_be_bytes([buf[pos + 2], buf[pos + 3]]);

    Ok(DnsQuery::new(id, labels.join("."), qtype, qclass))
}

/// Builds the response datagram for `query`, with one answer when `answer` is set.
///
/// The question is re-encoded from `query.name` rather than copied from the
/// request buffer, so the name comes back exactly as it was decoded.
pub fn encode_response(query: &DnsQuery, answer: Option<&DnsRecord>) -> Result<Vec<u8>, CodecError> {
    let rdata = answer.map(encode_rdata).transpose()?;

    let mut buf = Vec::with_capacity(HEADER_LEN + query.name.len() + 6 + 64);
    push_header(
        &mut buf,
        query.transaction_id,
        RESPONSE_FLAGS,
        if answer.is_some() { 1 } else { 0 },
    );
    push_question(&mut buf, &query.name, query.qtype, query.qclass)?;

    if let (Some(record), Some(rdata)) = (answer, rdata) {
        buf.extend_from_slice(&NAME_POINTER);
        buf.extend_from_slice(&record.record_type.to_u16().to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());
        buf.extend_from_slice(&record.ttl.to_be_bytes());
        buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        buf.extend_from_slice(&rdata);
    }

    Ok(buf)
}

/// Builds a standard recursive-desired query for `name`. Used by tooling and tests
/// to talk to the server.
pub fn encode_query(transaction_id: u16, name: &str, qtype: u16) -> Result<Vec<u8>, CodecError> {
    let mut buf = Vec::with_capacity(HEADER_LEN + name.len() + 6);
    push_header(&mut buf, transaction_id, QUERY_FLAGS, 0);
    push_question(&mut buf, name, qtype, CLASS_IN)?;
    Ok(buf)
}

/// Reads `(id, flags, qdcount, ancount)` from a datagram header.
pub fn read_header(buf: &[u8]) -> Result<(u16, u16, u16, u16), CodecError> {
    if buf.len() < HEADER_LEN {
        return Err(CodecError::TooShort(buf.len()));
    }
    let word = |i: usize| u16::from_be_bytes([buf[i], buf[i + 1]]);
    Ok((word(0), word(2), word(4), word(6)))
}

fn push_header(buf: &mut Vec<u8>, id: u16, flags: u16, ancount: u16) {
    buf.extend_from_slice(&id.to_be_bytes());
    buf.extend_from_slice(&flags.to_be_bytes());
    buf.extend_from_slice(&1u16.to_be_bytes());
    buf.extend_from_slice(&ancount.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes());
}

fn push_question(buf: &mut Vec<u8>, name: &str, qtype: u16, qclass: u16) -> Result<(), CodecError> {
    push_name(buf, name)?;
    buf.extend_from_slice(&qtype.to_be_bytes());
    buf.extend_from_slice(&qclass.to_be_bytes());
    Ok(())
}

fn push_name(buf: &mut Vec<u8>, name: &str) -> Result<(), CodecError> {
    for label in name.split('.').filter(|l| !l.is_empty()) {
        if label.len() > MAX_LABEL_LEN {
            return Err(CodecError::LabelTooLong(label.len()));
        }
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);
    Ok(())
}

fn encode_rdata(record: &DnsRecord) -> Result<Vec<u8>, CodecError> {
    let value = record.value.as_ref();
    let invalid_rdata = || CodecError::InvalidRdata {
        record_type: record.record_type,
        value: value.to_string(),
    };
    let invalid_address = || CodecError::InvalidAddress {
        record_type: record.record_type,
        value: value.to_string(),
    };

    let mut rdata = Vec::new();
    match record.record_type {
        RecordType::A => {
            let addr: Ipv4Addr = value.parse().map_err(|_| invalid_address())?;
            rdata.extend_from_slice(&addr.octets());
        }
        RecordType::AAAA => {
            let addr: Ipv6Addr = value.parse().map_err(|_| invalid_address())?;
            rdata.extend_from_slice(&addr.octets());
        }
        RecordType::CNAME | RecordType::NS => {
            if value.trim().is_empty() {
                return Err(invalid_rdata());
            }
            push_name(&mut rdata, value.trim())?;
        }
        RecordType::MX => {
            let mx = MxData::parse(value).ok_or_else(invalid_rdata)?;
            rdata.extend_from_slice(&mx.preference.to_be_bytes());
            push_name(&mut rdata, mx.exchange)?;
        }
        RecordType::SOA => {
            let soa = SoaData::parse(value).ok_or_else(invalid_rdata)?;
            push_name(&mut rdata, soa.mname)?;
            push_name(&mut rdata, soa.rname)?;
            for field in [soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum] {
                rdata.extend_from_slice(&field.to_be_bytes());
            }
        }
        RecordType::TXT => {
            let bytes = value.as_bytes();
            if bytes.len() > MAX_TXT_LEN {
                return Err(CodecError::TxtTooLong(bytes.len()));
            }
            rdata.push(bytes.len() as u8);
            rdata.extend_from_slice(bytes);
        }
    }
    Ok(rdata)
}
