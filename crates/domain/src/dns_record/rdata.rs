//! Structured views over the textual values stored for MX and SOA records.

use super::record::is_valid_target;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxData<'a> {
    pub preference: u16,
    pub exchange: &'a str,
}

impl<'a> MxData<'a> {
    /// Parses `"<preference> <exchange>"`, e.g. `"10 mail.example.com"`.
    pub fn parse(value: &'a str) -> Option<Self> {
        let mut parts = value.split_whitespace();
        let preference = parts.next()?.parse().ok()?;
        let exchange = parts.next()?;
        if parts.next().is_some() || !is_valid_target(exchange) {
            return None;
        }
        Some(Self {
            preference,
            exchange,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData<'a> {
    pub mname: &'a str,
    pub rname: &'a str,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minimum: u32,
}

impl<'a> SoaData<'a> {
    /// Parses `"mname rname serial refresh retry expire minimum"`.
    pub fn parse(value: &'a str) -> Option<Self> {
        let parts: Vec<&str> = value.split_whitespace().collect();
        if parts.len() != 7 || !is_valid_target(parts[0]) || !is_valid_target(parts[1]) {
            return None;
        }
        let num = |i: usize| parts[i].parse::<u32>().ok();
        Some(Self {
            mname: parts[0],
            rname: parts[1],
            serial: num(2)?,
            refresh: num(3)?,
            retry: num(4)?,
            expire: num(5)?,
            minimum: num(6)?,
        })
    }
}
