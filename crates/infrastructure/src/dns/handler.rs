use super::codec::{decode_query, encode_response};
use std::net::SocketAddr;
use std::sync::Arc;
use tierdns_application::use_cases::ResolveRecordUseCase;
use tracing::{debug, warn};

/// Turns one query datagram into its response datagram.
pub struct DnsServerHandler {
    resolver: Arc<ResolveRecordUseCase>,
}

impl DnsServerHandler {
    pub fn new(resolver: Arc<ResolveRecordUseCase>) -> Self {
        Self { resolver }
    }

    /// Returns `None` when nothing should be sent back: the datagram did not
    /// decode, or the matched record could not be encoded.
    pub async fn handle(&self, datagram: &[u8], from: SocketAddr) -> Option<Vec<u8>> {
        let query = match decode_query(datagram) {
            Ok(q) => q,
            Err(e) => {
                debug!(client = %from, error = %e, "Dropping undecodable datagram");
                return None;
            }
        };

        let answer = match query.record_type() {
            Some(record_type) => {
                debug!(
                    domain = %query.name,
                    record_type = %record_type,
                    client = %from.ip(),
                    "DNS query received"
                );
                self.resolver
                    .execute(&query.name, record_type, &from.ip().to_string())
                    .await
                    .map(|resolution| resolution.record)
            }
            None => {
                debug!(domain = %query.name, qtype = query.qtype, "Unsupported query type");
                self.resolver.record_unsupported(&query.name, &from.ip().to_string());
                None
            }
        };

        match encode_response(&query, answer.as_ref()) {
            Ok(response) => Some(response),
            Err(e) => {
                warn!(domain = %query.name, error = %e, "Failed to encode response");
                None
            }
        }
    }
}
