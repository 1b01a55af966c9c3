use crate::ports::{QueryLogRepository, RecordRepository};
use std::sync::Arc;
use tierdns_domain::{
    normalize_name, DnsRecord, FallbackTable, QueryLog, QueryType, RecordType, NXDOMAIN,
};
use tracing::{debug, warn};

/// Which tier produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSource {
    Store,
    Static,
}

impl RecordSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordSource::Store => "store",
            RecordSource::Static => "static",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub record: DnsRecord,
    pub source: RecordSource,
}

/// Resolves a name against the persistent store, then the static fallback table.
///
/// The store shadows the table: any store row for `(name, type)` wins, even if the
/// table holds a different value. Within each tier the first matching record wins.
/// A store that errors is treated as holding no rows. Every attempt appends one
/// query-log entry on a best-effort basis.
pub struct ResolveRecordUseCase {
    records: Arc<dyn RecordRepository>,
    fallback: Arc<FallbackTable>,
    query_log: Option<Arc<dyn QueryLogRepository>>,
}

impl ResolveRecordUseCase {
    pub fn new(records: Arc<dyn RecordRepository>, fallback: Arc<FallbackTable>) -> Self {
        Self {
            records,
            fallback,
            query_log: None,
        }
    }

    pub fn with_query_log(mut self, query_log: Arc<dyn QueryLogRepository>) -> Self {
        self.query_log = Some(query_log);
        self
    }

    pub async fn execute(
        &self,
        name: &str,
        record_type: RecordType,
        client_ip: &str,
    ) -> Option<Resolution> {
        let name = normalize_name(name);

        let resolution = match self.lookup_store(&name, record_type).await {
            Some(record) => Some(Resolution {
                record,
                source: RecordSource::Store,
            }),
            None => self
                .fallback
                .lookup(&name, record_type)
                .cloned()
                .map(|record| Resolution {
                    record,
                    source: RecordSource::Static,
                }),
        };

        match &resolution {
            Some(r) => {
                debug!(
                    domain = %name,
                    record_type = %record_type,
                    value = %r.record.value,
                    source = r.source.as_str(),
                    "Record resolved"
                );
                self.log(client_ip, &name, record_type, &r.record.value);
            }
            None => {
                debug!(domain = %name, record_type = %record_type, "NXDOMAIN");
                self.log(client_ip, &name, record_type, NXDOMAIN);
            }
        }

        resolution
    }

    /// Records a query for a type neither tier can hold. Nothing is looked up;
    /// the attempt is logged as `UNKNOWN` with an `NXDOMAIN` response.
    pub fn record_unsupported(&self, name: &str, client_ip: &str) {
        let name = normalize_name(name);
        debug!(domain = %name, "NXDOMAIN for unsupported query type");
        self.log(client_ip, &name, QueryType::Unknown, NXDOMAIN);
    }

    async fn lookup_store(&self, name: &str, record_type: RecordType) -> Option<DnsRecord> {
        match self.records.lookup(name, Some(record_type)).await {
            Ok(rows) => rows.into_iter().next(),
            Err(e) => {
                debug!(error = %e, domain = %name, "Record store lookup failed, using static table");
                None
            }
        }
    }

    fn log(
        &self,
        client_ip: &str,
        name: &str,
        query_type: impl Into<QueryType>,
        response: &str,
    ) {
        let Some(query_log) = &self.query_log else {
            return;
        };
        let entry = QueryLog::new(client_ip, name, query_type, response);
        if let Err(e) = query_log.log_query_sync(&entry) {
            warn!(error = %e, domain = %name, "Failed to log query");
        }
    }
}
