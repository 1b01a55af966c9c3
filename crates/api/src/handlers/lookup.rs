use crate::{
    dto::{LookupParams, LookupResponse, RecordDto},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{ConnectInfo, Query, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::net::SocketAddr;
use tierdns_domain::{DomainError, RecordType, NXDOMAIN};
use tracing::{debug, instrument};

/// Resolves a name through the same engine the DNS listener uses, so the lookup
/// is also written to the query log.
#[instrument(skip(state, request), name = "api_lookup")]
pub async fn lookup(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
    request: Request,
) -> Result<Response, ApiError> {
    let name = params.name.trim();
    if name.is_empty() {
        return Err(DomainError::InvalidDomainName("name is required".to_string()).into());
    }
    let record_type: RecordType = params
        .record_type
        .parse()
        .map_err(DomainError::InvalidRecordType)?;

    let client = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    match state.resolve.execute(name, record_type, &client).await {
        Some(resolution) => {
            debug!(domain = %name, source = resolution.source.as_str(), "Lookup answered");
            Ok(Json(LookupResponse {
                record: RecordDto::from(&resolution.record),
                source: resolution.source.as_str().to_string(),
            })
            .into_response())
        }
        None => Ok((
            StatusCode::NOT_FOUND,
            Json(json!({
                "name": name,
                "type": record_type.as_str(),
                "result": NXDOMAIN,
            })),
        )
            .into_response()),
    }
}
