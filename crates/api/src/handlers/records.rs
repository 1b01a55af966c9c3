use crate::{
    dto::{CreateRecordRequest, RecordDto},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_records")]
pub async fn get_records(State(state): State<AppState>) -> Result<Json<Vec<RecordDto>>, ApiError> {
    let records = state.get_records.get_all().await?;
    debug!(count = records.len(), "Records retrieved");
    Ok(Json(records.iter().map(RecordDto::from).collect()))
}

#[instrument(skip(state), name = "api_get_zone")]
pub async fn get_zone(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<Vec<RecordDto>>, ApiError> {
    let records = state.get_records.get_zone(&domain).await?;
    Ok(Json(records.iter().map(RecordDto::from).collect()))
}

#[instrument(skip(state), name = "api_create_record")]
pub async fn create_record(
    State(state): State<AppState>,
    Json(req): Json<CreateRecordRequest>,
) -> Result<(StatusCode, Json<RecordDto>), ApiError> {
    let record = state
        .create_record
        .execute(&req.name, &req.record_type, &req.value, req.ttl)
        .await?;
    Ok((StatusCode::CREATED, Json(RecordDto::from(&record))))
}
