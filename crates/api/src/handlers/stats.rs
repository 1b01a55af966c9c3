use crate::{dto::StatsResponse, errors::ApiError, state::AppState};
use axum::{extract::State, Json};

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.get_stats.execute().await?;
    Ok(Json(StatsResponse {
        record_count: stats.record_count,
        query_count: stats.query_count,
        server_status: "running",
    }))
}
