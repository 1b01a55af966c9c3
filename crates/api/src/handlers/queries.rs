use crate::{
    dto::{QueryParams, QueryResponse},
    errors::ApiError,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_queries")]
pub async fn get_queries(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<QueryResponse>>, ApiError> {
    let queries = state.get_queries.execute(params.limit).await?;
    debug!(count = queries.len(), "Queries retrieved");
    Ok(Json(queries.into_iter().map(QueryResponse::from).collect()))
}
