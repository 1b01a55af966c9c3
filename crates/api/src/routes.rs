use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/lookup", get(handlers::lookup))
        .route("/records", get(handlers::get_records))
        .route("/records", post(handlers::create_record))
        .route("/zone/{domain}", get(handlers::get_zone))
        .route("/queries", get(handlers::get_queries))
        .route("/stats", get(handlers::get_stats))
        .with_state(state)
}
