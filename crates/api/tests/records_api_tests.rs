use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tierdns_api::{create_api_routes, AppState};
use tierdns_application::ports::{QueryLogRepository, RecordRepository};
use tierdns_application::use_cases::{
    BootstrapRecordsUseCase, CreateRecordUseCase, GetRecentQueriesUseCase, GetRecordsUseCase,
    GetStoreStatsUseCase, ResolveRecordUseCase,
};
use tierdns_domain::{config::DatabaseConfig, seed_records, FallbackTable};
use tierdns_infrastructure::database::run_migrations;
use tierdns_infrastructure::repositories::{
    OfflineQueryLog, OfflineRecordStore, SqliteQueryLogRepository, SqliteRecordRepository,
};
use tower::ServiceExt;

async fn create_test_db() -> sqlx::SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

fn build_app(
    records: Arc<dyn RecordRepository>,
    query_log: Arc<dyn QueryLogRepository>,
) -> Router {
    let resolve = Arc::new(
        ResolveRecordUseCase::new(records.clone(), Arc::new(FallbackTable::builtin()))
            .with_query_log(query_log.clone()),
    );
    let state = AppState {
        resolve,
        get_records: Arc::new(GetRecordsUseCase::new(records.clone())),
        create_record: Arc::new(CreateRecordUseCase::new(records.clone())),
        get_queries: Arc::new(GetRecentQueriesUseCase::new(query_log.clone())),
        get_stats: Arc::new(GetStoreStatsUseCase::new(records, query_log)),
    };
    create_api_routes(state)
}

async fn create_test_app() -> Router {
    let pool = create_test_db().await;
    let records = Arc::new(SqliteRecordRepository::new(pool.clone()));
    BootstrapRecordsUseCase::new(records.clone(), seed_records())
        .execute()
        .await
        .unwrap();
    let cfg = DatabaseConfig {
        query_log_flush_interval_ms: 10,
        ..DatabaseConfig::default()
    };
    let query_log = Arc::new(SqliteQueryLogRepository::new(pool, &cfg));
    build_app(records, query_log)
}

fn create_offline_app() -> Router {
    build_app(Arc::new(OfflineRecordStore), Arc::new(OfflineQueryLog))
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

// ── health / lookup ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_health() {
    let app = create_test_app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_lookup_store_record() {
    let app = create_test_app().await;

    let (status, body) = get(&app, "/lookup?name=backup.futurebank.local&type=A").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "10.0.0.50");
    assert_eq!(body["type"], "A");
    assert_eq!(body["ttl"], 300);
    assert_eq!(body["source"], "store");
}

#[tokio::test]
async fn test_lookup_defaults_to_a_and_uses_static_table() {
    let app = create_test_app().await;

    let (status, body) = get(&app, "/lookup?name=localhost").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "127.0.0.1");
    assert_eq!(body["source"], "static");
}

#[tokio::test]
async fn test_lookup_unknown_is_404_nxdomain() {
    let app = create_test_app().await;

    let (status, body) = get(&app, "/lookup?name=totally.unknown.domain&type=A").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["result"], "NXDOMAIN");
}

#[tokio::test]
async fn test_lookup_bad_type_is_400() {
    let app = create_test_app().await;
    let (status, _) = get(&app, "/lookup?name=localhost&type=SRV").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_lookup_is_logged() {
    let app = create_test_app().await;
    get(&app, "/lookup?name=db").await;

    let mut logged = Value::Null;
    for _ in 0..100 {
        let (_, body) = get(&app, "/queries").await;
        if body.as_array().is_some_and(|a| !a.is_empty()) {
            logged = body;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    assert_eq!(logged[0]["name"], "db");
    assert_eq!(logged[0]["response"], "172.18.0.2");
    assert_eq!(logged[0]["client"], "unknown");
}

// ── records ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_records() {
    let app = create_test_app().await;
    let (status, body) = get(&app, "/records").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 9);
}

#[tokio::test]
async fn test_create_record_then_lookup() {
    let app = create_test_app().await;

    let (status, body) = post_json(
        &app,
        "/records",
        json!({ "name": "Mail.FutureBank.Local", "type": "TXT", "value": "v=spf1 -all" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "mail.futurebank.local");
    assert_eq!(body["ttl"], 300);

    let (status, body) = get(&app, "/lookup?name=mail.futurebank.local&type=TXT").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "v=spf1 -all");
}

#[tokio::test]
async fn test_create_invalid_record_is_400() {
    let app = create_test_app().await;

    let (status, body) = post_json(
        &app,
        "/records",
        json!({ "name": "bad.lan", "type": "A", "value": "300.1.1.1" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_zone_listing() {
    let app = create_test_app().await;

    let (status, body) = get(&app, "/zone/futurebank.local").await;

    assert_eq!(status, StatusCode::OK);
    let zone = body.as_array().unwrap();
    assert_eq!(zone.len(), 9);
    assert!(zone.iter().any(|r| r["type"] == "SOA"));
}

// ── queries / stats ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_stats() {
    let app = create_test_app().await;

    let (status, body) = get(&app, "/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["record_count"], 9);
    assert_eq!(body["server_status"], "running");
}

#[tokio::test]
async fn test_queries_empty() {
    let app = create_test_app().await;
    let (status, body) = get(&app, "/queries?limit=5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// ── offline store ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_offline_store_reports_503() {
    let app = create_offline_app();

    for uri in ["/records", "/zone/futurebank.local", "/queries", "/stats"] {
        let (status, _) = get(&app, uri).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE, "{}", uri);
    }
}

#[tokio::test]
async fn test_offline_store_lookup_still_answers_from_static_table() {
    let app = create_offline_app();

    let (status, body) = get(&app, "/lookup?name=wordpress").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], "172.18.0.4");
}
