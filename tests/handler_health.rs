mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use contact_book::api::handlers::health_handler;
use sqlx::PgPool;

#[sqlx::test]
async fn test_health_endpoint_success(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_user(&pool, "Frank Foobar", 100).await;

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["database"]["message"], "Connected, 1 users");
}

#[sqlx::test]
async fn test_health_endpoint_degraded_when_database_is_unreachable(pool: PgPool) {
    let state = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    // The state shares this pool, so closing it takes the database away
    // from the handler.
    pool.close().await;

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
    assert!(json["checks"]["database"]["message"].is_string());
}

#[sqlx::test]
async fn test_health_endpoint_structure(pool: PgPool) {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("database").is_some());
}
