#![allow(dead_code)]

use axum::{Router, middleware};
use axum_test::TestServer;
use contact_book::api::dto::pagination::PagingLimits;
use contact_book::api::middleware::auth;
use contact_book::api::routes::api_routes;
use contact_book::application::services::AuthService;
use contact_book::domain::repositories::{ContactRepository, UserRepository};
use contact_book::infrastructure::persistence::{PgContactRepository, PgUserRepository};
use contact_book::state::AppState;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header};
use sqlx::PgPool;
use std::sync::Arc;

pub const PRIVATE_KEY_PEM: &str = include_str!("../keys/jwt_private.pem");
pub const PUBLIC_KEY_PEM: &str = include_str!("../keys/jwt_public.pem");

/// Signs an RS256 JWT carrying `{"id": creator_id}`, matching what the
/// service expects in the `Authorization` header.
pub fn make_token(creator_id: i64) -> String {
    let key = EncodingKey::from_rsa_pem(PRIVATE_KEY_PEM.as_bytes()).unwrap();
    let claims = serde_json::json!({ "id": creator_id });
    jsonwebtoken::encode(&Header::new(Algorithm::RS256), &claims, &key).unwrap()
}

/// `Authorization` header value for the given creator.
pub fn bearer(creator_id: i64) -> String {
    format!("Bearer {}", make_token(creator_id))
}

pub async fn create_test_user(pool: &PgPool, name: &str, creator_id: i64) -> i64 {
    sqlx::query_scalar("INSERT INTO users (name, creator_id) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(creator_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn create_test_contact(
    pool: &PgPool,
    user_id: i64,
    phone_no: &str,
    email: &str,
    type_code: i16,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO contacts (phone_no, email, type, user_id) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(phone_no)
    .bind(email)
    .bind(type_code)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_contacts_for_user(pool: &PgPool, user_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM contacts WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(pool.clone()));
    let contacts: Arc<dyn ContactRepository> = Arc::new(PgContactRepository::new(pool.clone()));

    let decoding_key = DecodingKey::from_rsa_pem(PUBLIC_KEY_PEM.as_bytes()).unwrap();
    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        contacts.clone(),
        decoding_key,
    ));

    AppState {
        users,
        contacts,
        auth_service,
        paging: PagingLimits { max_limit: 100 },
    }
}

/// Builds a test server with the full API route table and the credentials
/// middleware, mirroring the production composition minus rate limiting.
pub fn make_server(pool: PgPool) -> TestServer {
    let state = create_test_state(pool);

    let app = Router::new()
        .nest(
            "/api",
            api_routes().route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
        )
        .with_state(state);

    TestServer::new(app).unwrap()
}
