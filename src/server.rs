//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, key loading, and Axum server lifecycle.

use crate::api::dto::pagination::PagingLimits;
use crate::application::services::AuthService;
use crate::config::Config;
use crate::infrastructure::persistence::{PgContactRepository, PgUserRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use jsonwebtoken::DecodingKey;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - RSA public key for JWT verification
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - The public key cannot be read or parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let key_pem = std::fs::read(&config.public_key_path).with_context(|| {
        format!(
            "Failed to read public key from '{}'",
            config.public_key_path
        )
    })?;
    let decoding_key =
        DecodingKey::from_rsa_pem(&key_pem).context("Failed to parse RSA public key PEM")?;

    let pool = Arc::new(pool);
    let users: Arc<dyn crate::domain::repositories::UserRepository> =
        Arc::new(PgUserRepository::new(pool.clone()));
    let contacts: Arc<dyn crate::domain::repositories::ContactRepository> =
        Arc::new(PgContactRepository::new(pool.clone()));

    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        contacts.clone(),
        decoding_key,
    ));

    let state = AppState {
        users,
        contacts,
        auth_service,
        paging: PagingLimits {
            max_limit: config.paging_max_limit,
        },
    };

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when the process receives SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
