//! JWT credentials middleware for write endpoints.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Verifies caller credentials on write requests.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <RS256 JWT>
/// ```
///
/// # Flow
///
/// 1. Safe methods (GET, HEAD, OPTIONS) pass through untouched; reads
///    are public.
/// 2. For write methods, the `Authorization` header is parsed and the
///    JWT signature is verified against the configured public key.
/// 3. The resulting [`Creator`](crate::application::services::Creator)
///    is inserted as a request extension for handlers to pick up.
///
/// # Errors
///
/// Returns `400 Bad Request` with a field error on `Authorization` if
/// the header is missing, malformed, or carries an unverifiable token.
/// Whether the caller may touch the addressed record is a separate,
/// per-handler decision.
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware};
/// use crate::api::middleware::auth;
///
/// let api = api_routes()
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if req.method().is_safe() {
        return Ok(next.run(req).await);
    }

    let creator = st.auth_service.verify_credentials(req.headers())?;

    req.extensions_mut().insert(creator);

    Ok(next.run(req).await)
}
