//! Handlers for user management endpoints.

use axum::{
    Extension, Json,
    extract::{Form, Path, Query, State},
    http::StatusCode,
};

use crate::api::dto::pagination::PageParams;
use crate::api::dto::user::{
    CreatedUser, UserCreatedResponse, UserItem, UserListResponse, UserPayload, UserResponse,
};
use crate::application::services::Creator;
use crate::domain::entities::{NewUser, UserUpdate};
use crate::error::AppError;
use crate::state::AppState;

/// Lists users with their contacts.
///
/// # Endpoint
///
/// `GET /api/users?limit&offset`
///
/// `total` is the unfiltered user count and does not change with the
/// paging window.
///
/// # Errors
///
/// Returns 400 with field errors if `limit`/`offset` fail validation.
pub async fn list_users_handler(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<UserListResponse>, AppError> {
    let window = params.validate(state.paging)?;

    let (users, total) = state.users.list(window.limit, window.offset).await?;

    Ok(Json(UserListResponse {
        total,
        result: users.into_iter().map(UserItem::from).collect(),
    }))
}

/// Creates a user owned by the caller.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// The verified creator becomes the owner; ownership cannot be assigned
/// through the payload.
///
/// # Errors
///
/// Returns 400 with a field error if `name` is missing or invalid.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Extension(creator): Extension<Creator>,
    Form(payload): Form<UserPayload>,
) -> Result<(StatusCode, Json<UserCreatedResponse>), AppError> {
    let fields = payload.validate()?;

    let user_id = state
        .users
        .create(NewUser {
            name: fields.name,
            creator_id: creator.id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserCreatedResponse {
            result: CreatedUser { user_id },
        }),
    ))
}

/// Fetches a single user with nested contacts.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// # Errors
///
/// Returns 404 if the id has no backing record.
pub async fn get_user_handler(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.users.get(user_id).await?;

    Ok(Json(UserResponse {
        result: UserItem::from(user),
    }))
}

/// Renames a user, owner-only.
///
/// # Endpoint
///
/// `PUT /api/users/{id}`
///
/// Stages run in fixed order: the body is validated before ownership is
/// checked, and the mutation runs only once both pass.
///
/// # Errors
///
/// Returns 400 with field errors if the body is invalid.
/// Returns 404 if the user does not exist.
/// Returns 401 if the caller does not own the user.
pub async fn update_user_handler(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
    Extension(creator): Extension<Creator>,
    Form(payload): Form<UserPayload>,
) -> Result<StatusCode, AppError> {
    let fields = payload.validate()?;

    state
        .auth_service
        .ensure_can_edit_user(user_id, creator)
        .await?;

    state
        .users
        .update(user_id, UserUpdate { name: fields.name })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a user and all of its contacts, owner-only.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
///
/// The cascade is a single repository unit; a failed ownership check
/// leaves both tables untouched.
///
/// # Errors
///
/// Returns 404 if the user does not exist.
/// Returns 401 if the caller does not own the user.
pub async fn delete_user_handler(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
    Extension(creator): Extension<Creator>,
) -> Result<StatusCode, AppError> {
    state
        .auth_service
        .ensure_can_edit_user(user_id, creator)
        .await?;

    state.users.delete(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
