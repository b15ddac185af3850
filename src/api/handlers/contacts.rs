//! Handlers for contact management endpoints.
//!
//! Collection operations live under `/users/{id}/contacts` and authorize
//! against the addressed user. Item operations live under `/contacts/{id}`
//! and authorize against the contact's owning user.

use axum::{
    Extension, Json,
    extract::{Form, Path, Query, State},
    http::StatusCode,
};

use crate::api::dto::contact::{
    ContactCreatedResponse, ContactItem, ContactListResponse, ContactPayload, ContactResponse,
    CreatedContact,
};
use crate::api::dto::pagination::PageParams;
use crate::application::services::Creator;
use crate::domain::entities::{ContactUpdate, NewContact};
use crate::error::AppError;
use crate::state::AppState;

/// Lists one user's contacts.
///
/// # Endpoint
///
/// `GET /api/users/{id}/contacts?limit&offset`
///
/// `total` counts all contacts of the addressed user, regardless of the
/// paging window.
///
/// # Errors
///
/// Returns 400 with field errors if `limit`/`offset` fail validation.
/// Returns 404 if the user does not exist.
pub async fn list_user_contacts_handler(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<Json<ContactListResponse>, AppError> {
    let window = params.validate(state.paging)?;

    let (contacts, total) = state
        .contacts
        .list_for_user(user_id, window.limit, window.offset)
        .await?;

    Ok(Json(ContactListResponse {
        total,
        result: contacts.into_iter().map(ContactItem::from).collect(),
    }))
}

/// Adds a contact to a user, owner-only.
///
/// # Endpoint
///
/// `POST /api/users/{id}/contacts`
///
/// The body is validated before ownership is checked.
///
/// # Errors
///
/// Returns 400 with field errors if the body is invalid.
/// Returns 404 if the user does not exist.
/// Returns 401 if the caller does not own the user.
pub async fn create_user_contact_handler(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
    Extension(creator): Extension<Creator>,
    Form(payload): Form<ContactPayload>,
) -> Result<(StatusCode, Json<ContactCreatedResponse>), AppError> {
    let fields = payload.validate()?;

    state
        .auth_service
        .ensure_can_edit_user(user_id, creator)
        .await?;

    let contact_id = state
        .contacts
        .create(
            user_id,
            NewContact {
                phone_no: fields.phone_no,
                email: fields.email,
                contact_type: fields.contact_type,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ContactCreatedResponse {
            result: CreatedContact { contact_id },
        }),
    ))
}

/// Deletes all contacts of a user, owner-only.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}/contacts`
///
/// The user itself stays. Succeeds with 204 even when the user has no
/// contacts.
///
/// # Errors
///
/// Returns 404 if the user does not exist.
/// Returns 401 if the caller does not own the user.
pub async fn delete_user_contacts_handler(
    Path(user_id): Path<i64>,
    State(state): State<AppState>,
    Extension(creator): Extension<Creator>,
) -> Result<StatusCode, AppError> {
    state
        .auth_service
        .ensure_can_edit_user(user_id, creator)
        .await?;

    state.contacts.delete_all_for_user(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Fetches a single contact.
///
/// # Endpoint
///
/// `GET /api/contacts/{id}`
///
/// # Errors
///
/// Returns 404 if the id has no backing record.
pub async fn get_contact_handler(
    Path(contact_id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ContactResponse>, AppError> {
    let contact = state.contacts.get(contact_id).await?;

    Ok(Json(ContactResponse {
        result: ContactItem::from(contact),
    }))
}

/// Replaces a contact's fields, owner-only.
///
/// # Endpoint
///
/// `PUT /api/contacts/{id}`
///
/// Ownership resolves through the contact's owning user, never through
/// the contact id itself. The body is validated before that check runs.
///
/// # Errors
///
/// Returns 400 with field errors if the body is invalid.
/// Returns 404 if the contact does not exist.
/// Returns 401 if the caller does not own the contact's user.
pub async fn update_contact_handler(
    Path(contact_id): Path<i64>,
    State(state): State<AppState>,
    Extension(creator): Extension<Creator>,
    Form(payload): Form<ContactPayload>,
) -> Result<StatusCode, AppError> {
    let fields = payload.validate()?;

    state
        .auth_service
        .ensure_can_edit_contact(contact_id, creator)
        .await?;

    state
        .contacts
        .update(
            contact_id,
            ContactUpdate {
                phone_no: fields.phone_no,
                email: fields.email,
                contact_type: fields.contact_type,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Deletes a single contact, owner-only.
///
/// # Endpoint
///
/// `DELETE /api/contacts/{id}`
///
/// # Errors
///
/// Returns 404 if the contact does not exist.
/// Returns 401 if the caller does not own the contact's user.
pub async fn delete_contact_handler(
    Path(contact_id): Path<i64>,
    State(state): State<AppState>,
    Extension(creator): Extension<Creator>,
) -> Result<StatusCode, AppError> {
    state
        .auth_service
        .ensure_can_edit_contact(contact_id, creator)
        .await?;

    state.contacts.delete(contact_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
