//! API route configuration.
//!
//! Write endpoints require JWT credentials via
//! [`crate::api::middleware::auth`]; reads are public.

use crate::api::handlers::{
    create_user_contact_handler, create_user_handler, delete_contact_handler,
    delete_user_contacts_handler, delete_user_handler, get_contact_handler, get_user_handler,
    list_user_contacts_handler, list_users_handler, update_contact_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /users`                - List users with nested contacts (paginated)
/// - `POST   /users`                - Create a user owned by the caller
/// - `GET    /users/{id}`           - Fetch a single user
/// - `PUT    /users/{id}`           - Rename a user (owner-only)
/// - `DELETE /users/{id}`           - Delete a user and its contacts (owner-only)
/// - `GET    /users/{id}/contacts`  - List a user's contacts (paginated)
/// - `POST   /users/{id}/contacts`  - Add a contact (owner-only)
/// - `DELETE /users/{id}/contacts`  - Remove all contacts, keep the user (owner-only)
/// - `GET    /contacts/{id}`        - Fetch a single contact
/// - `PUT    /contacts/{id}`        - Replace a contact's fields (owner-only)
/// - `DELETE /contacts/{id}`        - Delete a contact (owner-only)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route(
            "/users/{id}/contacts",
            get(list_user_contacts_handler)
                .post(create_user_contact_handler)
                .delete(delete_user_contacts_handler),
        )
        .route(
            "/contacts/{id}",
            get(get_contact_handler)
                .put(update_contact_handler)
                .delete(delete_contact_handler),
        )
}
