//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod contacts;
pub mod health;
pub mod users;

pub use contacts::{
    create_user_contact_handler, delete_contact_handler, delete_user_contacts_handler,
    get_contact_handler, list_user_contacts_handler, update_contact_handler,
};
pub use health::health_handler;
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
