//! User entity owning a collection of contacts.

use chrono::{DateTime, Utc};

use super::contact::Contact;

/// A contact-book user.
///
/// `creator_id` is the authenticated identity that created the record and is
/// the only identity allowed to mutate it. It never appears in serialized
/// responses. `contacts` is eagerly attached by the repository so a user
/// always serializes with its contact list.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub creator_id: i64,
    pub contacts: Vec<Contact>,
}

/// Input data for creating a user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub creator_id: i64,
}

/// Update for an existing user. The name is the only mutable field.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub name: String,
}
