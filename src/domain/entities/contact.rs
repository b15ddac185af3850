//! Contact entity and its type classification.

use chrono::{DateTime, Utc};

/// Classification of a contact entry.
///
/// Stored as a small integer code, exposed on the wire as its lowercase
/// name. The name/code mapping is owned by this type and is bidirectional:
/// every variant has exactly one name and one code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactType {
    Home,
    Work,
    Other,
}

impl ContactType {
    pub const ALL: [ContactType; 3] = [ContactType::Home, ContactType::Work, ContactType::Other];

    /// The wire name for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            ContactType::Home => "home",
            ContactType::Work => "work",
            ContactType::Other => "other",
        }
    }

    /// The storage code for this type.
    pub fn code(self) -> i16 {
        match self {
            ContactType::Home => 1,
            ContactType::Work => 2,
            ContactType::Other => 3,
        }
    }

    /// Parses a wire name. Unknown names yield `None`, never a panic.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    /// Looks up a storage code. Unknown codes yield `None`.
    pub fn from_code(code: i16) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

/// A single way of reaching a user: a phone number or an email, never both.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: i64,
    pub phone_no: String,
    pub email: String,
    pub contact_type: ContactType,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
}

/// Input data for creating a contact under a user.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub phone_no: String,
    pub email: String,
    pub contact_type: ContactType,
}

/// Full replacement for an existing contact.
#[derive(Debug, Clone)]
pub struct ContactUpdate {
    pub phone_no: String,
    pub email: String,
    pub contact_type: ContactType,
}
