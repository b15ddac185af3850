//! User request payloads and response shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::contact::ContactItem;
use crate::domain::entities::User;
use crate::error::{AppError, FieldError};

const NAME_MAX_LENGTH: usize = 128;

/// Raw form body for user create and update requests.
#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    pub name: Option<String>,
}

/// Validated user fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFields {
    pub name: String,
}

impl UserPayload {
    /// Validates the payload into typed fields.
    ///
    /// `name` is required and must be 1–128 characters after trimming
    /// surrounding whitespace.
    pub fn validate(&self) -> Result<UserFields, AppError> {
        let Some(raw) = self.name.as_deref() else {
            return Err(AppError::field(FieldError::missing("name")));
        };

        let name = raw.trim();
        if name.is_empty() {
            return Err(AppError::field(FieldError::invalid(
                "name",
                "Name must not be empty",
            )));
        }
        if name.chars().count() > NAME_MAX_LENGTH {
            return Err(AppError::field(FieldError::too_long(
                "name",
                format!("Maximum name length is {NAME_MAX_LENGTH}"),
            )));
        }

        Ok(UserFields {
            name: name.to_string(),
        })
    }
}

/// A user as serialized in responses.
///
/// `creator_id` never leaves the service; `contacts` is always present,
/// empty for a user without contacts.
#[derive(Debug, Serialize)]
pub struct UserItem {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub contacts: Vec<ContactItem>,
}

impl From<User> for UserItem {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            created_at: user.created_at,
            contacts: user.contacts.into_iter().map(ContactItem::from).collect(),
        }
    }
}

/// Response body for `GET /api/users`.
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub total: i64,
    pub result: Vec<UserItem>,
}

/// Response body for `GET /api/users/{id}`.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub result: UserItem,
}

/// Response body for `POST /api/users`.
#[derive(Debug, Serialize)]
pub struct UserCreatedResponse {
    pub result: CreatedUser,
}

#[derive(Debug, Serialize)]
pub struct CreatedUser {
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Contact, ContactType};

    fn payload(name: Option<&str>) -> UserPayload {
        UserPayload {
            name: name.map(str::to_string),
        }
    }

    fn first_error(payload: UserPayload) -> FieldError {
        match payload.validate().unwrap_err() {
            AppError::Validation { mut errors } => errors.remove(0),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_name_is_trimmed() {
        let fields = payload(Some("  Frank Foobar  ")).validate().unwrap();
        assert_eq!(fields.name, "Frank Foobar");
    }

    #[test]
    fn test_missing_name_is_a_missing_field() {
        let err = first_error(payload(None));
        assert_eq!(err.location, "name");
        assert_eq!(err.kind, "missing");
        assert_eq!(err.message, "Field is required");
    }

    #[test]
    fn test_whitespace_only_name_is_rejected() {
        let err = first_error(payload(Some("   ")));
        assert_eq!(err.location, "name");
        assert_eq!(err.message, "Name must not be empty");
    }

    #[test]
    fn test_name_length_boundary() {
        assert!(payload(Some(&"x".repeat(128))).validate().is_ok());

        let err = first_error(payload(Some(&"x".repeat(129))));
        assert_eq!(err.kind, "too_long");
        assert_eq!(err.message, "Maximum name length is 128");
    }

    #[test]
    fn test_user_item_hides_the_creator() {
        let user = User {
            id: 3,
            name: "John Doe".to_string(),
            created_at: Utc::now(),
            creator_id: 300,
            contacts: vec![Contact {
                id: 1,
                phone_no: String::new(),
                email: "john@doe.com".to_string(),
                contact_type: ContactType::Home,
                created_at: Utc::now(),
                user_id: 3,
            }],
        };

        let value = serde_json::to_value(UserItem::from(user)).unwrap();

        assert_eq!(value["id"], 3);
        assert_eq!(value["name"], "John Doe");
        assert!(value.get("creator_id").is_none());
        assert_eq!(value["contacts"][0]["type"], "home");
        assert!(value["contacts"][0].get("user_id").is_none());
    }
}
