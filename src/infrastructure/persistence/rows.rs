//! Row types shared by the Postgres repositories.

use chrono::{DateTime, Utc};

use crate::domain::entities::{Contact, ContactType, User};
use crate::error::AppError;

#[derive(sqlx::FromRow)]
pub(super) struct UserRow {
    pub(super) id: i64,
    pub(super) name: String,
    pub(super) created_at: DateTime<Utc>,
    pub(super) creator_id: i64,
}

impl UserRow {
    pub(super) fn into_user(self, contacts: Vec<Contact>) -> User {
        User {
            id: self.id,
            name: self.name,
            created_at: self.created_at,
            creator_id: self.creator_id,
            contacts,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(super) struct ContactRow {
    pub(super) id: i64,
    pub(super) phone_no: String,
    pub(super) email: String,
    #[sqlx(rename = "type")]
    pub(super) contact_type: i16,
    pub(super) created_at: DateTime<Utc>,
    pub(super) user_id: i64,
}

impl ContactRow {
    pub(super) fn into_contact(self) -> Result<Contact, AppError> {
        let contact_type = ContactType::from_code(self.contact_type).ok_or_else(|| {
            tracing::error!(
                contact_id = self.id,
                code = self.contact_type,
                "Unknown contact type code in storage"
            );
            AppError::internal("Unknown contact type code")
        })?;

        Ok(Contact {
            id: self.id,
            phone_no: self.phone_no,
            email: self.email,
            contact_type,
            created_at: self.created_at,
            user_id: self.user_id,
        })
    }
}
