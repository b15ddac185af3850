//! Repository trait for contact data access.

use crate::domain::entities::{Contact, ContactUpdate, NewContact};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing contacts.
///
/// Operations scoped to a user (`*_for_user`) verify the user exists before
/// touching contacts, so a bad parent id surfaces as the user's NotFound,
/// not an empty result.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgContactRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_contact.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Lists a user's contacts ordered by creation time ascending.
    ///
    /// Returns the windowed page and the total count scoped to that user;
    /// the total is invariant under `limit`/`offset`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_for_user(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Contact>, i64), AppError>;

    /// Fetches a single contact.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id has no backing record.
    /// Returns [`AppError::Internal`] on database errors.
    async fn get(&self, contact_id: i64) -> Result<Contact, AppError>;

    /// Creates a contact under a user and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the parent user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, user_id: i64, new_contact: NewContact) -> Result<i64, AppError>;

    /// Replaces the contact's mutable fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id has no backing record.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, contact_id: i64, update: ContactUpdate) -> Result<(), AppError>;

    /// Deletes a single contact.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id has no backing record.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, contact_id: i64) -> Result<(), AppError>;

    /// Deletes all contacts belonging to a user.
    ///
    /// Deleting zero contacts is a success as long as the user exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete_all_for_user(&self, user_id: i64) -> Result<(), AppError>;
}
