//! Repository trait for user data access.

use crate::domain::entities::{NewUser, User, UserUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing users.
///
/// Every operation targeting a specific user translates a missing row into
/// [`AppError::NotFound`] carrying the requested id; callers never see a
/// bare `Option`.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_user.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists users ordered by creation time ascending, with their contacts
    /// eagerly attached.
    ///
    /// Returns the windowed page and the unfiltered total count; the total
    /// is invariant under `limit`/`offset`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<User>, i64), AppError>;

    /// Fetches a single user with its contacts attached.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id has no backing record.
    /// Returns [`AppError::Internal`] on database errors.
    async fn get(&self, user_id: i64) -> Result<User, AppError>;

    /// Creates a user and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_user: NewUser) -> Result<i64, AppError>;

    /// Replaces the user's mutable fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id has no backing record.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, user_id: i64, update: UserUpdate) -> Result<(), AppError>;

    /// Deletes a user together with all of its contacts.
    ///
    /// The cascade is an explicit two-step operation (contacts first, then
    /// the user) executed inside one transaction; a missing user rolls the
    /// whole unit back.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id has no backing record.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, user_id: i64) -> Result<(), AppError>;
}
