//! PostgreSQL implementation of the contact repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use super::rows::ContactRow;
use crate::domain::entities::{Contact, ContactUpdate, NewContact};
use crate::domain::repositories::ContactRepository;
use crate::error::AppError;

/// PostgreSQL repository for contact storage and retrieval.
///
/// User-scoped operations verify the owning user row first so a missing
/// parent reports the user's NotFound instead of an empty result.
pub struct PgContactRepository {
    pool: Arc<PgPool>,
}

impl PgContactRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn ensure_user_exists(&self, user_id: i64) -> Result<(), AppError> {
        let id: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        if id.is_none() {
            return Err(AppError::user_not_found(user_id));
        }

        Ok(())
    }
}

#[async_trait]
impl ContactRepository for PgContactRepository {
    async fn list_for_user(
        &self,
        user_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<Contact>, i64), AppError> {
        self.ensure_user_exists(user_id).await?;

        let rows: Vec<ContactRow> = sqlx::query_as(
            r#"
            SELECT id, phone_no, email, type, created_at, user_id
            FROM contacts
            WHERE user_id = $1
            ORDER BY created_at ASC, id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        let contacts = rows
            .into_iter()
            .map(ContactRow::into_contact)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((contacts, total))
    }

    async fn get(&self, contact_id: i64) -> Result<Contact, AppError> {
        let row: Option<ContactRow> = sqlx::query_as(
            "SELECT id, phone_no, email, type, created_at, user_id FROM contacts WHERE id = $1",
        )
        .bind(contact_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.ok_or_else(|| AppError::contact_not_found(contact_id))?
            .into_contact()
    }

    async fn create(&self, user_id: i64, new_contact: NewContact) -> Result<i64, AppError> {
        self.ensure_user_exists(user_id).await?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO contacts (phone_no, email, type, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new_contact.phone_no)
        .bind(&new_contact.email)
        .bind(new_contact.contact_type.code())
        .bind(user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn update(&self, contact_id: i64, update: ContactUpdate) -> Result<(), AppError> {
        let result =
            sqlx::query("UPDATE contacts SET phone_no = $1, email = $2, type = $3 WHERE id = $4")
                .bind(&update.phone_no)
                .bind(&update.email)
                .bind(update.contact_type.code())
                .bind(contact_id)
                .execute(self.pool.as_ref())
                .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::contact_not_found(contact_id));
        }

        Ok(())
    }

    async fn delete(&self, contact_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = $1")
            .bind(contact_id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::contact_not_found(contact_id));
        }

        Ok(())
    }

    async fn delete_all_for_user(&self, user_id: i64) -> Result<(), AppError> {
        self.ensure_user_exists(user_id).await?;

        sqlx::query("DELETE FROM contacts WHERE user_id = $1")
            .bind(user_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
