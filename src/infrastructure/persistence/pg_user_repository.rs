//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;
use std::sync::Arc;

use super::rows::{ContactRow, UserRow};
use crate::domain::entities::{Contact, NewUser, User, UserUpdate};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for user storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection and type safety.
/// Contacts are attached with a second grouped query rather than a join, so
/// the paging window applies to users alone.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn contacts_for_users(
        &self,
        user_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Contact>>, AppError> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<ContactRow> = sqlx::query_as(
            r#"
            SELECT id, phone_no, email, type, created_at, user_id
            FROM contacts
            WHERE user_id = ANY($1)
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(user_ids)
        .fetch_all(self.pool.as_ref())
        .await?;

        let mut grouped: HashMap<i64, Vec<Contact>> = HashMap::new();
        for row in rows {
            let contact = row.into_contact()?;
            grouped.entry(contact.user_id).or_default().push(contact);
        }

        Ok(grouped)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn list(&self, limit: i64, offset: i64) -> Result<(Vec<User>, i64), AppError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
            SELECT id, name, created_at, creator_id
            FROM users
            ORDER BY created_at ASC, id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool.as_ref())
            .await?;

        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut contacts = self.contacts_for_users(&ids).await?;

        let users = rows
            .into_iter()
            .map(|row| {
                let attached = contacts.remove(&row.id).unwrap_or_default();
                row.into_user(attached)
            })
            .collect();

        Ok((users, total))
    }

    async fn get(&self, user_id: i64) -> Result<User, AppError> {
        let row: Option<UserRow> =
            sqlx::query_as("SELECT id, name, created_at, creator_id FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(self.pool.as_ref())
                .await?;

        let row = row.ok_or_else(|| AppError::user_not_found(user_id))?;

        let mut contacts = self.contacts_for_users(&[user_id]).await?;
        Ok(row.into_user(contacts.remove(&user_id).unwrap_or_default()))
    }

    async fn create(&self, new_user: NewUser) -> Result<i64, AppError> {
        let id: i64 =
            sqlx::query_scalar("INSERT INTO users (name, creator_id) VALUES ($1, $2) RETURNING id")
                .bind(&new_user.name)
                .bind(new_user.creator_id)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(id)
    }

    async fn update(&self, user_id: i64, update: UserUpdate) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE users SET name = $1 WHERE id = $2")
            .bind(&update.name)
            .bind(user_id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::user_not_found(user_id));
        }

        Ok(())
    }

    async fn delete(&self, user_id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM contacts WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(AppError::user_not_found(user_id));
        }

        tx.commit().await?;
        Ok(())
    }
}
