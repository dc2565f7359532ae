use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::{Error, Result};
use crate::models::user::User;

/// Persistence port for user records. Object-safe so services can hold it
/// behind a trait object and tests can substitute a double.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>>;
    async fn find_by_mail(&self, mail: &str) -> Result<Option<User>>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;
    /// Persists a not-yet-persisted user. Returns the stored row with the
    /// backend-assigned id and `created_at` populated.
    async fn insert(&self, user: User) -> Result<User>;
    /// Whole-value replacement keyed by `user.id`. Stamps `updated_at`.
    async fn update(&self, user: User) -> Result<User>;
    /// Returns the number of rows deleted.
    async fn delete_by_id(&self, id: i64) -> Result<u64>;
}

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, mail, first_name, last_name, middle_name, is_active, created_at, updated_at
             FROM users
             ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    async fn find_by_mail(&self, mail: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, mail, first_name, last_name, middle_name, is_active, created_at, updated_at
             FROM users
             WHERE mail = $1",
        )
        .bind(mail)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, mail, first_name, last_name, middle_name, is_active, created_at, updated_at
             FROM users
             WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, user: User) -> Result<User> {
        let inserted = sqlx::query_as::<_, User>(
            "INSERT INTO users (mail, first_name, last_name, middle_name, is_active)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, mail, first_name, last_name, middle_name, is_active, created_at, updated_at",
        )
        .bind(&user.mail)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.middle_name)
        .bind(user.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }

    async fn update(&self, user: User) -> Result<User> {
        let id = user
            .id
            .ok_or_else(|| Error::Internal("cannot update a user without an id".to_string()))?;

        let updated = sqlx::query_as::<_, User>(
            "UPDATE users
             SET mail = $2,
                 first_name = $3,
                 last_name = $4,
                 middle_name = $5,
                 is_active = $6,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING id, mail, first_name, last_name, middle_name, is_active, created_at, updated_at",
        )
        .bind(id)
        .bind(&user.mail)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.middle_name)
        .bind(user.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_by_id(&self, id: i64) -> Result<u64> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(res.rows_affected())
    }
}
