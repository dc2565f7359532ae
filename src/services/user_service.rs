use std::sync::Arc;

use tracing::warn;

use crate::database::user_store::UserStore;
use crate::dto::user_dto::{CreateUserPayload, UpdateUserPayload};
use crate::error::{Error, Result};
use crate::models::user::User;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<User>> {
        self.store.find_all().await
    }

    pub async fn get_by_mail(&self, mail: &str) -> Result<User> {
        self.find_by_mail(mail).await
    }

    pub async fn create(&self, payload: CreateUserPayload) -> Result<User> {
        let user = User {
            id: None,
            mail: payload.mail,
            first_name: payload.first_name,
            last_name: payload.last_name,
            middle_name: payload.middle_name,
            is_active: true,
            created_at: None,
            updated_at: None,
        };

        self.store.insert(user).await
    }

    /// Replaces the name fields of an active user. Mail and id are kept;
    /// the store stamps `updated_at`.
    pub async fn update(&self, mail: &str, payload: UpdateUserPayload) -> Result<User> {
        let user = self.find_by_mail(mail).await?;
        if !user.is_active {
            warn!("update rejected for inactive user, mail: {}", mail);
            return Err(Error::Conflict(format!("user is not active: {}", mail)));
        }

        let replacement = User {
            first_name: payload.first_name,
            last_name: payload.last_name,
            middle_name: payload.middle_name,
            ..user
        };

        self.store.update(replacement).await
    }

    pub async fn activate(&self, id: i64) -> Result<()> {
        self.set_active(id, true).await
    }

    pub async fn deactivate(&self, id: i64) -> Result<()> {
        self.set_active(id, false).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        let deleted = self.store.delete_by_id(id).await?;
        if deleted == 0 {
            return Err(Error::NotFound(format!("user not found for id: {}", id)));
        }

        Ok(())
    }

    async fn find_by_mail(&self, mail: &str) -> Result<User> {
        self.store
            .find_by_mail(mail)
            .await?
            .ok_or_else(|| Error::NotFound(format!("user not found for mail: {}", mail)))
    }

    async fn set_active(&self, id: i64, is_active: bool) -> Result<()> {
        let user = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("user not found for id: {}", id)))?;

        let replacement = User { is_active, ..user };
        self.store.update(replacement).await?;

        Ok(())
    }
}
