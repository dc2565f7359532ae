#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use mockall::mock;

use accounts_backend::database::user_store::UserStore;
use accounts_backend::error::Result;
use accounts_backend::models::user::User;

mock! {
    pub UserStore {}

    #[async_trait]
    impl UserStore for UserStore {
        async fn find_all(&self) -> Result<Vec<User>>;
        async fn find_by_mail(&self, mail: &str) -> Result<Option<User>>;
        async fn find_by_id(&self, id: i64) -> Result<Option<User>>;
        async fn insert(&self, user: User) -> Result<User>;
        async fn update(&self, user: User) -> Result<User>;
        async fn delete_by_id(&self, id: i64) -> Result<u64>;
    }
}

pub fn persisted_user(id: i64, mail: &str) -> User {
    User {
        id: Some(id),
        mail: mail.to_string(),
        first_name: format!("firstName{}", id),
        last_name: format!("lastName{}", id),
        middle_name: String::new(),
        is_active: true,
        created_at: Some(Utc.with_ymd_and_hms(2024, 6, 12, 9, 0, 0).unwrap()),
        updated_at: None,
    }
}

pub fn persisted_users(count: i64) -> Vec<User> {
    (1..=count)
        .map(|id| persisted_user(id, &format!("{}@example.com", id)))
        .collect()
}
