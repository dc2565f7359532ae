use serde::{Deserialize, Serialize};

use crate::models::audit::AuditFields;
use crate::models::user::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserPayload {
    pub mail: String,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserPayload {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub mail: String,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    #[serde(flatten)]
    pub audit: AuditFields,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub items: Vec<UserResponse>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let audit = value.audit();

        Self {
            mail: value.mail,
            first_name: value.first_name,
            last_name: value.last_name,
            middle_name: value.middle_name,
            audit,
        }
    }
}
