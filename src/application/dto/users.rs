use crate::domain::user::{Role, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            username: user.username.into(),
            email: user.email.into(),
            first_name: user.first_name.into(),
            last_name: user.last_name.into(),
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfileDto {
    pub user: UserDto,
    /// Capabilities granted by the caller's role, as `resource:action`.
    pub capabilities: Vec<String>,
}

impl UserProfileDto {
    pub fn from_user(user: User) -> Self {
        let mut capabilities: Vec<String> = user
            .role
            .default_capabilities()
            .into_iter()
            .map(|cap| format!("{}:{}", cap.resource, cap.action))
            .collect();
        capabilities.sort();
        Self {
            user: user.into(),
            capabilities,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActivationDto {
    pub username: String,
    pub detail: String,
}
