use crate::domain::user::{Role, User};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Author block embedded in article payloads.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub id: i64,
    pub display_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub role: Role,
}

impl From<User> for UserSummaryDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            display_name: user.display_name,
            avatar: user.avatar,
            role: user.role,
        }
    }
}
