// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Role, UserId};
use chrono::{DateTime, Utc};

/// Account owned by the authentication subsystem. Read-only here: used for
/// ownership checks and author summaries.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub display_name: String,
    pub avatar: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
