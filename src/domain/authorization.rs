// src/domain/authorization.rs
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::user::{UserId, UserRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny,
}

impl AccessDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

/// Decides whether `requester_id` may mutate a resource owned by `owner_id`.
#[async_trait]
pub trait AuthorizationPolicy: Send + Sync {
    async fn authorize(
        &self,
        owner_id: UserId,
        requester_id: UserId,
    ) -> DomainResult<AccessDecision>;
}

/// Owners always pass; anyone else must hold the admin role. An unknown
/// requester is denied. Repository failures are returned, not folded into a
/// decision.
pub struct OwnerOrAdminPolicy {
    users: Arc<dyn UserRepository>,
}

impl OwnerOrAdminPolicy {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthorizationPolicy for OwnerOrAdminPolicy {
    async fn authorize(
        &self,
        owner_id: UserId,
        requester_id: UserId,
    ) -> DomainResult<AccessDecision> {
        if owner_id == requester_id {
            return Ok(AccessDecision::Allow);
        }

        let decision = match self.users.find_by_id(requester_id).await? {
            Some(user) if user.role.is_admin() => AccessDecision::Allow,
            _ => AccessDecision::Deny,
        };
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::domain::user::{Role, User};
    use chrono::Utc;

    struct Users(Vec<User>);

    #[async_trait]
    impl UserRepository for Users {
        async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
            Ok(self.0.iter().find(|u| u.id == id).cloned())
        }

        async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
            Ok(self.0.iter().filter(|u| ids.contains(&u.id)).cloned().collect())
        }
    }

    struct BrokenUsers;

    #[async_trait]
    impl UserRepository for BrokenUsers {
        async fn find_by_id(&self, _id: UserId) -> DomainResult<Option<User>> {
            Err(DomainError::Persistence("connection reset".into()))
        }

        async fn find_by_ids(&self, _ids: &[UserId]) -> DomainResult<Vec<User>> {
            Err(DomainError::Persistence("connection reset".into()))
        }
    }

    fn user(id: i64, role: Role) -> User {
        User {
            id: UserId(id),
            email: format!("u{id}@example.com"),
            display_name: format!("user {id}"),
            avatar: None,
            role,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn policy() -> OwnerOrAdminPolicy {
        OwnerOrAdminPolicy::new(Arc::new(Users(vec![
            user(1, Role::Admin),
            user(2, Role::Author),
            user(3, Role::Author),
        ])))
    }

    #[tokio::test]
    async fn owner_is_allowed_without_lookup() {
        let policy = OwnerOrAdminPolicy::new(Arc::new(BrokenUsers));
        let decision = policy.authorize(UserId(9), UserId(9)).await.unwrap();
        assert_eq!(decision, AccessDecision::Allow);
    }

    #[tokio::test]
    async fn admin_is_allowed_on_foreign_resource() {
        let decision = policy().authorize(UserId(2), UserId(1)).await.unwrap();
        assert!(decision.is_allowed());
    }

    #[tokio::test]
    async fn other_author_is_denied() {
        let decision = policy().authorize(UserId(2), UserId(3)).await.unwrap();
        assert_eq!(decision, AccessDecision::Deny);
    }

    #[tokio::test]
    async fn unknown_requester_is_denied() {
        let decision = policy().authorize(UserId(2), UserId(42)).await.unwrap();
        assert_eq!(decision, AccessDecision::Deny);
    }

    #[tokio::test]
    async fn lookup_failure_is_surfaced() {
        let policy = OwnerOrAdminPolicy::new(Arc::new(BrokenUsers));
        let result = policy.authorize(UserId(2), UserId(3)).await;
        assert!(matches!(result, Err(DomainError::Persistence(_))));
    }
}
