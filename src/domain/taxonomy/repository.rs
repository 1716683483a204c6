// src/domain/taxonomy/repository.rs
use super::{Category, CategoryId, NewCategory, NewTag, Tag, TagId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Category>>;
    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>>;
    /// Ordered by sort order, then id.
    async fn list_all(&self) -> DomainResult<Vec<Category>>;
    /// Each category with the number of articles visible to the public at `now`.
    async fn list_with_published_counts(
        &self,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<(Category, u64)>>;
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag>;
    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Tag>>;
    async fn find_by_ids(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>>;
    async fn list_all(&self) -> DomainResult<Vec<Tag>>;
}
