use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::listing::ArticleListCriteria;
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Inserts the row and its tag links atomically. A taken slug is reported
    /// as `DomainError::Conflict`.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Removes the article and its tag links.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool>;
    /// One page of matching articles together with the total match count.
    async fn list_page(&self, criteria: &ArticleListCriteria) -> DomainResult<(Vec<Article>, u64)>;
}
