// src/application/commands/articles/access.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{Article, ArticleId},
        authorization::AccessDecision,
        taxonomy::{CategoryId, TagId},
    },
};

impl ArticleCommandService {
    pub(super) async fn load_article(&self, id: i64) -> ApplicationResult<Article> {
        let id = ArticleId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    /// Owner or administrator; anything else is `Forbidden`.
    pub(super) async fn ensure_can_modify(
        &self,
        actor: &AuthenticatedUser,
        article: &Article,
    ) -> ApplicationResult<()> {
        match self.policy.authorize(article.author_id, actor.id).await? {
            AccessDecision::Allow => Ok(()),
            AccessDecision::Deny => Err(ApplicationError::forbidden(
                "only the author or an administrator may modify this article",
            )),
        }
    }

    /// Unknown or non-positive ids resolve to no category.
    pub(super) async fn resolve_category(
        &self,
        id: Option<i64>,
    ) -> ApplicationResult<Option<CategoryId>> {
        let Some(id) = id.and_then(|raw| CategoryId::new(raw).ok()) else {
            return Ok(None);
        };
        let found = self.category_repo.find_by_ids(&[id]).await?;
        Ok(found.first().map(|category| category.id))
    }

    /// Keeps only the ids that name an existing tag.
    pub(super) async fn resolve_tags(&self, ids: &[i64]) -> ApplicationResult<Vec<TagId>> {
        let mut wanted: Vec<TagId> = ids.iter().filter_map(|raw| TagId::new(*raw).ok()).collect();
        wanted.sort_unstable();
        wanted.dedup();
        if wanted.is_empty() {
            return Ok(wanted);
        }
        let found = self.tag_repo.find_by_ids(&wanted).await?;
        Ok(found.into_iter().map(|tag| tag.id).collect())
    }
}
