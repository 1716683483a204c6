// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::ArticleUpdate,
};
use chrono::{DateTime, Utc};

pub struct PublishArticleCommand {
    pub id: i64,
    /// Publish at this instant instead of now. Past values are accepted.
    pub scheduled_at: Option<DateTime<Utc>>,
}

pub struct UnpublishArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn publish_article(
        &self,
        actor: &AuthenticatedUser,
        command: PublishArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_article(command.id).await?;
        self.ensure_can_modify(actor, &article).await?;

        let now = self.clock.now();
        match command.scheduled_at {
            Some(at) => article.schedule(at, now),
            None => article.publish(now),
        }

        let update = ArticleUpdate::new(article.id, now)
            .with_publish_state(article.status, article.published_at);
        let updated = self.write_repo.update(update).await?;
        tracing::info!(
            article_id = %updated.id,
            status = %updated.status,
            published_at = ?updated.published_at,
            "article publish state changed"
        );
        self.assembler.detail(updated).await
    }

    pub async fn unpublish_article(
        &self,
        actor: &AuthenticatedUser,
        command: UnpublishArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_article(command.id).await?;
        self.ensure_can_modify(actor, &article).await?;

        let now = self.clock.now();
        article.unpublish(now);

        let update = ArticleUpdate::new(article.id, now)
            .with_publish_state(article.status, article.published_at);
        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %updated.id, "article unpublished");
        self.assembler.detail(updated).await
    }
}
