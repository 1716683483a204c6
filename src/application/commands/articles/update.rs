// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleContent, ArticleTitle, ArticleUpdate},
};

/// Replaces every editable field and the whole tag set. The slug is kept.
#[derive(Debug, Clone)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let mut article = self.load_article(command.id).await?;
        self.ensure_can_modify(actor, &article).await?;

        let title = ArticleTitle::new(command.title)?;
        let category_id = self.resolve_category(command.category_id).await?;
        let tag_ids = self.resolve_tags(&command.tag_ids).await?;
        let now = self.clock.now();

        article.apply_content(
            ArticleContent {
                title,
                summary: command.summary,
                content: command.content,
                cover_image: command.cover_image,
                category_id,
            },
            tag_ids,
            now,
        );

        let update = ArticleUpdate::new(article.id, now)
            .with_content(article.content())
            .with_tags(article.tag_ids.clone());
        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %updated.id, version = updated.version, "article updated");
        self.assembler.detail(updated).await
    }
}
