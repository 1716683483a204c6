// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleContent, ArticleSlug, ArticleTitle, NewArticle},
};

#[derive(Debug, Clone)]
pub struct CreateArticleCommand {
    pub title: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub category_id: Option<i64>,
    pub tag_ids: Vec<i64>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    summary: Option<String>,
    content: Option<String>,
    cover_image: Option<String>,
    category_id: Option<i64>,
    tag_ids: Vec<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn cover_image(mut self, cover_image: impl Into<String>) -> Self {
        self.cover_image = Some(cover_image.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn tag_ids(mut self, tag_ids: impl IntoIterator<Item = i64>) -> Self {
        self.tag_ids = tag_ids.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            summary: self.summary,
            content: self.content,
            cover_image: self.cover_image,
            category_id: self.category_id,
            tag_ids: self.tag_ids,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let category_id = self.resolve_category(command.category_id).await?;
        let tag_ids = self.resolve_tags(&command.tag_ids).await?;
        let now = self.clock.now();

        let base = self.slug_service.base_slug(title.as_str());
        let content = ArticleContent {
            title,
            summary: command.summary,
            content: command.content,
            cover_image: command.cover_image,
            category_id,
        };
        let slug = ArticleSlug::new(base.as_str())?;
        let draft = NewArticle::draft(content, slug, actor.id, tag_ids, now);

        let created = self.slug_service.insert_unique(&base, draft).await?;
        tracing::info!(
            article_id = %created.id,
            slug = %created.slug,
            author_id = actor.id.0,
            "article created"
        );
        self.assembler.detail(created).await
    }
}
