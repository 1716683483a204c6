// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, ArticleStatus, ArticleTitle};
use crate::domain::taxonomy::{CategoryId, TagId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub category_id: Option<CategoryId>,
    pub author_id: UserId,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub version: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub tag_ids: Vec<TagId>,
}

/// Editable fields of an article. The slug is deliberately absent.
#[derive(Debug, Clone)]
pub struct ArticleContent {
    pub title: ArticleTitle,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub category_id: Option<CategoryId>,
}

impl Article {
    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.status = ArticleStatus::Published;
        self.published_at = Some(now);
        self.updated_at = Some(now);
    }

    /// `at` may lie in the past; visibility is decided when reading.
    pub fn schedule(&mut self, at: DateTime<Utc>, now: DateTime<Utc>) {
        self.status = ArticleStatus::Scheduled;
        self.published_at = Some(at);
        self.updated_at = Some(now);
    }

    pub fn unpublish(&mut self, now: DateTime<Utc>) {
        self.status = ArticleStatus::Draft;
        self.published_at = None;
        self.updated_at = Some(now);
    }

    pub fn apply_content(
        &mut self,
        content: ArticleContent,
        tag_ids: Vec<TagId>,
        now: DateTime<Utc>,
    ) {
        let ArticleContent {
            title,
            summary,
            content,
            cover_image,
            category_id,
        } = content;
        self.title = title;
        self.summary = summary;
        self.content = content;
        self.cover_image = cover_image;
        self.category_id = category_id;
        self.tag_ids = tag_ids;
        self.version += 1;
        self.updated_at = Some(now);
    }

    pub fn content(&self) -> ArticleContent {
        ArticleContent {
            title: self.title.clone(),
            summary: self.summary.clone(),
            content: self.content.clone(),
            cover_image: self.cover_image.clone(),
            category_id: self.category_id,
        }
    }

    /// Whether anonymous readers may see the article at `now`.
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.status.is_live() && self.published_at.is_some_and(|at| at <= now)
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub category_id: Option<CategoryId>,
    pub author_id: UserId,
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub tag_ids: Vec<TagId>,
}

impl NewArticle {
    pub fn draft(
        content: ArticleContent,
        slug: ArticleSlug,
        author_id: UserId,
        tag_ids: Vec<TagId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let ArticleContent {
            title,
            summary,
            content,
            cover_image,
            category_id,
        } = content;
        Self {
            title,
            slug,
            summary,
            content,
            cover_image,
            category_id,
            author_id,
            status: ArticleStatus::Draft,
            published_at: None,
            created_at,
            tag_ids,
        }
    }

    pub fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.status = ArticleStatus::Published;
        self.published_at = Some(at);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = slug;
        self
    }
}

#[derive(Debug, Clone)]
pub struct PublishStateUpdate {
    pub status: ArticleStatus,
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial write applied by the repository in one transaction.
///
/// `content` replaces every editable column; `summary` and `body` are the
/// narrow overwrites used by imports and are applied after it. `tag_ids`
/// replaces the whole association set.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub content: Option<ArticleContent>,
    pub summary: Option<String>,
    pub body: Option<String>,
    pub tag_ids: Option<Vec<TagId>>,
    pub publish_state: Option<PublishStateUpdate>,
    pub bump_version: bool,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content: None,
            summary: None,
            body: None,
            tag_ids: None,
            publish_state: None,
            bump_version: false,
            updated_at,
        }
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self.bump_version = true;
        self
    }

    pub fn with_tags(mut self, tag_ids: Vec<TagId>) -> Self {
        self.tag_ids = Some(tag_ids);
        self
    }

    pub fn with_summary(mut self, summary: String) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_publish_state(
        mut self,
        status: ArticleStatus,
        published_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.publish_state = Some(PublishStateUpdate {
            status,
            published_at,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.summary.is_none()
            && self.body.is_none()
            && self.tag_ids.is_none()
            && self.publish_state.is_none()
    }
}
