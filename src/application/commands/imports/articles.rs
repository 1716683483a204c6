// src/application/commands/imports/articles.rs
use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::ImportCommandService;
use crate::{
    application::{
        dto::{ArticleImportResult, AuthenticatedUser, ImportArticleItem, ImportReport},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleContent, ArticleId, ArticleSlug, ArticleTitle, ArticleUpdate, NewArticle},
        taxonomy::{CategoryId, TagId},
    },
};

pub struct ImportArticlesCommand {
    pub items: Vec<ImportArticleItem>,
    /// Overwrite summary and content of articles whose slug already exists.
    pub update: bool,
}

/// Category and tag slugs resolved once per batch.
struct SlugLookup {
    categories: HashMap<String, CategoryId>,
    tags: HashMap<String, TagId>,
}

impl SlugLookup {
    fn category(&self, slug: Option<&str>) -> Option<CategoryId> {
        slug.and_then(|slug| self.categories.get(slug.trim())).copied()
    }

    fn tags(&self, slugs: &[String]) -> Vec<TagId> {
        let mut ids: Vec<TagId> = slugs
            .iter()
            .filter_map(|slug| self.tags.get(slug.trim()))
            .copied()
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}

enum Outcome {
    Created(ArticleId, ArticleSlug),
    Updated(ArticleId),
    Skipped(ArticleId),
}

impl ImportCommandService {
    /// Fails as a whole only when the category/tag lookup cannot be loaded.
    pub async fn import_articles(
        &self,
        actor: &AuthenticatedUser,
        command: ImportArticlesCommand,
    ) -> ApplicationResult<ImportReport<ArticleImportResult>> {
        let lookup = self.load_lookup().await?;
        let mut report = ImportReport::with_capacity(command.items.len());

        for item in command.items {
            let slug = self.slug_for(item.slug.as_deref(), &item.title);
            let mut result = ArticleImportResult {
                title: item.title.clone(),
                slug: slug.clone(),
                id: None,
                created: false,
                updated: false,
                error: None,
            };

            let now = self.clock.now();
            match self
                .import_article(actor, item, slug, command.update, &lookup, now)
                .await
            {
                Ok(Outcome::Created(id, slug)) => {
                    result.id = Some(id.into());
                    result.slug = slug.into_inner();
                    result.created = true;
                    report.record_created(result);
                }
                Ok(Outcome::Updated(id)) => {
                    result.id = Some(id.into());
                    result.updated = true;
                    report.record_skipped(result);
                }
                Ok(Outcome::Skipped(id)) => {
                    result.id = Some(id.into());
                    report.record_skipped(result);
                }
                Err(err) => {
                    tracing::warn!(slug = %result.slug, error = %err, "article import item failed");
                    result.error = Some(err.to_string());
                    report.record_failed(result);
                }
            }
        }

        tracing::info!(
            created = report.created,
            skipped = report.skipped,
            failed = report.failed,
            update = command.update,
            "article import finished"
        );
        Ok(report)
    }

    async fn load_lookup(&self) -> ApplicationResult<SlugLookup> {
        let categories = self.category_repo.list_all().await?;
        let tags = self.tag_repo.list_all().await?;
        Ok(SlugLookup {
            categories: categories.into_iter().map(|c| (c.slug, c.id)).collect(),
            tags: tags.into_iter().map(|t| (t.slug, t.id)).collect(),
        })
    }

    async fn import_article(
        &self,
        actor: &AuthenticatedUser,
        item: ImportArticleItem,
        slug: String,
        update: bool,
        lookup: &SlugLookup,
        now: DateTime<Utc>,
    ) -> ApplicationResult<Outcome> {
        let title = ArticleTitle::new(item.title)?;
        let candidate = ArticleSlug::new(slug.as_str())?;

        if let Some(existing) = self.article_read.find_by_slug(&candidate).await? {
            if !update {
                return Ok(Outcome::Skipped(existing.id));
            }
            let mut patch = ArticleUpdate::new(existing.id, now);
            if let Some(summary) = item.summary {
                patch = patch.with_summary(summary);
            }
            if let Some(content) = item.content {
                patch = patch.with_body(content);
            }
            if patch.is_empty() {
                return Ok(Outcome::Skipped(existing.id));
            }
            let updated = self.article_write.update(patch).await?;
            return Ok(Outcome::Updated(updated.id));
        }

        let content = ArticleContent {
            title,
            summary: item.summary,
            content: item.content,
            cover_image: item.cover_image,
            category_id: lookup.category(item.category_slug.as_deref()),
        };
        let mut draft = NewArticle::draft(
            content,
            candidate,
            actor.id,
            lookup.tags(&item.tag_slugs),
            now,
        );
        if item.publish {
            draft = draft.published_at(item.published_at.unwrap_or(now));
        }

        let created = self.slug_service.insert_unique(&slug, draft).await?;
        Ok(Outcome::Created(created.id, created.slug))
    }
}
