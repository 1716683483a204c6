// src/application/commands/imports/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{time::Clock, util::SlugGenerator},
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        taxonomy::{CategoryRepository, TagRepository},
    },
};

/// Batch ingestion of categories, tags and articles. Every item is attempted;
/// per-item failures are reported in the returned `ImportReport`.
pub struct ImportCommandService {
    pub(super) article_read: Arc<dyn ArticleReadRepository>,
    pub(super) article_write: Arc<dyn ArticleWriteRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ImportCommandService {
    pub(crate) fn new(
        article_read: Arc<dyn ArticleReadRepository>,
        article_write: Arc<dyn ArticleWriteRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        slug_service: Arc<ArticleSlugService>,
        slugger: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            article_read,
            article_write,
            category_repo,
            tag_repo,
            slug_service,
            slugger,
            clock,
        }
    }

    /// The explicit slug when it is non-blank, otherwise one derived from `name`.
    pub(super) fn slug_for(&self, explicit: Option<&str>, name: &str) -> String {
        match explicit.map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => self.slugger.slugify(name),
        }
    }
}
