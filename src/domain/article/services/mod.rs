// src/domain/article/services/mod.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::repository::{ArticleReadRepository, ArticleWriteRepository};
use crate::domain::article::value_objects::ArticleSlug;
use crate::domain::errors::{DomainError, DomainResult};

/// How many times an insert is retried after losing a slug race.
pub const MAX_SLUG_ATTEMPTS: u32 = 3;

/// Domain service responsible for producing unique slugs for articles.
///
/// The probe loop only narrows the window for duplicates; the unique index on
/// `articles.slug` decides. `insert_unique` re-probes when the insert loses.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    write_repo: Arc<dyn ArticleWriteRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        write_repo: Arc<dyn ArticleWriteRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            generator,
        }
    }

    pub fn base_slug(&self, title: &str) -> String {
        self.generator.slugify(title)
    }

    /// First free candidate among `base`, `base-1`, `base-2`, ...
    pub async fn unique_slug(&self, base: &str) -> DomainResult<ArticleSlug> {
        let mut candidate = ArticleSlug::new(base)?;
        let mut counter = 1u32;

        while self.read_repo.slug_exists(&candidate).await? {
            candidate = ArticleSlug::with_suffix(base, counter)?;
            counter += 1;
        }

        Ok(candidate)
    }

    /// Inserts `article` under the first free slug derived from `base`.
    pub async fn insert_unique(&self, base: &str, article: NewArticle) -> DomainResult<Article> {
        let mut attempt = 1;
        loop {
            let slug = self.unique_slug(base).await?;
            match self.write_repo.insert(article.clone().with_slug(slug.clone())).await {
                Err(DomainError::Conflict(msg)) if attempt < MAX_SLUG_ATTEMPTS => {
                    tracing::warn!(
                        slug = %slug,
                        attempt,
                        error = %msg,
                        "slug taken concurrently, retrying"
                    );
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}
