use std::sync::Arc;

use crate::{
    application::{
        dto::{CategoryDto, TagDto},
        error::ApplicationResult,
        ports::time::Clock,
    },
    domain::taxonomy::{CategoryRepository, TagRepository},
};

pub struct TaxonomyQueryService {
    category_repo: Arc<dyn CategoryRepository>,
    tag_repo: Arc<dyn TagRepository>,
    clock: Arc<dyn Clock>,
}

impl TaxonomyQueryService {
    pub(crate) fn new(
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            category_repo,
            tag_repo,
            clock,
        }
    }

    /// Ordered by sort order; `articleCount` counts published, due articles.
    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let rows = self
            .category_repo
            .list_with_published_counts(self.clock.now())
            .await?;
        Ok(rows
            .into_iter()
            .map(|(category, count)| CategoryDto::from(category).with_article_count(count))
            .collect())
    }

    pub async fn list_tags(&self) -> ApplicationResult<Vec<TagDto>> {
        let tags = self.tag_repo.list_all().await?;
        Ok(tags.into_iter().map(Into::into).collect())
    }
}
