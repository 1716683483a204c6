// src/application/assembler.rs
use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        dto::{ArticleDto, ArticleListItemDto, CategoryDto, TagDto, UserSummaryDto},
    },
    domain::{
        article::Article,
        taxonomy::{Category, CategoryId, CategoryRepository, Tag, TagId, TagRepository},
        user::{User, UserId, UserRepository},
    },
};

/// Builds article DTOs, resolving category, tags and author with one batch
/// lookup per repository.
pub(crate) struct ArticleAssembler {
    categories: Arc<dyn CategoryRepository>,
    tags: Arc<dyn TagRepository>,
    users: Arc<dyn UserRepository>,
}

struct References {
    categories: HashMap<CategoryId, Category>,
    tags: HashMap<TagId, Tag>,
    users: HashMap<UserId, User>,
}

impl References {
    fn category(&self, id: Option<CategoryId>) -> Option<CategoryDto> {
        id.and_then(|id| self.categories.get(&id))
            .cloned()
            .map(Into::into)
    }

    fn tags(&self, ids: &[TagId]) -> Vec<TagDto> {
        ids.iter()
            .filter_map(|id| self.tags.get(id))
            .cloned()
            .map(Into::into)
            .collect()
    }

    fn author(&self, id: UserId) -> Option<UserSummaryDto> {
        self.users.get(&id).cloned().map(Into::into)
    }
}

fn unique<T: Ord + Copy>(ids: impl Iterator<Item = T>) -> Vec<T> {
    let mut ids: Vec<T> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

impl ArticleAssembler {
    pub(crate) fn new(
        categories: Arc<dyn CategoryRepository>,
        tags: Arc<dyn TagRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            categories,
            tags,
            users,
        }
    }

    async fn load(&self, articles: &[Article]) -> ApplicationResult<References> {
        let category_ids = unique(articles.iter().filter_map(|a| a.category_id));
        let tag_ids = unique(articles.iter().flat_map(|a| a.tag_ids.iter().copied()));
        let user_ids = unique(articles.iter().map(|a| a.author_id));

        let categories = if category_ids.is_empty() {
            Vec::new()
        } else {
            self.categories.find_by_ids(&category_ids).await?
        };
        let tags = if tag_ids.is_empty() {
            Vec::new()
        } else {
            self.tags.find_by_ids(&tag_ids).await?
        };
        let users = self.users.find_by_ids(&user_ids).await?;

        Ok(References {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
            tags: tags.into_iter().map(|t| (t.id, t)).collect(),
            users: users.into_iter().map(|u| (u.id, u)).collect(),
        })
    }

    pub(crate) async fn detail(&self, article: Article) -> ApplicationResult<ArticleDto> {
        let refs = self.load(std::slice::from_ref(&article)).await?;
        Ok(ArticleDto {
            id: article.id.into(),
            category: refs.category(article.category_id),
            author: refs.author(article.author_id),
            tags: refs.tags(&article.tag_ids),
            title: article.title.into_inner(),
            slug: article.slug.into_inner(),
            summary: article.summary,
            content: article.content,
            cover_image: article.cover_image,
            category_id: article.category_id.map(Into::into),
            author_id: article.author_id.into(),
            status: article.status,
            published_at: article.published_at,
            view_count: article.view_count,
            version: article.version,
            created_at: article.created_at,
            updated_at: article.updated_at,
        })
    }

    pub(crate) async fn list_items(
        &self,
        articles: Vec<Article>,
    ) -> ApplicationResult<Vec<ArticleListItemDto>> {
        if articles.is_empty() {
            return Ok(Vec::new());
        }
        let refs = self.load(&articles).await?;
        Ok(articles
            .into_iter()
            .map(|article| ArticleListItemDto {
                id: article.id.into(),
                category: refs.category(article.category_id),
                author: refs.author(article.author_id),
                tags: refs.tags(&article.tag_ids),
                title: article.title.into_inner(),
                slug: article.slug.into_inner(),
                summary: article.summary,
                cover_image: article.cover_image,
                status: article.status,
                published_at: article.published_at,
                view_count: article.view_count,
                created_at: article.created_at,
            })
            .collect())
    }
}
