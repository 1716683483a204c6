use crate::domain::taxonomy::{Category, Tag};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    pub sort_order: i32,
    /// Published articles in the category; only set on category listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_count: Option<u64>,
}

impl CategoryDto {
    pub fn with_article_count(mut self, count: u64) -> Self {
        self.article_count = Some(count);
        self
    }
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id.into(),
            name: category.name,
            slug: category.slug,
            parent_id: category.parent_id.map(Into::into),
            sort_order: category.sort_order,
            article_count: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<Tag> for TagDto {
    fn from(tag: Tag) -> Self {
        Self {
            id: tag.id.into(),
            name: tag.name,
            slug: tag.slug,
        }
    }
}
