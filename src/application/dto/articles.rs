use crate::domain::article::ArticleStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{CategoryDto, TagDto, UserSummaryDto, serde_time};

/// Full article detail with category, author and tags resolved.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category: Option<CategoryDto>,
    pub author_id: i64,
    #[serde(default)]
    pub author: Option<UserSummaryDto>,
    pub status: ArticleStatus,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub version: i32,
    #[serde(default)]
    pub tags: Vec<TagDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Listing row; omits the article body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListItemDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryDto>,
    #[serde(default)]
    pub author: Option<UserSummaryDto>,
    pub status: ArticleStatus,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    #[serde(default)]
    pub tags: Vec<TagDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}
