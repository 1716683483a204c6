use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportCategoryItem {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// Zero or absent means "position in the batch, starting at 1".
    #[serde(default)]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportTagItem {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportArticleItem {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub category_slug: Option<String>,
    #[serde(default)]
    pub tag_slugs: Vec<String>,
    #[serde(default)]
    pub publish: bool,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Outcome of one category or tag in a batch.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyImportResult {
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub created: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of one article in a batch.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleImportResult {
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub created: bool,
    #[serde(default)]
    pub updated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate counts plus one entry per input item, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct ImportReport<T> {
    pub created: u32,
    pub skipped: u32,
    pub failed: u32,
    pub items: Vec<T>,
}

impl<T> Default for ImportReport<T> {
    fn default() -> Self {
        Self {
            created: 0,
            skipped: 0,
            failed: 0,
            items: Vec::new(),
        }
    }
}

impl<T> ImportReport<T> {
    pub fn with_capacity(len: usize) -> Self {
        Self {
            items: Vec::with_capacity(len),
            ..Self::default()
        }
    }

    pub fn record_created(&mut self, item: T) {
        self.created += 1;
        self.items.push(item);
    }

    pub fn record_skipped(&mut self, item: T) {
        self.skipped += 1;
        self.items.push(item);
    }

    pub fn record_failed(&mut self, item: T) {
        self.failed += 1;
        self.items.push(item);
    }
}
