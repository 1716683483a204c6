// src/domain/article/listing.rs
use crate::domain::article::value_objects::ArticleStatus;
use crate::domain::taxonomy::{CategoryId, TagId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Published or scheduled articles whose publish time is at or before
    /// `now`; a scheduled article surfaces once it falls due.
    Public { now: DateTime<Utc> },
    /// Every article, optionally narrowed to one status.
    All { status: Option<ArticleStatus> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortKey {
    Title,
    PublishedAt,
    ViewCount,
    #[default]
    CreatedAt,
}

impl ArticleSortKey {
    /// Case-insensitive; unknown keys sort by creation time.
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("title") => Self::Title,
            Some("publishedat") => Self::PublishedAt,
            Some("viewcount") => Self::ViewCount,
            _ => Self::CreatedAt,
        }
    }

    pub fn column(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::PublishedAt => "published_at",
            Self::ViewCount => "view_count",
            Self::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleListCriteria {
    pub visibility: Visibility,
    pub category_id: Option<CategoryId>,
    pub tag_id: Option<TagId>,
    pub search: Option<String>,
    pub sort: ArticleSortKey,
    pub descending: bool,
    pub page: u32,
    pub page_size: u32,
}

impl ArticleListCriteria {
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Lower-cased search needle, `None` when blank.
    pub fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(fold_for_search)
    }
}

/// Unicode lower-casing shared by stored search text and search needles.
pub fn fold_for_search(text: &str) -> String {
    text.to_lowercase()
}
