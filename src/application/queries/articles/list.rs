use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleListItemDto, AuthenticatedUser, Page},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleListCriteria, ArticleSortKey, ArticleStatus, Visibility},
        taxonomy::{CategoryId, TagId},
    },
};

const DEFAULT_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    /// Drafts and not-yet-due articles too; requires an authenticated actor.
    pub include_unpublished: bool,
    /// Only honoured together with `include_unpublished`.
    pub status: Option<String>,
    pub category_id: Option<i64>,
    pub tag_id: Option<i64>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub descending: bool,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Page below 1 becomes 1. Page size: absent or zero is 10, otherwise
/// clamped to `1..=100`.
pub fn normalize_page(page: Option<i64>, page_size: Option<i64>) -> (u32, u32) {
    let page = page.unwrap_or(1).clamp(1, i64::from(u32::MAX));
    let page_size = match page_size {
        None | Some(0) => i64::from(DEFAULT_PAGE_SIZE),
        Some(size) => size.clamp(1, i64::from(MAX_PAGE_SIZE)),
    };
    (
        u32::try_from(page).unwrap_or(1),
        u32::try_from(page_size).unwrap_or(DEFAULT_PAGE_SIZE),
    )
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleListItemDto>> {
        let visibility = if query.include_unpublished {
            if actor.is_none() {
                return Err(ApplicationError::forbidden(
                    "authentication required to list unpublished articles",
                ));
            }
            let status = match query.status.as_deref().map(str::trim) {
                Some(raw) if !raw.is_empty() => Some(raw.parse::<ArticleStatus>()?),
                _ => None,
            };
            Visibility::All { status }
        } else {
            Visibility::Public {
                now: self.clock.now(),
            }
        };

        let (page, page_size) = normalize_page(query.page, query.page_size);
        let criteria = ArticleListCriteria {
            visibility,
            category_id: query.category_id.and_then(|id| CategoryId::new(id).ok()),
            tag_id: query.tag_id.and_then(|id| TagId::new(id).ok()),
            search: query.search,
            sort: ArticleSortKey::parse(query.sort_by.as_deref()),
            descending: query.descending,
            page,
            page_size,
        };

        let (records, total) = self.read_repo.list_page(&criteria).await?;
        let items = self.assembler.list_items(records).await?;
        Ok(Page::new(items, total, page, page_size))
    }
}
