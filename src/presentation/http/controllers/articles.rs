// src/presentation/http/controllers/articles.rs
//! Public, read-only article endpoints.
use crate::application::{
    dto::{ArticleDto, ArticleListItemDto, CategoryDto, Page, TagDto},
    queries::articles::{GetArticleByIdQuery, GetArticleBySlugQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::ArticlePageResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// 1-based page number; values below 1 are treated as 1.
    #[serde(default)]
    pub page: Option<i64>,
    /// Defaults to 10, clamped to 1..=100.
    #[serde(default)]
    pub page_size: Option<i64>,
    /// `title`, `publishedAt`, `viewCount` or `createdAt` (default).
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub descending: bool,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub tag_id: Option<i64>,
    /// Case-insensitive substring of title or summary.
    #[serde(default)]
    pub search: Option<String>,
    /// Management listing only: `draft`, `published` or `scheduled`.
    #[serde(default)]
    pub status: Option<String>,
}

impl ArticleListParams {
    pub fn into_query(self, include_unpublished: bool) -> ListArticlesQuery {
        ListArticlesQuery {
            include_unpublished,
            status: self.status,
            category_id: self.category_id,
            tag_id: self.tag_id,
            search: self.search,
            sort_by: self.sort_by,
            descending: self.descending,
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Published articles.", body = ArticlePageResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Page<ArticleListItemDto>>> {
    state
        .services
        .article_queries
        .list_articles(None, params.into_query(false))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Published article.", body = ArticleDto),
        (status = 404, description = "Missing or not yet published.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_published_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/by-slug/{slug}",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "Published article.", body = ArticleDto),
        (status = 404, description = "Missing or not yet published.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_published_by_slug(GetArticleBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/categories",
    responses(
        (status = 200, description = "Categories with published article counts.", body = [CategoryDto])
    ),
    tag = "Taxonomy"
)]
pub async fn list_categories(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<CategoryDto>>> {
    state
        .services
        .taxonomy_queries
        .list_categories()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/articles/tags",
    responses(
        (status = 200, description = "All tags.", body = [TagDto])
    ),
    tag = "Taxonomy"
)]
pub async fn list_tags(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<TagDto>>> {
    state
        .services
        .taxonomy_queries
        .list_tags()
        .await
        .into_http()
        .map(Json)
}
