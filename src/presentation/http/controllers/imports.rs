// src/presentation/http/controllers/imports.rs
use crate::application::{
    commands::imports::{ImportArticlesCommand, ImportCategoriesCommand, ImportTagsCommand},
    dto::{
        ArticleImportResult, ImportArticleItem, ImportCategoryItem, ImportReport, ImportTagItem,
        TaxonomyImportResult,
    },
    error::ApplicationError,
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::{ArticleImportResponse, TaxonomyImportResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ImportCategoriesRequest {
    pub categories: Vec<ImportCategoryItem>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ImportTagsRequest {
    pub tags: Vec<ImportTagItem>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ImportArticlesRequest {
    pub articles: Vec<ImportArticleItem>,
    /// Overwrite summary and content when the slug already exists.
    #[serde(default)]
    pub update: bool,
}

fn require_items<T>(items: &[T], what: &str) -> HttpResult<()> {
    if items.is_empty() {
        return Err(HttpError::from_error(ApplicationError::validation(format!(
            "at least one {what} is required"
        ))));
    }
    Ok(())
}

#[utoipa::path(
    post,
    path = "/api/admin/import/categories",
    request_body = ImportCategoriesRequest,
    responses(
        (status = 200, description = "Per-item outcome; existing slugs are skipped.", body = TaxonomyImportResponse),
        (status = 400, description = "Empty batch.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Import"
)]
pub async fn import_categories(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ImportCategoriesRequest>,
) -> HttpResult<Json<ImportReport<TaxonomyImportResult>>> {
    require_items(&payload.categories, "category")?;
    tracing::info!(
        actor_id = user.id.0,
        items = payload.categories.len(),
        "category import requested"
    );

    let report = state
        .services
        .imports
        .import_categories(ImportCategoriesCommand {
            items: payload.categories,
        })
        .await;
    Ok(Json(report))
}

#[utoipa::path(
    post,
    path = "/api/admin/import/tags",
    request_body = ImportTagsRequest,
    responses(
        (status = 200, description = "Per-item outcome; existing slugs are skipped.", body = TaxonomyImportResponse),
        (status = 400, description = "Empty batch.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Import"
)]
pub async fn import_tags(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ImportTagsRequest>,
) -> HttpResult<Json<ImportReport<TaxonomyImportResult>>> {
    require_items(&payload.tags, "tag")?;
    tracing::info!(actor_id = user.id.0, items = payload.tags.len(), "tag import requested");

    let report = state
        .services
        .imports
        .import_tags(ImportTagsCommand {
            items: payload.tags,
        })
        .await;
    Ok(Json(report))
}

#[utoipa::path(
    post,
    path = "/api/admin/import/articles",
    request_body = ImportArticlesRequest,
    responses(
        (status = 200, description = "Per-item outcome; the caller becomes the author of created articles.", body = ArticleImportResponse),
        (status = 400, description = "Empty batch.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Import"
)]
pub async fn import_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ImportArticlesRequest>,
) -> HttpResult<Json<ImportReport<ArticleImportResult>>> {
    require_items(&payload.articles, "article")?;

    state
        .services
        .imports
        .import_articles(
            &user,
            ImportArticlesCommand {
                items: payload.articles,
                update: payload.update,
            },
        )
        .await
        .into_http()
        .map(Json)
}
