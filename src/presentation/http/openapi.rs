// src/presentation/http/openapi.rs
use crate::application::dto::{
    ArticleDto, ArticleImportResult, ArticleListItemDto, CategoryDto, TagDto,
    TaxonomyImportResult, UserSummaryDto,
};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Documentation shape of `Page<ArticleListItemDto>`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePageResponse {
    pub items: Vec<ArticleListItemDto>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

/// Documentation shape of `ImportReport<TaxonomyImportResult>`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaxonomyImportResponse {
    pub created: u32,
    pub skipped: u32,
    pub failed: u32,
    pub items: Vec<TaxonomyImportResult>,
}

/// Documentation shape of `ImportReport<ArticleImportResult>`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleImportResponse {
    pub created: u32,
    pub skipped: u32,
    pub failed: u32,
    pub items: Vec<ArticleImportResult>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::routes::health,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::get_article_by_slug,
        crate::presentation::http::controllers::articles::list_categories,
        crate::presentation::http::controllers::articles::list_tags,
        crate::presentation::http::controllers::admin_articles::list_articles,
        crate::presentation::http::controllers::admin_articles::get_article,
        crate::presentation::http::controllers::admin_articles::create_article,
        crate::presentation::http::controllers::admin_articles::update_article,
        crate::presentation::http::controllers::admin_articles::delete_article,
        crate::presentation::http::controllers::admin_articles::publish_article,
        crate::presentation::http::controllers::admin_articles::unpublish_article,
        crate::presentation::http::controllers::imports::import_categories,
        crate::presentation::http::controllers::imports::import_tags,
        crate::presentation::http::controllers::imports::import_articles
    ),
    components(
        schemas(
            StatusResponse,
            ArticlePageResponse,
            TaxonomyImportResponse,
            ArticleImportResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::admin_articles::ArticleRequest,
            crate::presentation::http::controllers::admin_articles::PublishRequest,
            crate::presentation::http::controllers::imports::ImportCategoriesRequest,
            crate::presentation::http::controllers::imports::ImportTagsRequest,
            crate::presentation::http::controllers::imports::ImportArticlesRequest,
            ArticleDto,
            ArticleListItemDto,
            CategoryDto,
            TagDto,
            UserSummaryDto
        )
    ),
    tags(
        (name = "Articles", description = "Public article reads"),
        (name = "Taxonomy", description = "Categories and tags"),
        (name = "Admin", description = "Article management"),
        (name = "Import", description = "Bulk import"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Blogger API",
        description = "Blogging backend core",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));
    }
}

pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
