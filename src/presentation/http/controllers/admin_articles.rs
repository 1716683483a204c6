// src/presentation/http/controllers/admin_articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, PublishArticleCommand,
        UnpublishArticleCommand, UpdateArticleCommand,
    },
    dto::{ArticleDto, ArticleListItemDto, Page, serde_time},
    error::ApplicationError,
    queries::articles::GetArticleByIdQuery,
};
use crate::presentation::http::controllers::articles::ArticleListParams;
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::openapi::{ArticlePageResponse, StatusResponse};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    body::Bytes,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRequest {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    /// Ids that do not name an existing tag are ignored.
    #[serde(default)]
    pub tag_ids: Vec<i64>,
}

impl ArticleRequest {
    fn into_create_command(self) -> HttpResult<CreateArticleCommand> {
        let mut builder = CreateArticleCommand::builder()
            .title(self.title)
            .tag_ids(self.tag_ids);
        if let Some(summary) = self.summary {
            builder = builder.summary(summary);
        }
        if let Some(content) = self.content {
            builder = builder.content(content);
        }
        if let Some(cover_image) = self.cover_image {
            builder = builder.cover_image(cover_image);
        }
        if let Some(category_id) = self.category_id {
            builder = builder.category_id(category_id);
        }
        builder
            .build()
            .map_err(|msg| HttpError::from_error(ApplicationError::validation(msg)))
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublishRequest {
    /// Omit to publish immediately.
    #[serde(default, with = "serde_time::option")]
    pub scheduled_at: Option<DateTime<Utc>>,
}

#[utoipa::path(
    get,
    path = "/api/admin/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Articles in any status.", body = ArticlePageResponse),
        (status = 400, description = "Unknown status filter.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<Page<ArticleListItemDto>>> {
    state
        .services
        .article_queries
        .list_articles(Some(&user), params.into_query(true))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/admin/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article in any status.", body = ArticleDto),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/admin/articles",
    request_body = ArticleRequest,
    responses(
        (status = 201, description = "Draft created.", body = ArticleDto),
        (status = 400, description = "Blank title.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<ArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = payload.into_create_command()?;

    let created = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/admin/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article updated; slug unchanged.", body = ArticleDto),
        (status = 403, description = "Neither author nor admin.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<ArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        summary: payload.summary,
        content: payload.content,
        cover_image: payload.cover_image,
        category_id: payload.category_id,
        tag_ids: payload.tag_ids,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/admin/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted.", body = StatusResponse),
        (status = 403, description = "Neither author nor admin.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<StatusResponse>> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(StatusResponse {
        status: "deleted".into(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/admin/articles/{id}/publish",
    params(("id" = i64, Path, description = "Article id")),
    request_body(content = PublishRequest, description = "Optional; an empty body publishes immediately"),
    responses(
        (status = 200, description = "Published or scheduled.", body = ArticleDto),
        (status = 403, description = "Neither author nor admin.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn publish_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    body: Bytes,
) -> HttpResult<Json<ArticleDto>> {
    // An empty body means "publish now".
    let payload = if body.iter().all(u8::is_ascii_whitespace) {
        PublishRequest::default()
    } else {
        serde_json::from_slice::<PublishRequest>(&body).map_err(|err| {
            HttpError::from_error(ApplicationError::validation(format!(
                "invalid publish request: {err}"
            )))
        })?
    };

    state
        .services
        .article_commands
        .publish_article(
            &user,
            PublishArticleCommand {
                id,
                scheduled_at: payload.scheduled_at,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/admin/articles/{id}/unpublish",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Back to draft.", body = ArticleDto),
        (status = 403, description = "Neither author nor admin.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Admin"
)]
pub async fn unpublish_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .unpublish_article(&user, UnpublishArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}
