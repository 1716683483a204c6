// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{admin_articles, articles, imports},
    error::{ErrorResponse, HttpError, HttpResult},
    openapi::{self, StatusResponse},
};
use crate::application::error::ApplicationError;
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(cors_origins(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/articles", get(articles::list_articles))
        .route("/api/articles/categories", get(articles::list_categories))
        .route("/api/articles/tags", get(articles::list_tags))
        .route(
            "/api/articles/by-slug/{slug}",
            get(articles::get_article_by_slug),
        )
        .route("/api/articles/{id}", get(articles::get_article))
        .route(
            "/api/admin/articles",
            get(admin_articles::list_articles).post(admin_articles::create_article),
        )
        .route(
            "/api/admin/articles/{id}",
            get(admin_articles::get_article)
                .put(admin_articles::update_article)
                .delete(admin_articles::delete_article),
        )
        .route(
            "/api/admin/articles/{id}/publish",
            post(admin_articles::publish_article),
        )
        .route(
            "/api/admin/articles/{id}/unpublish",
            post(admin_articles::unpublish_article),
        )
        .route(
            "/api/admin/import/categories",
            post(imports::import_categories),
        )
        .route("/api/admin/import/tags", post(imports::import_tags))
        .route("/api/admin/import/articles", post(imports::import_articles))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

/// `*` anywhere in the list opens CORS to every origin; entries that are not
/// valid header values are skipped.
fn cors_origins(allowed_origins: &[String]) -> AllowOrigin {
    if allowed_origins.iter().any(|origin| origin == "*") {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    AllowOrigin::list(origins)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database are reachable.", body = StatusResponse),
        (status = 500, description = "Database unreachable.", body = ErrorResponse)
    ),
    tag = "System"
)]
pub async fn health(Extension(state): Extension<HttpState>) -> HttpResult<Json<StatusResponse>> {
    sqlx::query("SELECT 1")
        .execute(&state.db_pool)
        .await
        .map_err(|err| {
            HttpError::from_error(ApplicationError::infrastructure(format!(
                "health check failed: {err}"
            )))
        })?;

    Ok(Json(StatusResponse {
        status: "ok".into(),
    }))
}
