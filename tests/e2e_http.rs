// tests/e2e_http.rs
use axum::http::StatusCode;
use serde_json::{Value, json};

mod support;

use support::{SqliteApp, assert_error, send};

async fn create(app: &SqliteApp, token: &str, body: Value) -> Value {
    let (status, json) =
        send(&app.router, "POST", "/api/admin/articles", Some(token), Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    json
}

async fn publish(
    app: &SqliteApp,
    token: &str,
    id: i64,
    body: Option<Value>,
) -> (StatusCode, Value) {
    send(
        &app.router,
        "POST",
        &format!("/api/admin/articles/{id}/publish"),
        Some(token),
        body,
    )
    .await
}

#[tokio::test]
async fn health_reports_ok() {
    let app = support::sqlite_app().await;
    let (status, body) = send(&app.router, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn admin_routes_require_a_valid_token() {
    let app = support::sqlite_app().await;

    let (status, body) = send(&app.router, "GET", "/api/admin/articles", None, None).await;
    assert_error(status, &body, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        &app.router,
        "POST",
        "/api/admin/articles",
        Some("not-a-biscuit"),
        Some(json!({ "title": "x" })),
    )
    .await;
    assert_error(status, &body, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn article_lifecycle_over_http() {
    let app = support::sqlite_app().await;
    let token = app.author_token.clone();

    let created = create(
        &app,
        &token,
        json!({ "title": "Hello, Blog!", "summary": "first post", "content": "body" }),
    )
    .await;
    assert_eq!(created["slug"], "hello-blog");
    assert_eq!(created["status"], "draft");
    assert_eq!(created["version"], 1);
    assert_eq!(created["author"]["displayName"], "Alice");
    assert!(created["publishedAt"].is_null());
    let id = created["id"].as_i64().unwrap();

    let (status, body) =
        send(&app.router, "GET", "/api/articles/by-slug/hello-blog", None, None).await;
    assert_error(status, &body, StatusCode::NOT_FOUND);

    let (status, published) = publish(&app, &token, id, None).await;
    assert_eq!(status, StatusCode::OK, "{published}");
    assert_eq!(published["status"], "published");
    let stamp = published["publishedAt"].as_str().unwrap();
    assert!(stamp.ends_with('Z'), "{stamp}");

    let (status, detail) =
        send(&app.router, "GET", "/api/articles/by-slug/hello-blog", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["content"], "body");

    let (status, updated) = send(
        &app.router,
        "PUT",
        &format!("/api/admin/articles/{id}"),
        Some(&token),
        Some(json!({ "title": "A new title", "content": "edited" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_eq!(updated["slug"], "hello-blog");
    assert_eq!(updated["version"], 2);

    let (status, draft) = send(
        &app.router,
        "POST",
        &format!("/api/admin/articles/{id}/unpublish"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(draft["status"], "draft");

    let (status, body) = send(
        &app.router,
        "DELETE",
        &format!("/api/admin/articles/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "deleted");

    let (status, body) = send(
        &app.router,
        "GET",
        &format!("/api/admin/articles/{id}"),
        Some(&token),
        None,
    )
    .await;
    assert_error(status, &body, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn other_authors_are_forbidden() {
    let app = support::sqlite_app().await;
    let created = create(&app, &app.author_token, json!({ "title": "Mine" })).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(
        &app.router,
        "PUT",
        &format!("/api/admin/articles/{id}"),
        Some(&app.other_author_token),
        Some(json!({ "title": "Hijacked" })),
    )
    .await;
    assert_error(status, &body, StatusCode::FORBIDDEN);

    let (status, body) = publish(&app, &app.other_author_token, id, None).await;
    assert_error(status, &body, StatusCode::FORBIDDEN);

    let (status, _) = publish(&app, &app.author_token, id, None).await;
    assert_eq!(status, StatusCode::OK);

    for (method, uri) in [
        ("POST", format!("/api/admin/articles/{id}/unpublish")),
        ("DELETE", format!("/api/admin/articles/{id}")),
    ] {
        let (status, body) =
            send(&app.router, method, &uri, Some(&app.other_author_token), None).await;
        assert_error(status, &body, StatusCode::FORBIDDEN);
    }

    let uri = format!("/api/articles/{id}");
    let (status, still_live) = send(&app.router, "GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(still_live["title"], "Mine");

    let (status, unpublished) = send(
        &app.router,
        "POST",
        &format!("/api/admin/articles/{id}/unpublish"),
        Some(&app.admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{unpublished}");
    assert_eq!(unpublished["status"], "draft");

    let (status, deleted) = send(
        &app.router,
        "DELETE",
        &format!("/api/admin/articles/{id}"),
        Some(&app.admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["status"], "deleted");
}

#[tokio::test]
async fn scheduled_publish_stays_hidden_until_due() {
    let app = support::sqlite_app().await;
    let created = create(&app, &app.author_token, json!({ "title": "Tomorrow" })).await;
    let id = created["id"].as_i64().unwrap();
    let at = (chrono::Utc::now() + chrono::Duration::days(1)).to_rfc3339();

    let body = json!({ "scheduledAt": at });
    let (status, scheduled) = publish(&app, &app.author_token, id, Some(body)).await;
    assert_eq!(status, StatusCode::OK, "{scheduled}");
    assert_eq!(scheduled["status"], "scheduled");

    let (status, body) = send(&app.router, "GET", &format!("/api/articles/{id}"), None, None).await;
    assert_error(status, &body, StatusCode::NOT_FOUND);

    let (status, page) = send(&app.router, "GET", "/api/articles", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalCount"], 0);

    let (status, page) = send(
        &app.router,
        "GET",
        "/api/admin/articles?status=scheduled",
        Some(&app.admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalCount"], 1);
}

#[tokio::test]
async fn malformed_publish_body_is_a_bad_request() {
    let app = support::sqlite_app().await;
    let created = create(&app, &app.author_token, json!({ "title": "Broken" })).await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = publish(
        &app,
        &app.author_token,
        id,
        Some(json!({ "scheduledAt": "next tuesday" })),
    )
    .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn blank_title_is_a_bad_request() {
    let app = support::sqlite_app().await;
    let (status, body) = send(
        &app.router,
        "POST",
        "/api/admin/articles",
        Some(&app.author_token),
        Some(json!({ "title": "  " })),
    )
    .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_status_filter_is_a_bad_request() {
    let app = support::sqlite_app().await;
    let (status, body) = send(
        &app.router,
        "GET",
        "/api/admin/articles?status=archived",
        Some(&app.admin_token),
        None,
    )
    .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn public_listing_pages_and_counts_views() {
    let app = support::sqlite_app().await;
    let mut ids = Vec::new();
    for i in 0..3 {
        let body = json!({ "title": format!("Post {i}") });
        let created = create(&app, &app.author_token, body).await;
        let id = created["id"].as_i64().unwrap();
        publish(&app, &app.author_token, id, None).await;
        ids.push(id);
    }

    let (status, page) =
        send(&app.router, "GET", "/api/articles?page=2&pageSize=2", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalCount"], 3);
    assert_eq!(page["totalPages"], 2);
    assert_eq!(page["page"], 2);
    assert_eq!(page["hasPreviousPage"], true);
    assert_eq!(page["hasNextPage"], false);
    assert_eq!(page["items"].as_array().unwrap().len(), 1);
    assert!(page["items"][0].get("content").is_none());

    let target = ids[1];
    for _ in 0..2 {
        let uri = format!("/api/articles/{target}");
        let (status, _) = send(&app.router, "GET", &uri, None, None).await;
        assert_eq!(status, StatusCode::OK);
    }

    let mut views = 0;
    for _ in 0..200 {
        views = sqlx::query_scalar::<_, i64>("SELECT view_count FROM articles WHERE id = ?")
            .bind(target)
            .fetch_one(&app.pool)
            .await
            .unwrap();
        if views == 2 {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }
    assert_eq!(views, 2);

    let (_, page) = send(
        &app.router,
        "GET",
        "/api/articles?sortBy=viewcount&descending=true",
        None,
        None,
    )
    .await;
    assert_eq!(page["items"][0]["id"], target);
    assert_eq!(page["items"][0]["viewCount"], 2);
}

#[tokio::test]
async fn imports_are_idempotent_over_http() {
    let app = support::sqlite_app().await;
    let token = app.admin_token.clone();

    let categories = json!({
        "categories": [{ "name": "News" }, { "name": "Guides", "sortOrder": 5 }]
    });
    let uri = "/api/admin/import/categories";
    let (status, first) =
        send(&app.router, "POST", uri, Some(&token), Some(categories.clone())).await;
    assert_eq!(status, StatusCode::OK, "{first}");
    assert_eq!(first["created"], 2);
    let (_, second) = send(&app.router, "POST", uri, Some(&token), Some(categories)).await;
    assert_eq!(second["created"], 0);
    assert_eq!(second["skipped"], 2);

    let (status, tags) = send(
        &app.router,
        "POST",
        "/api/admin/import/tags",
        Some(&token),
        Some(json!({ "tags": [{ "name": "Rust" }] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tags["items"][0]["slug"], "rust");

    let articles = json!({
        "articles": [{
            "title": "Imported",
            "summary": "old",
            "categorySlug": "news",
            "tagSlugs": ["rust"],
            "publish": true
        }]
    });
    let uri = "/api/admin/import/articles";
    let (status, report) = send(&app.router, "POST", uri, Some(&token), Some(articles)).await;
    assert_eq!(status, StatusCode::OK, "{report}");
    assert_eq!(report["created"], 1);

    let (status, updated) = send(
        &app.router,
        "POST",
        "/api/admin/import/articles",
        Some(&token),
        Some(json!({ "articles": [{ "title": "Imported", "summary": "new" }], "update": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["skipped"], 1);
    assert_eq!(updated["items"][0]["updated"], true);

    let (status, detail) =
        send(&app.router, "GET", "/api/articles/by-slug/imported", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["summary"], "new");
    assert_eq!(detail["category"]["slug"], "news");
    assert_eq!(detail["tags"][0]["slug"], "rust");

    let (status, listed) = send(&app.router, "GET", "/api/articles/categories", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let news = listed
        .as_array()
        .unwrap()
        .iter()
        .find(|c| c["slug"] == "news")
        .unwrap();
    assert_eq!(news["articleCount"], 1);
}

#[tokio::test]
async fn empty_import_batch_is_rejected() {
    let app = support::sqlite_app().await;
    let (status, body) = send(
        &app.router,
        "POST",
        "/api/admin/import/tags",
        Some(&app.admin_token),
        Some(json!({ "tags": [] })),
    )
    .await;
    assert_error(status, &body, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let app = support::sqlite_app().await;
    let (status, doc) = send(&app.router, "GET", "/openapi.json", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/api/admin/import/articles").is_some());
}
