// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use blogger_core::application::{
    dto::{AuthenticatedUser, TokenSubject},
    ports::{security::TokenManager, time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use blogger_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    taxonomy::{CategoryRepository, TagRepository},
    user::{Role, User, UserRepository},
};
use blogger_core::infrastructure::{
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCategoryRepository,
        SqliteTagRepository, SqliteUserRepository,
    },
    security::token::BiscuitTokenManager,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use blogger_core::presentation::http::{routes::build_router, state::HttpState};
use chrono::Utc;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::util::ServiceExt as _;

use super::clock::TestClock;
use super::memory::MemoryStore;

pub fn actor(user: &User) -> AuthenticatedUser {
    let now = Utc::now();
    AuthenticatedUser {
        id: user.id,
        display_name: user.display_name.clone(),
        role: user.role,
        issued_at: now,
        expires_at: now + chrono::Duration::hours(1),
    }
}

/// Application services over the in-memory store.
pub struct MemoryApp {
    pub services: Arc<ApplicationServices>,
    pub store: MemoryStore,
    pub clock: TestClock,
    pub admin: AuthenticatedUser,
    pub author: AuthenticatedUser,
    pub other_author: AuthenticatedUser,
}

pub fn memory_app() -> MemoryApp {
    let store = MemoryStore::new();
    let clock = TestClock::default();

    let admin = actor(&store.add_user("Admin", Role::Admin));
    let author = actor(&store.add_user("Alice", Role::Author));
    let other_author = actor(&store.add_user("Bob", Role::Author));

    let user_repo: Arc<dyn UserRepository> = Arc::new(store.clone());
    let article_write: Arc<dyn ArticleWriteRepository> = Arc::new(store.clone());
    let article_read: Arc<dyn ArticleReadRepository> = Arc::new(store.clone());
    let category_repo: Arc<dyn CategoryRepository> = Arc::new(store.clone());
    let tag_repo: Arc<dyn TagRepository> = Arc::new(store.clone());
    let token_manager: Arc<dyn TokenManager> =
        Arc::new(BiscuitTokenManager::ephemeral(Duration::from_secs(3600)));
    let clock_port: Arc<dyn Clock> = Arc::new(clock.clone());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        article_write,
        article_read,
        category_repo,
        tag_repo,
        token_manager,
        clock_port,
        slugger,
    ));

    MemoryApp {
        services,
        store,
        clock,
        admin,
        author,
        other_author,
    }
}

/// Waits for detached view increments to land.
pub async fn wait_for_views(store: &MemoryStore, article_id: i64, expected: i64) {
    for _ in 0..200 {
        if store
            .article(article_id)
            .is_some_and(|a| a.view_count >= expected)
        {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("article {article_id} never reached {expected} views");
}

/// Full HTTP stack over a private in-memory SQLite database.
pub struct SqliteApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub services: Arc<ApplicationServices>,
    pub admin_token: String,
    pub author_token: String,
    pub other_author_token: String,
}

pub async fn sqlite_pool() -> SqlitePool {
    let pool = database::init_memory_pool().await.expect("memory pool");
    database::run_migrations(&pool).await.expect("migrations");
    pool
}

pub async fn sqlite_app() -> SqliteApp {
    let pool = sqlite_pool().await;
    let users = SqliteUserRepository::new(pool.clone());
    let admin = users
        .create("admin@example.com", "Admin", Role::Admin, Utc::now())
        .await
        .unwrap();
    let author = users
        .create("alice@example.com", "Alice", Role::Author, Utc::now())
        .await
        .unwrap();
    let other_author = users
        .create("bob@example.com", "Bob", Role::Author, Utc::now())
        .await
        .unwrap();

    let token_manager = Arc::new(BiscuitTokenManager::ephemeral(Duration::from_secs(3600)));
    let mut tokens = Vec::new();
    for user in [&admin, &author, &other_author] {
        let issued = token_manager
            .issue(TokenSubject {
                user_id: user.id,
                display_name: user.display_name.clone(),
                role: user.role,
            })
            .await
            .unwrap();
        tokens.push(issued.token);
    }

    let services = Arc::new(ApplicationServices::new(
        Arc::new(users),
        Arc::new(SqliteArticleWriteRepository::new(pool.clone())),
        Arc::new(SqliteArticleReadRepository::new(pool.clone())),
        Arc::new(SqliteCategoryRepository::new(pool.clone())),
        Arc::new(SqliteTagRepository::new(pool.clone())),
        token_manager,
        Arc::new(SystemClock),
        Arc::new(DefaultSlugGenerator),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
        db_pool: pool.clone(),
    };
    let router = build_router(state, &["http://localhost:3000".to_string()]);

    let mut tokens = tokens.into_iter();
    SqliteApp {
        router,
        pool,
        services,
        admin_token: tokens.next().unwrap(),
        author_token: tokens.next().unwrap(),
        other_author_token: tokens.next().unwrap(),
    }
}

/// Sends one request through the router and decodes the JSON body
/// (`Value::Null` when the body is empty).
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!("non-JSON body: {}", String::from_utf8_lossy(&bytes))
        })
    };
    (status, json)
}

/// Asserts the `{error, message}` body that accompanies every failure.
pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode) {
    assert_eq!(status, expected, "unexpected body: {body}");
    assert_eq!(
        body["error"].as_str(),
        expected.canonical_reason(),
        "unexpected body: {body}"
    );
    assert!(body["message"].is_string(), "missing message: {body}");
}
