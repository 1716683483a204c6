// src/infrastructure/repositories/sqlite_article.rs
use std::collections::HashMap;

use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleListCriteria, ArticleReadRepository, ArticleSlug,
    ArticleStatus, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle, Visibility,
    fold_for_search,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::taxonomy::{CategoryId, TagId};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};

const ARTICLE_COLUMNS: &str = "id, title, slug, summary, content, cover_image, category_id, author_id, status, published_at, view_count, version, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    summary: Option<String>,
    content: Option<String>,
    cover_image: Option<String>,
    category_id: Option<i64>,
    author_id: i64,
    status: String,
    published_at: Option<DateTime<Utc>>,
    view_count: i64,
    version: i64,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl ArticleRow {
    fn into_article(self, tag_ids: Vec<TagId>) -> DomainResult<Article> {
        Ok(Article {
            id: ArticleId::new(self.id)?,
            title: ArticleTitle::new(self.title)?,
            slug: ArticleSlug::new(self.slug)?,
            summary: self.summary,
            content: self.content,
            cover_image: self.cover_image,
            category_id: self.category_id.map(CategoryId::new).transpose()?,
            author_id: UserId::new(self.author_id)?,
            status: self.status.parse::<ArticleStatus>()?,
            published_at: self.published_at,
            view_count: self.view_count,
            version: i32::try_from(self.version)
                .map_err(|_| DomainError::Persistence("article version out of range".into()))?,
            created_at: self.created_at,
            updated_at: self.updated_at,
            tag_ids,
        })
    }
}

fn folded_summary(summary: Option<&str>) -> String {
    summary.map(fold_for_search).unwrap_or_default()
}

/// Tag ids per article, each list ordered by tag id.
async fn load_tag_ids(
    conn: &mut SqliteConnection,
    article_ids: &[i64],
) -> DomainResult<HashMap<i64, Vec<TagId>>> {
    let mut map: HashMap<i64, Vec<TagId>> = HashMap::new();
    if article_ids.is_empty() {
        return Ok(map);
    }

    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new("SELECT article_id, tag_id FROM article_tags WHERE article_id IN (");
    let mut separated = builder.separated(", ");
    for id in article_ids {
        separated.push_bind(*id);
    }
    builder.push(") ORDER BY article_id, tag_id");

    let rows: Vec<(i64, i64)> = builder
        .build_query_as()
        .fetch_all(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    for (article_id, tag_id) in rows {
        map.entry(article_id).or_default().push(TagId::new(tag_id)?);
    }
    Ok(map)
}

async fn hydrate(conn: &mut SqliteConnection, rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
    let mut tags = load_tag_ids(conn, &ids).await?;
    rows.into_iter()
        .map(|row| {
            let tag_ids = tags.remove(&row.id).unwrap_or_default();
            row.into_article(tag_ids)
        })
        .collect()
}

async fn fetch_by_id(conn: &mut SqliteConnection, id: i64) -> DomainResult<Option<Article>> {
    let row = sqlx::query_as::<_, ArticleRow>(&format!(
        "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(&mut *conn)
    .await
    .map_err(map_sqlx)?;

    match row {
        Some(row) => Ok(hydrate(conn, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

/// Clear-then-add; the caller owns the transaction.
async fn replace_tags(
    conn: &mut SqliteConnection,
    article_id: i64,
    tag_ids: &[TagId],
) -> DomainResult<()> {
    sqlx::query("DELETE FROM article_tags WHERE article_id = ?")
        .bind(article_id)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

    if tag_ids.is_empty() {
        return Ok(());
    }

    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new("INSERT OR IGNORE INTO article_tags (article_id, tag_id) ");
    builder.push_values(tag_ids, |mut row, tag_id| {
        row.push_bind(article_id).push_bind(i64::from(*tag_id));
    });
    builder
        .build()
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;
    Ok(())
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            summary,
            content,
            cover_image,
            category_id,
            author_id,
            status,
            published_at,
            created_at,
            tag_ids,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO articles (title, slug, summary, content, cover_image, category_id, author_id, status, published_at, created_at, title_folded, summary_folded)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(summary.as_deref())
        .bind(content)
        .bind(cover_image)
        .bind(category_id.map(i64::from))
        .bind(i64::from(author_id))
        .bind(status.as_str())
        .bind(published_at)
        .bind(created_at)
        .bind(fold_for_search(title.as_str()))
        .bind(folded_summary(summary.as_deref()))
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        replace_tags(&mut tx, id, &tag_ids).await?;
        let created = fetch_by_id(&mut tx, id)
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted article vanished".into()))?;
        tx.commit().await.map_err(map_sqlx)?;

        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            content,
            summary,
            body,
            tag_ids,
            publish_state,
            bump_version,
            updated_at,
        } = update;
        let id = i64::from(id);

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(ArticleContent {
            title,
            summary,
            content,
            cover_image,
            category_id,
        }) = content
        {
            builder.push(", title_folded = ");
            builder.push_bind(fold_for_search(title.as_str()));
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
            builder.push(", summary_folded = ");
            builder.push_bind(folded_summary(summary.as_deref()));
            builder.push(", summary = ");
            builder.push_bind(summary);
            builder.push(", content = ");
            builder.push_bind(content);
            builder.push(", cover_image = ");
            builder.push_bind(cover_image);
            builder.push(", category_id = ");
            builder.push_bind(category_id.map(i64::from));
        }

        if let Some(summary) = summary {
            builder.push(", summary_folded = ");
            builder.push_bind(fold_for_search(&summary));
            builder.push(", summary = ");
            builder.push_bind(summary);
        }

        if let Some(body) = body {
            builder.push(", content = ");
            builder.push_bind(body);
        }

        if let Some(state) = publish_state {
            builder.push(", status = ");
            builder.push_bind(state.status.as_str());
            builder.push(", published_at = ");
            builder.push_bind(state.published_at);
        }

        if bump_version {
            builder.push(", version = version + 1");
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id);

        let result = builder
            .build()
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }

        if let Some(tag_ids) = tag_ids {
            replace_tags(&mut tx, id, &tag_ids).await?;
        }

        let updated = fetch_by_id(&mut tx, id)
            .await?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        tx.commit().await.map_err(map_sqlx)?;

        Ok(updated)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM article_tags WHERE article_id = ?")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }

    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("UPDATE articles SET view_count = view_count + 1 WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

/// Escapes LIKE wildcards so the needle matches literally.
fn like_pattern(needle: &str) -> String {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

impl SqliteArticleReadRepository {
    fn apply_conditions<'a>(
        builder: &mut QueryBuilder<'a, Sqlite>,
        criteria: &'a ArticleListCriteria,
        pattern: Option<&'a str>,
    ) {
        builder.push(" WHERE 1 = 1");

        match criteria.visibility {
            Visibility::Public { now } => {
                builder.push(
                    " AND status IN ('published', 'scheduled') AND published_at IS NOT NULL AND published_at <= ",
                );
                builder.push_bind(now);
            }
            Visibility::All { status: Some(status) } => {
                builder.push(" AND status = ");
                builder.push_bind(status.as_str());
            }
            Visibility::All { status: None } => {}
        }

        if let Some(category_id) = criteria.category_id {
            builder.push(" AND category_id = ");
            builder.push_bind(i64::from(category_id));
        }

        if let Some(tag_id) = criteria.tag_id {
            builder.push(
                " AND EXISTS (SELECT 1 FROM article_tags t WHERE t.article_id = articles.id AND t.tag_id = ",
            );
            builder.push_bind(i64::from(tag_id));
            builder.push(")");
        }

        if let Some(pattern) = pattern {
            builder.push(" AND (title_folded LIKE ");
            builder.push_bind(pattern);
            builder.push(" ESCAPE '\\' OR summary_folded LIKE ");
            builder.push_bind(pattern);
            builder.push(" ESCAPE '\\')");
        }
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        fetch_by_id(&mut conn, i64::from(id)).await
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(hydrate(&mut conn, vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        let found: i64 = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM articles WHERE slug = ?)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(found != 0)
    }

    async fn list_page(&self, criteria: &ArticleListCriteria) -> DomainResult<(Vec<Article>, u64)> {
        let pattern = criteria.search_needle().map(|needle| like_pattern(&needle));
        let direction = if criteria.descending { "DESC" } else { "ASC" };

        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;

        let mut list_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        Self::apply_conditions(&mut list_builder, criteria, pattern.as_deref());
        list_builder.push(format!(
            " ORDER BY {column} {direction}, id {direction} LIMIT ",
            column = criteria.sort.column()
        ));
        list_builder.push_bind(i64::from(criteria.page_size));
        list_builder.push(" OFFSET ");
        list_builder.push_bind(i64::try_from(criteria.offset()).unwrap_or(i64::MAX));

        let rows = list_builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        let mut count_builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) FROM articles");
        Self::apply_conditions(&mut count_builder, criteria, pattern.as_deref());

        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&mut *conn)
            .await
            .map_err(map_sqlx)?;

        let articles = hydrate(&mut conn, rows).await?;
        Ok((articles, u64::try_from(total).unwrap_or_default()))
    }
}
