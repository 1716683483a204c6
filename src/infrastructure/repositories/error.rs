// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

/// SQLite reports violated constraints in the message, e.g.
/// `UNIQUE constraint failed: articles.slug`.
const UNIQUE_ARTICLE_SLUG: &str = "articles.slug";
const UNIQUE_CATEGORY_SLUG: &str = "categories.slug";
const UNIQUE_TAG_SLUG: &str = "tags.slug";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();

            if db_err.is_unique_violation() {
                let what = if message.contains(UNIQUE_ARTICLE_SLUG) {
                    "article slug already exists"
                } else if message.contains(UNIQUE_CATEGORY_SLUG) {
                    "category slug already exists"
                } else if message.contains(UNIQUE_TAG_SLUG) {
                    "tag slug already exists"
                } else {
                    "unique constraint violated"
                };
                return DomainError::Conflict(what.into());
            }

            if db_err.is_foreign_key_violation() {
                return DomainError::NotFound("referenced record not found".into());
            }

            if db_err.is_check_violation() {
                return DomainError::Validation(format!("check constraint violated: {message}"));
            }

            DomainError::Persistence(message.to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("record not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
