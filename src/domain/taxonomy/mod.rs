// src/domain/taxonomy/mod.rs
pub mod category;
pub mod repository;
pub mod tag;

pub use category::{Category, CategoryId, NewCategory};
pub use repository::{CategoryRepository, TagRepository};
pub use tag::{NewTag, Tag, TagId};

use crate::domain::errors::{DomainError, DomainResult};

pub(crate) fn require_name(value: impl Into<String>, what: &str) -> DomainResult<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{what} cannot be empty")));
    }
    Ok(trimmed.to_string())
}
