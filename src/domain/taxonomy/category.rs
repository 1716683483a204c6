// src/domain/taxonomy/category.rs
use super::require_name;
use crate::domain::errors::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("category id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CategoryId> for i64 {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

/// Parent links are not checked for cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<CategoryId>,
    pub sort_order: i32,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub parent_id: Option<CategoryId>,
    pub sort_order: i32,
}

impl NewCategory {
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        sort_order: i32,
    ) -> DomainResult<Self> {
        Ok(Self {
            name: require_name(name, "category name")?,
            slug: require_name(slug, "category slug")?,
            parent_id: None,
            sort_order,
        })
    }
}
