// tests/support/memory.rs
//! One in-memory store that implements every repository port.
use std::cmp::Ordering;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use blogger_core::domain::{
    article::{
        Article, ArticleId, ArticleListCriteria, ArticleReadRepository, ArticleSlug,
        ArticleSortKey, ArticleUpdate, ArticleWriteRepository, NewArticle, Visibility,
        fold_for_search,
    },
    errors::{DomainError, DomainResult},
    taxonomy::{
        Category, CategoryId, CategoryRepository, NewCategory, NewTag, Tag, TagId, TagRepository,
    },
    user::{Role, User, UserId, UserRepository},
};
use chrono::{DateTime, Utc};

#[derive(Default)]
struct State {
    users: Vec<User>,
    categories: Vec<Category>,
    tags: Vec<Tag>,
    articles: Vec<Article>,
    next_id: i64,
    /// Inserts that will fail with a slug conflict before touching state.
    forced_conflicts: u32,
    fail_view_counts: bool,
}

impl State {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<State>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, display_name: &str, role: Role) -> User {
        let mut state = self.state.lock().unwrap();
        let id = state.next_id();
        let user = User {
            id: UserId(id),
            email: format!("{}@example.com", display_name.to_lowercase()),
            display_name: display_name.to_string(),
            avatar: None,
            role,
            is_active: true,
            created_at: Utc::now(),
        };
        state.users.push(user.clone());
        user
    }

    pub fn deactivate(&self, id: UserId) {
        let mut state = self.state.lock().unwrap();
        if let Some(user) = state.users.iter_mut().find(|u| u.id == id) {
            user.is_active = false;
        }
    }

    pub fn article(&self, id: i64) -> Option<Article> {
        let state = self.state.lock().unwrap();
        state.articles.iter().find(|a| a.id.0 == id).cloned()
    }

    pub fn article_count(&self) -> usize {
        self.state.lock().unwrap().articles.len()
    }

    pub fn category_count(&self) -> usize {
        self.state.lock().unwrap().categories.len()
    }

    pub fn tag_count(&self) -> usize {
        self.state.lock().unwrap().tags.len()
    }

    /// Simulates concurrent writers claiming the probed slug `times` times.
    pub fn force_slug_conflicts(&self, times: u32) {
        self.state.lock().unwrap().forced_conflicts = times;
    }

    pub fn fail_view_counts(&self) {
        self.state.lock().unwrap().fail_view_counts = true;
    }
}

fn visible(article: &Article, visibility: &Visibility) -> bool {
    match visibility {
        Visibility::Public { now } => article.is_visible_at(*now),
        Visibility::All { status } => status.is_none_or(|s| s == article.status),
    }
}

fn matches_search(article: &Article, needle: Option<&str>) -> bool {
    let Some(needle) = needle else {
        return true;
    };
    fold_for_search(article.title.as_str()).contains(needle)
        || article
            .summary
            .as_deref()
            .is_some_and(|s| fold_for_search(s).contains(needle))
}

fn compare(a: &Article, b: &Article, key: ArticleSortKey) -> Ordering {
    let primary = match key {
        ArticleSortKey::Title => a.title.as_str().cmp(b.title.as_str()),
        ArticleSortKey::PublishedAt => a.published_at.cmp(&b.published_at),
        ArticleSortKey::ViewCount => a.view_count.cmp(&b.view_count),
        ArticleSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
    };
    primary.then(a.id.cmp(&b.id))
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ArticleWriteRepository for MemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        if state.forced_conflicts > 0 {
            state.forced_conflicts -= 1;
            return Err(DomainError::Conflict("article slug already exists".into()));
        }
        if state.articles.iter().any(|a| a.slug == article.slug) {
            return Err(DomainError::Conflict("article slug already exists".into()));
        }

        let id = state.next_id();
        let created = Article {
            id: ArticleId(id),
            title: article.title,
            slug: article.slug,
            summary: article.summary,
            content: article.content,
            cover_image: article.cover_image,
            category_id: article.category_id,
            author_id: article.author_id,
            status: article.status,
            published_at: article.published_at,
            view_count: 0,
            version: 1,
            created_at: article.created_at,
            updated_at: None,
            tag_ids: article.tag_ids,
        };
        state.articles.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let article = state
            .articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(content) = update.content {
            article.title = content.title;
            article.summary = content.summary;
            article.content = content.content;
            article.cover_image = content.cover_image;
            article.category_id = content.category_id;
        }
        if let Some(summary) = update.summary {
            article.summary = Some(summary);
        }
        if let Some(body) = update.body {
            article.content = Some(body);
        }
        if let Some(tag_ids) = update.tag_ids {
            article.tag_ids = tag_ids;
        }
        if let Some(publish) = update.publish_state {
            article.status = publish.status;
            article.published_at = publish.published_at;
        }
        if update.bump_version {
            article.version += 1;
        }
        article.updated_at = Some(update.updated_at);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.articles.len();
        state.articles.retain(|a| a.id != id);
        if state.articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_view_counts {
            return Err(DomainError::Persistence("view counter offline".into()));
        }
        let article = state
            .articles
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.view_count += 1;
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for MemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state.articles.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let state = self.state.lock().unwrap();
        Ok(state.articles.iter().find(|a| &a.slug == slug).cloned())
    }

    async fn slug_exists(&self, slug: &ArticleSlug) -> DomainResult<bool> {
        let state = self.state.lock().unwrap();
        Ok(state.articles.iter().any(|a| &a.slug == slug))
    }

    async fn list_page(&self, criteria: &ArticleListCriteria) -> DomainResult<(Vec<Article>, u64)> {
        let state = self.state.lock().unwrap();
        let needle = criteria.search_needle();
        let mut matching: Vec<Article> = state
            .articles
            .iter()
            .filter(|a| visible(a, &criteria.visibility))
            .filter(|a| criteria.category_id.is_none_or(|c| a.category_id == Some(c)))
            .filter(|a| criteria.tag_id.is_none_or(|t| a.tag_ids.contains(&t)))
            .filter(|a| matches_search(a, needle.as_deref()))
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            let ordering = compare(a, b, criteria.sort);
            if criteria.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(criteria.offset() as usize)
            .take(criteria.page_size as usize)
            .collect();
        Ok((page, total))
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut state = self.state.lock().unwrap();
        if state.categories.iter().any(|c| c.slug == category.slug) {
            return Err(DomainError::Conflict("category slug already exists".into()));
        }
        let id = state.next_id();
        let created = Category {
            id: CategoryId(id),
            name: category.name,
            slug: category.slug,
            parent_id: category.parent_id,
            sort_order: category.sort_order,
        };
        state.categories.push(created.clone());
        Ok(created)
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state.categories.iter().find(|c| c.slug == slug).cloned())
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> DomainResult<Vec<Category>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .categories
            .iter()
            .filter(|c| ids.contains(&c.id))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> DomainResult<Vec<Category>> {
        let state = self.state.lock().unwrap();
        let mut categories = state.categories.clone();
        categories.sort_by_key(|c| (c.sort_order, c.id));
        Ok(categories)
    }

    async fn list_with_published_counts(
        &self,
        now: DateTime<Utc>,
    ) -> DomainResult<Vec<(Category, u64)>> {
        let categories = CategoryRepository::list_all(self).await?;
        let state = self.state.lock().unwrap();
        Ok(categories
            .into_iter()
            .map(|category| {
                let count = state
                    .articles
                    .iter()
                    .filter(|a| a.category_id == Some(category.id) && a.is_visible_at(now))
                    .count() as u64;
                (category, count)
            })
            .collect())
    }
}

#[async_trait]
impl TagRepository for MemoryStore {
    async fn insert(&self, tag: NewTag) -> DomainResult<Tag> {
        let mut state = self.state.lock().unwrap();
        if state.tags.iter().any(|t| t.slug == tag.slug) {
            return Err(DomainError::Conflict("tag slug already exists".into()));
        }
        let id = state.next_id();
        let created = Tag {
            id: TagId(id),
            name: tag.name,
            slug: tag.slug,
        };
        state.tags.push(created.clone());
        Ok(created)
    }

    async fn find_by_slug(&self, slug: &str) -> DomainResult<Option<Tag>> {
        let state = self.state.lock().unwrap();
        Ok(state.tags.iter().find(|t| t.slug == slug).cloned())
    }

    async fn find_by_ids(&self, ids: &[TagId]) -> DomainResult<Vec<Tag>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .tags
            .iter()
            .filter(|t| ids.contains(&t.id))
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> DomainResult<Vec<Tag>> {
        let state = self.state.lock().unwrap();
        let mut tags = state.tags.clone();
        tags.sort_by_key(|t| t.id);
        Ok(tags)
    }
}
