pub mod entity;
pub mod listing;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleContent, ArticleUpdate, NewArticle, PublishStateUpdate};
pub use listing::{ArticleListCriteria, ArticleSortKey, Visibility, fold_for_search};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleId, ArticleSlug, ArticleStatus, ArticleTitle};
