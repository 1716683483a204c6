pub mod articles;
pub mod auth;
pub mod imports;
pub mod pagination;
pub mod serde_time;
pub mod taxonomy;
pub mod users;

pub use articles::{ArticleDto, ArticleListItemDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use imports::{
    ArticleImportResult, ImportArticleItem, ImportCategoryItem, ImportReport, ImportTagItem,
    TaxonomyImportResult,
};
pub use pagination::Page;
pub use taxonomy::{CategoryDto, TagDto};
pub use users::UserSummaryDto;
