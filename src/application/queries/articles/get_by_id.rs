use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{Article, ArticleId},
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    async fn find_by_id(&self, id: i64) -> ApplicationResult<Article> {
        let id = ArticleId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    /// Any status; used by the management surface.
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.find_by_id(query.id).await?;
        self.assembler.detail(article).await
    }

    /// Public lookup: hidden unless live and due. Counts a view on success.
    pub async fn get_published_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.find_by_id(query.id).await?;
        self.published_detail(article).await
    }

    pub(super) async fn published_detail(&self, article: Article) -> ApplicationResult<ArticleDto> {
        if !article.is_visible_at(self.clock.now()) {
            return Err(ApplicationError::not_found("article not found"));
        }
        self.views.record(article.id);
        self.assembler.detail(article).await
    }
}
