// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        assembler::ArticleAssembler,
        commands::{
            articles::{ArticleCommandService, ViewRecorder},
            imports::ImportCommandService,
        },
        dto::AuthenticatedUser,
        error::ApplicationError,
        ports::{security::TokenManager, time::Clock, util::SlugGenerator},
        queries::{articles::ArticleQueryService, taxonomy::TaxonomyQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        authorization::OwnerOrAdminPolicy,
        taxonomy::{CategoryRepository, TagRepository},
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub taxonomy_queries: Arc<TaxonomyQueryService>,
    pub imports: Arc<ImportCommandService>,
    user_repo: Arc<dyn UserRepository>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        token_manager: Arc<dyn TokenManager>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let slug_service = Arc::new(ArticleSlugService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&article_write_repo),
            Arc::clone(&slugger),
        ));
        let assembler = Arc::new(ArticleAssembler::new(
            Arc::clone(&category_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&user_repo),
        ));
        let policy = Arc::new(OwnerOrAdminPolicy::new(Arc::clone(&user_repo)));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&slug_service),
            policy,
            Arc::clone(&assembler),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&assembler),
            ViewRecorder::new(Arc::clone(&article_write_repo)),
            Arc::clone(&clock),
        ));
        let taxonomy_queries = Arc::new(TaxonomyQueryService::new(
            Arc::clone(&category_repo),
            Arc::clone(&tag_repo),
            Arc::clone(&clock),
        ));

        let imports = Arc::new(ImportCommandService::new(
            article_read_repo,
            article_write_repo,
            category_repo,
            tag_repo,
            slug_service,
            slugger,
            clock,
        ));

        Self {
            article_commands,
            article_queries,
            taxonomy_queries,
            imports,
            user_repo,
            token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    /// Verifies a raw bearer token and checks that its subject is still an
    /// active account.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let user = self.token_manager.authenticate(token).await?;

        match self.user_repo.find_by_id(user.id).await? {
            Some(account) if account.is_active => Ok(user),
            Some(_) => Err(ApplicationError::unauthorized("account is disabled")),
            None => Err(ApplicationError::unauthorized("unknown account")),
        }
    }
}
