// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{assembler::ArticleAssembler, ports::time::Clock},
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository, services::ArticleSlugService},
        authorization::AuthorizationPolicy,
        taxonomy::{CategoryRepository, TagRepository},
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) category_repo: Arc<dyn CategoryRepository>,
    pub(super) tag_repo: Arc<dyn TagRepository>,
    pub(super) slug_service: Arc<ArticleSlugService>,
    pub(super) policy: Arc<dyn AuthorizationPolicy>,
    pub(super) assembler: Arc<ArticleAssembler>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        tag_repo: Arc<dyn TagRepository>,
        slug_service: Arc<ArticleSlugService>,
        policy: Arc<dyn AuthorizationPolicy>,
        assembler: Arc<ArticleAssembler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            category_repo,
            tag_repo,
            slug_service,
            policy,
            assembler,
            clock,
        }
    }
}
