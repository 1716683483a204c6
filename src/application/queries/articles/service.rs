use std::sync::Arc;

use crate::{
    application::{
        assembler::ArticleAssembler, commands::articles::ViewRecorder, ports::time::Clock,
    },
    domain::article::ArticleReadRepository,
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) assembler: Arc<ArticleAssembler>,
    pub(super) views: ViewRecorder,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleQueryService {
    pub(crate) fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        assembler: Arc<ArticleAssembler>,
        views: ViewRecorder,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            assembler,
            views,
            clock,
        }
    }
}
