// src/application/commands/articles/views.rs
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::domain::article::{ArticleId, ArticleWriteRepository};

/// Detached view counting for public reads.
#[derive(Clone)]
pub struct ViewRecorder {
    write_repo: Arc<dyn ArticleWriteRepository>,
}

impl ViewRecorder {
    pub fn new(write_repo: Arc<dyn ArticleWriteRepository>) -> Self {
        Self { write_repo }
    }

    /// Spawns the increment and returns immediately. Failures are logged and
    /// dropped; callers may ignore the handle.
    pub fn record(&self, id: ArticleId) -> JoinHandle<()> {
        let repo = Arc::clone(&self.write_repo);
        tokio::spawn(async move {
            if let Err(err) = repo.increment_view_count(id).await {
                tracing::warn!(article_id = %id, error = %err, "failed to record article view");
            }
        })
    }
}
