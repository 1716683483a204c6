// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<()> {
        let article = self.load_article(command.id).await?;
        self.ensure_can_modify(actor, &article).await?;

        self.write_repo.delete(article.id).await?;
        tracing::info!(article_id = %article.id, actor_id = actor.id.0, "article deleted");
        Ok(())
    }
}
