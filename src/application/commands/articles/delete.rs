// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Idempotent from the caller's perspective; the store cascades the
    /// article's comments away with the row.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        // An id that cannot exist is already "deleted".
        let Ok(id) = ArticleId::new(command.id) else {
            return Ok(());
        };
        self.write_repo.delete(id).await?;
        Ok(())
    }
}
