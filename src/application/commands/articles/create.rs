// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{
        article::{ArticleContent, ArticleTitle, Hashtag, NewArticle},
        audit::AuditStamp,
        user::UserId,
    },
};

pub struct CreateArticleCommand {
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
}

impl ArticleCommandService {
    /// Persists exactly one new row. Store-level failures (author FK,
    /// connectivity) propagate to the caller unchanged.
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<()> {
        let author_id = UserId::new(command.author_id)?;
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let hashtag = command
            .hashtag
            .as_deref()
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(Hashtag::new)
            .transpose()?;

        let audit = AuditStamp::new(self.auditor.current_auditor(), self.clock.now());

        let created = self
            .write_repo
            .insert(NewArticle {
                author_id,
                title,
                content,
                hashtag,
                audit,
            })
            .await?;

        tracing::debug!(article_id = i64::from(created.id), "article created");
        Ok(())
    }
}
