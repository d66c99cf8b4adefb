use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{ArticleContent, ArticleId, ArticleTitle, ArticleUpdate, Hashtag},
};

/// Field-level patch: `None` leaves a field unchanged, so "caller wants no
/// change" and "caller wants empty text" can never be confused. A blank
/// hashtag clears the tag; blank title or content is a validation error.
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub hashtag: Option<String>,
}

impl ArticleCommandService {
    /// Update-of-missing is deliberately asymmetric with retrieval: the
    /// NotFound is caught here, logged as a warning, and the call completes
    /// as a no-op. Every other failure propagates.
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<()> {
        let article_id = command.id;
        match self.apply_update(command).await {
            Err(err) if err.is_not_found() => {
                tracing::warn!(
                    article_id,
                    error = %err,
                    "update requested for a missing article, skipping"
                );
                Ok(())
            }
            result => result,
        }
    }

    /// Eager two-phase flow: fetch the row first, then apply the mutation.
    /// The store can still report the row gone between the two steps; both
    /// paths produce the NotFound swallowed above.
    async fn apply_update(&self, command: UpdateArticleCommand) -> ApplicationResult<()> {
        let UpdateArticleCommand {
            id,
            title,
            content,
            hashtag,
        } = command;

        let not_found =
            || ApplicationError::not_found(format!("article not found - articleId: {id}"));

        // Ids outside the valid range cannot exist.
        let article_id = ArticleId::new(id).map_err(|_| not_found())?;
        self.read_repo
            .find_by_id(article_id)
            .await?
            .ok_or_else(not_found)?;

        let mut update = ArticleUpdate::new(
            article_id,
            self.auditor.current_auditor(),
            self.clock.now(),
        );

        if let Some(value) = title {
            update = update.with_title(ArticleTitle::new(value)?);
        }
        if let Some(value) = content {
            update = update.with_content(ArticleContent::new(value)?);
        }
        if let Some(value) = hashtag {
            let tag = value.trim();
            update = if tag.is_empty() {
                update.with_hashtag(None)
            } else {
                update.with_hashtag(Some(Hashtag::new(tag)?))
            };
        }

        // Nothing to change: skip the write so the row is not even restamped.
        if update.is_empty() {
            return Ok(());
        }

        self.write_repo.update(update).await?;
        Ok(())
    }
}
