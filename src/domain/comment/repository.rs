use crate::domain::article::ArticleId;
use crate::domain::comment::entity::ArticleComment;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Comments for one article, oldest first.
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleComment>>;
    async fn count(&self) -> DomainResult<u64>;
}
