// src/domain/comment/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::audit::AuditStamp;
use crate::domain::comment::value_objects::{CommentContent, CommentId};
use crate::domain::user::UserId;

/// Comment owned by an article. Rows disappear with their article via the
/// store's cascade; this core only reads and counts them.
#[derive(Debug, Clone)]
pub struct ArticleComment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub content: CommentContent,
    pub audit: AuditStamp,
}
