use crate::domain::comment::ArticleComment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleCommentDto {
    pub id: i64,
    pub article_id: i64,
    pub author_id: i64,
    pub content: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    #[serde(with = "serde_time")]
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl From<ArticleComment> for ArticleCommentDto {
    fn from(comment: ArticleComment) -> Self {
        Self {
            id: comment.id.into(),
            article_id: comment.article_id.into(),
            author_id: comment.author_id.into(),
            content: comment.content.into(),
            created_at: comment.audit.created_at,
            created_by: comment.audit.created_by,
            modified_at: comment.audit.modified_at,
            modified_by: comment.audit.modified_by,
        }
    }
}
