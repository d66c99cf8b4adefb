use crate::domain::article::ArticleWithAuthor;
use crate::domain::comment::ArticleComment;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;
use super::{ArticleCommentDto, UserAccountDto};

/// Detached snapshot of an article and its author. Never shares state with
/// the stored row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub author: UserAccountDto,
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    #[serde(with = "serde_time")]
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl From<ArticleWithAuthor> for ArticleDto {
    fn from(record: ArticleWithAuthor) -> Self {
        let ArticleWithAuthor { article, author } = record;
        Self {
            id: article.id.into(),
            author: author.into(),
            title: article.title.into(),
            content: article.content.into(),
            hashtag: article.hashtag.map(String::from),
            created_at: article.audit.created_at,
            created_by: article.audit.created_by,
            modified_at: article.audit.modified_at,
            modified_by: article.audit.modified_by,
        }
    }
}

/// `ArticleDto` extended with comment snapshots; only single-article
/// retrieval produces it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleWithCommentsDto {
    pub id: i64,
    pub author: UserAccountDto,
    pub title: String,
    pub content: String,
    pub hashtag: Option<String>,
    pub comments: Vec<ArticleCommentDto>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    pub created_by: String,
    #[serde(with = "serde_time")]
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl ArticleWithCommentsDto {
    pub fn from_parts(record: ArticleWithAuthor, comments: Vec<ArticleComment>) -> Self {
        let ArticleWithAuthor { article, author } = record;
        Self {
            id: article.id.into(),
            author: author.into(),
            title: article.title.into(),
            content: article.content.into(),
            hashtag: article.hashtag.map(String::from),
            comments: comments.into_iter().map(Into::into).collect(),
            created_at: article.audit.created_at,
            created_by: article.audit.created_by,
            modified_at: article.audit.modified_at,
            modified_by: article.audit.modified_by,
        }
    }
}
