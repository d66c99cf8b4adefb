// src/infrastructure/repositories/postgres_comment.rs
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::audit::AuditStamp;
use crate::domain::comment::{ArticleComment, CommentContent, CommentId, CommentRepository};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    article_id: i64,
    author_id: i64,
    content: String,
    created_at: DateTime<Utc>,
    created_by: String,
    modified_at: DateTime<Utc>,
    modified_by: String,
}

impl TryFrom<CommentRow> for ArticleComment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(ArticleComment {
            id: CommentId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            author_id: UserId::new(row.author_id)?,
            content: CommentContent::new(row.content)?,
            audit: AuditStamp {
                created_at: row.created_at,
                created_by: row.created_by,
                modified_at: row.modified_at,
                modified_by: row.modified_by,
            },
        })
    }
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleComment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT id, article_id, author_id, content, created_at, created_by, modified_at, modified_by
             FROM article_comments WHERE article_id = $1
             ORDER BY created_at ASC, id ASC",
        )
        .bind(i64::from(article_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleComment::try_from).collect()
    }

    async fn count(&self) -> DomainResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM article_comments")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or(0))
    }
}
