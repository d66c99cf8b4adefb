// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
    ArticleWithAuthor, ArticleWriteRepository, Hashtag, NewArticle,
};
use crate::domain::audit::AuditStamp;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::user::{UserAccount, UserId, Username};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const SELECT_WITH_AUTHOR: &str = "SELECT a.id, a.author_id, a.title, a.content, a.hashtag, \
     a.created_at, a.created_by, a.modified_at, a.modified_by, \
     u.username AS author_username, u.email AS author_email, \
     u.nickname AS author_nickname, u.memo AS author_memo, \
     u.created_at AS author_created_at, u.created_by AS author_created_by, \
     u.modified_at AS author_modified_at, u.modified_by AS author_modified_by \
     FROM articles a JOIN user_accounts u ON u.id = a.author_id";

const RETURNING_ARTICLE: &str =
    "RETURNING id, author_id, title, content, hashtag, created_at, created_by, modified_at, modified_by";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    author_id: i64,
    title: String,
    content: String,
    hashtag: Option<String>,
    created_at: DateTime<Utc>,
    created_by: String,
    modified_at: DateTime<Utc>,
    modified_by: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            author_id: UserId::new(row.author_id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            hashtag: row.hashtag.map(Hashtag::new).transpose()?,
            audit: AuditStamp {
                created_at: row.created_at,
                created_by: row.created_by,
                modified_at: row.modified_at,
                modified_by: row.modified_by,
            },
        })
    }
}

#[derive(Debug, FromRow)]
struct ArticleWithAuthorRow {
    id: i64,
    author_id: i64,
    title: String,
    content: String,
    hashtag: Option<String>,
    created_at: DateTime<Utc>,
    created_by: String,
    modified_at: DateTime<Utc>,
    modified_by: String,
    author_username: String,
    author_email: Option<String>,
    author_nickname: Option<String>,
    author_memo: Option<String>,
    author_created_at: DateTime<Utc>,
    author_created_by: String,
    author_modified_at: DateTime<Utc>,
    author_modified_by: String,
}

impl TryFrom<ArticleWithAuthorRow> for ArticleWithAuthor {
    type Error = DomainError;

    fn try_from(row: ArticleWithAuthorRow) -> Result<Self, Self::Error> {
        let author = UserAccount {
            id: UserId::new(row.author_id)?,
            username: Username::new(row.author_username)?,
            email: row.author_email,
            nickname: row.author_nickname,
            memo: row.author_memo,
            audit: AuditStamp {
                created_at: row.author_created_at,
                created_by: row.author_created_by,
                modified_at: row.author_modified_at,
                modified_by: row.author_modified_by,
            },
        };
        let article = Article {
            id: ArticleId::new(row.id)?,
            author_id: UserId::new(row.author_id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            hashtag: row.hashtag.map(Hashtag::new).transpose()?,
            audit: AuditStamp {
                created_at: row.created_at,
                created_by: row.created_by,
                modified_at: row.modified_at,
                modified_by: row.modified_by,
            },
        };
        Ok(ArticleWithAuthor { article, author })
    }
}

/// Filter applied identically to the page query and its count query.
enum PageFilter {
    All,
    TitleContains(String),
    ContentContains(String),
    HashtagEquals(String),
}

impl PageFilter {
    fn push_where(&self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::All => {}
            Self::TitleContains(keyword) => {
                builder.push(" WHERE a.title ILIKE ");
                builder.push_bind(format!("%{keyword}%"));
            }
            Self::ContentContains(keyword) => {
                builder.push(" WHERE a.content ILIKE ");
                builder.push_bind(format!("%{keyword}%"));
            }
            Self::HashtagEquals(tag) => {
                builder.push(" WHERE a.hashtag = ");
                builder.push_bind(tag.clone());
            }
        }
    }
}

impl PostgresArticleReadRepository {
    async fn fetch_page(
        &self,
        filter: &PageFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<ArticleWithAuthor>, u64)> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles a");
        filter.push_where(&mut count_builder);
        let total: i64 = count_builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(SELECT_WITH_AUTHOR);
        filter.push_where(&mut builder);
        builder.push(" ORDER BY a.created_at DESC, a.id DESC LIMIT ");
        builder.push_bind(i64::from(page.size()));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ArticleWithAuthorRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let records = rows
            .into_iter()
            .map(ArticleWithAuthor::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((records, u64::try_from(total).unwrap_or(0)))
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleWithAuthor>> {
        let row = sqlx::query_as::<_, ArticleWithAuthorRow>(&format!(
            "{SELECT_WITH_AUTHOR} WHERE a.id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ArticleWithAuthor::try_from).transpose()
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<(Vec<ArticleWithAuthor>, u64)> {
        self.fetch_page(&PageFilter::All, page).await
    }

    async fn find_by_title_containing(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> DomainResult<(Vec<ArticleWithAuthor>, u64)> {
        self.fetch_page(&PageFilter::TitleContains(keyword.to_owned()), page)
            .await
    }

    async fn find_by_content_containing(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> DomainResult<(Vec<ArticleWithAuthor>, u64)> {
        self.fetch_page(&PageFilter::ContentContains(keyword.to_owned()), page)
            .await
    }

    async fn find_by_hashtag(
        &self,
        hashtag: &str,
        page: PageRequest,
    ) -> DomainResult<(Vec<ArticleWithAuthor>, u64)> {
        self.fetch_page(&PageFilter::HashtagEquals(hashtag.to_owned()), page)
            .await
    }

    async fn count(&self) -> DomainResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(u64::try_from(total).unwrap_or(0))
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            author_id,
            title,
            content,
            hashtag,
            audit,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (author_id, title, content, hashtag, created_at, created_by, modified_at, modified_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             {RETURNING_ARTICLE}"
        ))
        .bind(i64::from(author_id))
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(hashtag.as_ref().map(Hashtag::as_str))
        .bind(audit.created_at)
        .bind(audit.created_by.as_str())
        .bind(audit.modified_at)
        .bind(audit.modified_by.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            content,
            hashtag,
            modified_at,
            modified_by,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET modified_at = ");
        builder.push_bind(modified_at);
        builder.push(", modified_by = ");
        builder.push_bind(modified_by);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(String::from(title));
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(String::from(content));
        }

        if let Some(hashtag) = hashtag {
            builder.push(", hashtag = ");
            builder.push_bind(hashtag.map(String::from));
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" ");
        builder.push(RETURNING_ARTICLE);

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| {
            DomainError::NotFound(format!("article not found - articleId: {}", i64::from(id)))
        })?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        // Already-gone rows count as success; comments cascade with the row.
        if result.rows_affected() == 0 {
            tracing::debug!(
                article_id = i64::from(id),
                "delete of an absent article treated as success"
            );
        }
        Ok(())
    }
}
