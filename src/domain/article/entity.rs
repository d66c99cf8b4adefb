// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle, Hashtag};
use crate::domain::audit::AuditStamp;
use crate::domain::user::{UserAccount, UserId};
use chrono::{DateTime, Utc};

/// Board post. Owns its comments: deleting an article deletes them all.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub author_id: UserId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub hashtag: Option<Hashtag>,
    pub audit: AuditStamp,
}

/// Article joined with its author row, as returned by the read repository.
#[derive(Debug, Clone)]
pub struct ArticleWithAuthor {
    pub article: Article,
    pub author: UserAccount,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author_id: UserId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub hashtag: Option<Hashtag>,
    pub audit: AuditStamp,
}

/// Field-level patch applied to an existing article.
///
/// `None` leaves a column untouched; `hashtag` distinguishes "leave alone"
/// (`None`) from "clear the tag" (`Some(None)`). The modification stamp is
/// always rewritten, the creation stamp never.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
    pub hashtag: Option<Option<Hashtag>>,
    pub modified_at: DateTime<Utc>,
    pub modified_by: String,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, modified_by: impl Into<String>, modified_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            hashtag: None,
            modified_at,
            modified_by: modified_by.into(),
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_hashtag(mut self, hashtag: Option<Hashtag>) -> Self {
        self.hashtag = Some(hashtag);
        self
    }

    /// True when no column beyond the stamp would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.hashtag.is_none()
    }
}
