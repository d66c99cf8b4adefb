// tests/support/builders.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use once_cell::sync::Lazy;

use keijiban_core::domain::article::{
    Article, ArticleContent, ArticleId, ArticleTitle, ArticleWithAuthor, Hashtag,
};
use keijiban_core::domain::audit::AuditStamp;
use keijiban_core::domain::comment::{ArticleComment, CommentContent, CommentId};
use keijiban_core::domain::user::{UserAccount, UserId, Username};

/// Deterministic base timestamp; builders offset from it by entity id so
/// ordering by creation time is stable across runs.
pub static BASE_TIME: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap());

pub struct UserAccountBuilder {
    id: i64,
    username: String,
}

impl UserAccountBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            username: "minji".into(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn build(self) -> UserAccount {
        let email = format!("{}@example.com", self.username);
        UserAccount {
            id: UserId::new(self.id).unwrap(),
            username: Username::new(self.username).unwrap(),
            email: Some(email),
            nickname: None,
            memo: None,
            audit: AuditStamp::new("seed", *BASE_TIME),
        }
    }
}

pub struct ArticleBuilder {
    id: i64,
    author: UserAccount,
    title: String,
    content: String,
    hashtag: Option<String>,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            author: UserAccountBuilder::new().build(),
            title: "test article".into(),
            content: "test content".into(),
            hashtag: Some("#rust".into()),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn author(mut self, author: UserAccount) -> Self {
        self.author = author;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn hashtag(mut self, hashtag: impl Into<String>) -> Self {
        self.hashtag = Some(hashtag.into());
        self
    }

    pub fn no_hashtag(mut self) -> Self {
        self.hashtag = None;
        self
    }

    pub fn build(self) -> ArticleWithAuthor {
        let created_at = *BASE_TIME + Duration::seconds(self.id);
        ArticleWithAuthor {
            article: Article {
                id: ArticleId::new(self.id).unwrap(),
                author_id: self.author.id,
                title: ArticleTitle::new(self.title).unwrap(),
                content: ArticleContent::new(self.content).unwrap(),
                hashtag: self.hashtag.map(|tag| Hashtag::new(tag).unwrap()),
                audit: AuditStamp::new("seed", created_at),
            },
            author: self.author,
        }
    }
}

pub struct CommentBuilder {
    id: i64,
    article_id: i64,
    author_id: i64,
    content: String,
}

impl CommentBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            article_id: 1,
            author_id: 1,
            content: "test comment".into(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn article_id(mut self, article_id: i64) -> Self {
        self.article_id = article_id;
        self
    }

    pub fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn build(self) -> ArticleComment {
        let created_at = *BASE_TIME + Duration::seconds(self.id);
        ArticleComment {
            id: CommentId::new(self.id).unwrap(),
            article_id: ArticleId::new(self.article_id).unwrap(),
            author_id: UserId::new(self.author_id).unwrap(),
            content: CommentContent::new(self.content).unwrap(),
            audit: AuditStamp::new("seed", created_at),
        }
    }
}
