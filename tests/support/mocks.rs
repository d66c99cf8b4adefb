// tests/support/mocks.rs
use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use keijiban_core::application::ports::audit::AuditorProvider;
use keijiban_core::application::ports::time::Clock;
use keijiban_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWithAuthor,
    ArticleWriteRepository, NewArticle,
};
use keijiban_core::domain::comment::{ArticleComment, CommentRepository};
use keijiban_core::domain::errors::{DomainError, DomainResult};
use keijiban_core::domain::pagination::PageRequest;
use keijiban_core::domain::user::UserAccount;

/// In-memory article store mirroring the observable behaviour of the
/// Postgres repositories: author join, cascade delete, slice-plus-total
/// paging, newest first.
#[derive(Default)]
pub struct InMemoryBoard {
    state: Mutex<BoardState>,
}

#[derive(Default)]
struct BoardState {
    users: BTreeMap<i64, UserAccount>,
    articles: BTreeMap<i64, ArticleWithAuthor>,
    comments: BTreeMap<i64, ArticleComment>,
}

impl InMemoryBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_user(&self, user: UserAccount) {
        let mut state = self.state.lock().unwrap();
        state.users.insert(user.id.into(), user);
    }

    pub fn seed_article(&self, record: ArticleWithAuthor) {
        let mut state = self.state.lock().unwrap();
        state.users.insert(record.author.id.into(), record.author.clone());
        state.articles.insert(record.article.id.into(), record);
    }

    pub fn seed_comment(&self, comment: ArticleComment) {
        let mut state = self.state.lock().unwrap();
        state.comments.insert(comment.id.into(), comment);
    }

    pub fn article(&self, id: i64) -> Option<ArticleWithAuthor> {
        self.state.lock().unwrap().articles.get(&id).cloned()
    }

    pub fn article_count(&self) -> u64 {
        self.state.lock().unwrap().articles.len() as u64
    }

    pub fn comment_count(&self) -> u64 {
        self.state.lock().unwrap().comments.len() as u64
    }

    fn page_of(
        mut records: Vec<ArticleWithAuthor>,
        page: PageRequest,
    ) -> (Vec<ArticleWithAuthor>, u64) {
        records.sort_by(|a, b| {
            b.article
                .audit
                .created_at
                .cmp(&a.article.audit.created_at)
                .then_with(|| i64::from(b.article.id).cmp(&i64::from(a.article.id)))
        });
        let total = records.len() as u64;
        let start = usize::try_from(page.offset())
            .unwrap_or(usize::MAX)
            .min(records.len());
        let end = start
            .saturating_add(page.size() as usize)
            .min(records.len());
        (records[start..end].to_vec(), total)
    }

    fn filtered(
        &self,
        page: PageRequest,
        predicate: impl Fn(&ArticleWithAuthor) -> bool,
    ) -> (Vec<ArticleWithAuthor>, u64) {
        let state = self.state.lock().unwrap();
        let records = state
            .articles
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect();
        Self::page_of(records, page)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryBoard {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleWithAuthor>> {
        Ok(self.article(id.into()))
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<(Vec<ArticleWithAuthor>, u64)> {
        Ok(self.filtered(page, |_| true))
    }

    async fn find_by_title_containing(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> DomainResult<(Vec<ArticleWithAuthor>, u64)> {
        let needle = keyword.to_lowercase();
        Ok(self.filtered(page, |record| {
            record.article.title.as_str().to_lowercase().contains(&needle)
        }))
    }

    async fn find_by_content_containing(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> DomainResult<(Vec<ArticleWithAuthor>, u64)> {
        let needle = keyword.to_lowercase();
        Ok(self.filtered(page, |record| {
            record
                .article
                .content
                .as_str()
                .to_lowercase()
                .contains(&needle)
        }))
    }

    async fn find_by_hashtag(
        &self,
        hashtag: &str,
        page: PageRequest,
    ) -> DomainResult<(Vec<ArticleWithAuthor>, u64)> {
        Ok(self.filtered(page, |record| {
            record
                .article
                .hashtag
                .as_ref()
                .is_some_and(|tag| tag.as_str() == hashtag)
        }))
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.article_count())
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryBoard {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let author = state
            .users
            .get(&i64::from(article.author_id))
            .cloned()
            .ok_or_else(|| DomainError::NotFound("author not found".into()))?;

        let id = state.articles.keys().max().copied().unwrap_or(0) + 1;
        let stored = Article {
            id: ArticleId::new(id).unwrap(),
            author_id: article.author_id,
            title: article.title,
            content: article.content,
            hashtag: article.hashtag,
            audit: article.audit,
        };
        state.articles.insert(
            id,
            ArticleWithAuthor {
                article: stored.clone(),
                author,
            },
        );
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.lock().unwrap();
        let id = i64::from(update.id);
        let record = state.articles.get_mut(&id).ok_or_else(|| {
            DomainError::NotFound(format!("article not found - articleId: {id}"))
        })?;

        if let Some(title) = update.title {
            record.article.title = title;
        }
        if let Some(content) = update.content {
            record.article.content = content;
        }
        if let Some(hashtag) = update.hashtag {
            record.article.hashtag = hashtag;
        }
        record
            .article
            .audit
            .touch(update.modified_by, update.modified_at);

        Ok(record.article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let id = i64::from(id);
        state.articles.remove(&id);
        state
            .comments
            .retain(|_, comment| i64::from(comment.article_id) != id);
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryBoard {
    async fn list_by_article(&self, article_id: ArticleId) -> DomainResult<Vec<ArticleComment>> {
        let state = self.state.lock().unwrap();
        let mut comments: Vec<ArticleComment> = state
            .comments
            .values()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| {
            a.audit
                .created_at
                .cmp(&b.audit.created_at)
                .then_with(|| i64::from(a.id).cmp(&i64::from(b.id)))
        });
        Ok(comments)
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.comment_count())
    }
}

/// Clock pinned to a fixed instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Auditor with a fixed name, mirroring the placeholder provider.
pub struct TestAuditor(pub &'static str);

impl AuditorProvider for TestAuditor {
    fn current_auditor(&self) -> String {
        self.0.into()
    }
}
