use crate::domain::article::entity::{Article, ArticleUpdate, ArticleWithAuthor, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;

/// Read side of the article store. Page queries return the matching slice
/// together with the authoritative total for the same filter.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<ArticleWithAuthor>>;
    async fn list_page(&self, page: PageRequest) -> DomainResult<(Vec<ArticleWithAuthor>, u64)>;
    async fn find_by_title_containing(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> DomainResult<(Vec<ArticleWithAuthor>, u64)>;
    async fn find_by_content_containing(
        &self,
        keyword: &str,
        page: PageRequest,
    ) -> DomainResult<(Vec<ArticleWithAuthor>, u64)>;
    async fn find_by_hashtag(
        &self,
        hashtag: &str,
        page: PageRequest,
    ) -> DomainResult<(Vec<ArticleWithAuthor>, u64)>;
    async fn count(&self) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Fails with `DomainError::NotFound` when the row no longer exists.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Deleting an absent id is success; comments go with the article.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}
