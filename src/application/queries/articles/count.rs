use super::ArticleQueryService;
use crate::application::error::ApplicationResult;

impl ArticleQueryService {
    /// Read-through to the store count; nothing is cached.
    pub async fn get_article_count(&self) -> ApplicationResult<u64> {
        Ok(self.read_repo.count().await?)
    }
}
