use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleWithCommentsDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Single-article retrieval with the live comment collection. A missing
    /// id is the one caller-visible NotFound in this service.
    pub async fn get_article(
        &self,
        query: GetArticleQuery,
    ) -> ApplicationResult<ArticleWithCommentsDto> {
        // Ids outside the valid range cannot exist, so they take the same
        // NotFound path as an absent row.
        let record = match ArticleId::new(query.id) {
            Ok(id) => self.read_repo.find_by_id(id).await?,
            Err(_) => None,
        };

        let record = record.ok_or_else(|| {
            ApplicationError::not_found(format!("article not found - articleId: {}", query.id))
        })?;

        let comments = self
            .comment_repo
            .list_by_article(record.article.id)
            .await?;

        Ok(ArticleWithCommentsDto::from_parts(record, comments))
    }
}
