use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Page},
        error::ApplicationResult,
    },
    domain::pagination::PageRequest,
};
use serde::Deserialize;
use utoipa::ToSchema;

/// Filter dimension selecting which store query a search dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    Title,
    Content,
    Hashtag,
}

pub struct SearchArticlesQuery {
    pub search_type: Option<SearchType>,
    pub keyword: Option<String>,
    pub page: PageRequest,
}

impl ArticleQueryService {
    /// Paged search. Without a search type or a usable keyword this is the
    /// unfiltered listing; no match is an empty page, never an error.
    pub async fn search_articles(
        &self,
        query: SearchArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let SearchArticlesQuery {
            search_type,
            keyword,
            page,
        } = query;

        let keyword = keyword.as_deref().map(str::trim).filter(|k| !k.is_empty());

        let (records, total) = match (search_type, keyword) {
            (Some(SearchType::Title), Some(keyword)) => {
                self.read_repo.find_by_title_containing(keyword, page).await?
            }
            (Some(SearchType::Content), Some(keyword)) => {
                self.read_repo
                    .find_by_content_containing(keyword, page)
                    .await?
            }
            (Some(SearchType::Hashtag), Some(keyword)) => {
                self.read_repo.find_by_hashtag(keyword, page).await?
            }
            _ => self.read_repo.list_page(page).await?,
        };

        let items = records.into_iter().map(ArticleDto::from).collect();
        Ok(Page::new(items, page, total))
    }
}
