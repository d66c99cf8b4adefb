mod count;
mod get;
mod search;
mod service;

pub use get::GetArticleQuery;
pub use search::{SearchArticlesQuery, SearchType};
pub use service::ArticleQueryService;
