pub mod articles;
pub mod comments;
pub mod pagination;
pub mod serde_time;
pub mod users;

pub use articles::{ArticleDto, ArticleWithCommentsDto};
pub use comments::ArticleCommentDto;
pub use pagination::Page;
pub use users::UserAccountDto;
