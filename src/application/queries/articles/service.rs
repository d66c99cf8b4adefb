use std::sync::Arc;

use crate::domain::{article::ArticleReadRepository, comment::CommentRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            read_repo,
            comment_repo,
        }
    }
}
