// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{audit::AuditorProvider, time::Clock},
        queries::articles::ArticleQueryService,
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        comment::CommentRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        clock: Arc<dyn Clock>,
        auditor: Arc<dyn AuditorProvider>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
            Arc::clone(&auditor),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&comment_repo),
        ));

        Self {
            article_commands,
            article_queries,
        }
    }
}
