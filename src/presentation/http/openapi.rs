// src/presentation/http/openapi.rs
use crate::application::{
    dto::{ArticleCommentDto, ArticleDto, ArticleWithCommentsDto, Page, UserAccountDto},
    queries::articles::SearchType,
};
use crate::presentation::http::{controllers::articles, routes};
use axum::Router;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health,
        articles::search_articles,
        articles::get_article,
        articles::get_article_count,
        articles::create_article,
        articles::update_article,
        articles::delete_article,
    ),
    components(schemas(
        StatusResponse,
        ArticleDto,
        ArticleWithCommentsDto,
        ArticleCommentDto,
        UserAccountDto,
        Page<ArticleDto>,
        SearchType,
        articles::CreateArticleRequest,
        articles::UpdateArticleRequest,
        articles::ArticleCountResponse,
    )),
    tags(
        (name = "System", description = "Health and service metadata."),
        (name = "Articles", description = "Bulletin board article CRUD.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    SwaggerUi::new("/docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}
