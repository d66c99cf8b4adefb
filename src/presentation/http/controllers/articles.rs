// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, ArticleWithCommentsDto, Page},
    queries::articles::{GetArticleQuery, SearchArticlesQuery, SearchType},
};
use crate::domain::pagination::PageRequest;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

fn default_size() -> u32 {
    20
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ArticleSearchParams {
    #[serde(default)]
    pub search_type: Option<SearchType>,
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub author_id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub hashtag: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub hashtag: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleCountResponse {
    pub count: u64,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleSearchParams),
    responses((status = 200, description = "Paged article listing, optionally filtered.", body = Page<ArticleDto>)),
    tag = "Articles"
)]
pub async fn search_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleSearchParams>,
) -> HttpResult<Json<Page<ArticleDto>>> {
    state
        .services
        .article_queries
        .search_articles(SearchArticlesQuery {
            search_type: params.search_type,
            keyword: params.keyword,
            page: PageRequest::new(params.page, params.size),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article with its comments.", body = ArticleWithCommentsDto),
        (status = 404, description = "No article with this id.")
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleWithCommentsDto>> {
    state
        .services
        .article_queries
        .get_article(GetArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/count",
    responses((status = 200, description = "Total number of articles.", body = ArticleCountResponse)),
    tag = "Articles"
)]
pub async fn get_article_count(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<ArticleCountResponse>> {
    state
        .services
        .article_queries
        .get_article_count()
        .await
        .into_http()
        .map(|count| Json(ArticleCountResponse { count }))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created."),
        (status = 400, description = "Blank title or content."),
        (status = 404, description = "Author does not exist.")
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<serde_json::Value>)> {
    state
        .services
        .article_commands
        .create_article(CreateArticleCommand {
            author_id: payload.author_id,
            title: payload.title,
            content: payload.content,
            hashtag: payload.hashtag,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(json!({ "status": "created" }))))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Patch applied; a missing article is skipped, not an error."),
        (status = 400, description = "Blank title or content.")
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .update_article(UpdateArticleCommand {
            id,
            title: payload.title,
            content: payload.content,
            hashtag: payload.hashtag,
        })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "updated" })))
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses((status = 200, description = "Article and its comments removed; absent ids are success.")),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
