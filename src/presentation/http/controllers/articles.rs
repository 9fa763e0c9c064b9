// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        CreateArticleCommand, DeleteArticleCommand, ReviewArticleCommand, ReviewDecision,
        UpdateArticleCommand,
    },
    dto::{ArticleDto, PaginatedResult},
    queries::articles::ListArticlesQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, MaybeAuthenticated, PageParams};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Case-insensitive match against title and body.
    pub q: Option<String>,
    #[param(value_type = Option<u32>)]
    pub page: Option<String>,
    #[param(value_type = Option<u32>)]
    pub page_size: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    pub body: String,
    /// Publisher the author writes for; omit for an independent article.
    #[serde(default)]
    pub publisher_id: Option<i64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub body: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "Approved articles, newest first.", body = PaginatedResult<ArticleDto>)
    ),
    security(()),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<PaginatedResult<ArticleDto>>> {
    let page = PageParams {
        page: params.page,
        page_size: params.page_size,
    }
    .to_request();

    state
        .services
        .article_queries
        .list_approved(ListArticlesQuery {
            search: params.q,
            page,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/subscribed",
    params(PageParams),
    responses(
        (status = 200, description = "Approved articles from the caller's subscriptions.", body = PaginatedResult<ArticleDto>),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Caller is not a reader.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_subscribed(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_subscribed(&user, params.to_request())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/publisher/{id}",
    params(("id" = i64, Path, description = "Publisher id"), PageParams),
    responses(
        (status = 200, description = "Approved articles of the publisher.", body = PaginatedResult<ArticleDto>),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown publisher.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_by_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(id): Path<i64>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_by_publisher(id, params.to_request())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/journalist/{id}",
    params(("id" = i64, Path, description = "Journalist user id"), PageParams),
    responses(
        (status = 200, description = "Approved articles of the journalist.", body = PaginatedResult<ArticleDto>),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 404, description = "Unknown journalist.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_by_journalist(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(id): Path<i64>,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_by_journalist(id, params.to_request())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/pending",
    params(PageParams),
    responses(
        (status = 200, description = "Review queue, oldest first.", body = PaginatedResult<ArticleDto>),
        (status = 403, description = "Caller is not an editor.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_pending(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_pending(&user, params.to_request())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/mine",
    params(PageParams),
    responses(
        (status = 200, description = "The caller's own articles in every state.", body = PaginatedResult<ArticleDto>),
        (status = 403, description = "Caller is not a journalist.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_mine(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_mine(&user, params.to_request())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "Unknown or not visible to the caller.", body = ErrorResponse)
    ),
    security((), ("bearerAuth" = [])),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    actor: MaybeAuthenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article(actor.0.as_ref(), id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created and awaiting review.", body = ArticleDto),
        (status = 403, description = "Caller cannot write for this publisher.", body = ErrorResponse),
        (status = 404, description = "Unknown publisher.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        title: payload.title,
        body: payload.body,
        publisher_id: payload.publisher_id,
    };

    let article = state
        .services
        .article_commands
        .create_article(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 403, description = "Caller may not edit this article.", body = ErrorResponse),
        (status = 409, description = "Article was already reviewed.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateArticleRequest>,
) -> HttpResult<Json<ArticleDto>> {
    let command = UpdateArticleCommand {
        id,
        title: payload.title,
        body: payload.body,
    };

    state
        .services
        .article_commands
        .update_article(&user, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 403, description = "Caller may not delete this article.", body = ErrorResponse),
        (status = 404, description = "Unknown article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(&user, DeleteArticleCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

async fn review(
    state: HttpState,
    user: crate::application::dto::AuthenticatedUser,
    id: i64,
    decision: ReviewDecision,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .review_article(&user, ReviewArticleCommand { id, decision })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/approve",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article approved; subscribers will be notified.", body = ArticleDto),
        (status = 403, description = "Caller is not an editor.", body = ErrorResponse),
        (status = 409, description = "Article was already reviewed.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn approve_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    review(state, user, id, ReviewDecision::Approve).await
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/reject",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article rejected.", body = ArticleDto),
        (status = 403, description = "Caller is not an editor.", body = ErrorResponse),
        (status = 409, description = "Article was already reviewed.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn reject_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    review(state, user, id, ReviewDecision::Reject).await
}
