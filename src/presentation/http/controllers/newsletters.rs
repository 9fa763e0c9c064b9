// src/presentation/http/controllers/newsletters.rs
use crate::application::{
    commands::newsletters::CreateNewsletterCommand,
    dto::{NewsletterDto, PaginatedResult},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, PageParams};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNewsletterRequest {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub publisher_id: Option<i64>,
}

#[utoipa::path(
    get,
    path = "/api/v1/newsletters",
    params(PageParams),
    responses(
        (status = 200, description = "All newsletters, newest first.", body = PaginatedResult<NewsletterDto>),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Newsletters"
)]
pub async fn list_newsletters(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<NewsletterDto>>> {
    state
        .services
        .newsletter_queries
        .list_newsletters(&user, params.to_request())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/newsletters/subscribed",
    params(PageParams),
    responses(
        (status = 200, description = "Newsletters from the caller's subscriptions.", body = PaginatedResult<NewsletterDto>),
        (status = 403, description = "Caller is not a reader.", body = ErrorResponse)
    ),
    tag = "Newsletters"
)]
pub async fn list_subscribed_newsletters(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<NewsletterDto>>> {
    state
        .services
        .newsletter_queries
        .list_subscribed(&user, params.to_request())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/newsletters",
    request_body = CreateNewsletterRequest,
    responses(
        (status = 201, description = "Newsletter created.", body = NewsletterDto),
        (status = 403, description = "Caller cannot write for this publisher.", body = ErrorResponse)
    ),
    tag = "Newsletters"
)]
pub async fn create_newsletter(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateNewsletterRequest>,
) -> HttpResult<(StatusCode, Json<NewsletterDto>)> {
    let command = CreateNewsletterCommand {
        title: payload.title,
        body: payload.body,
        publisher_id: payload.publisher_id,
    };
    let newsletter = state
        .services
        .newsletter_commands
        .create_newsletter(&user, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(newsletter)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/newsletters/{id}",
    params(("id" = i64, Path, description = "Newsletter id")),
    responses(
        (status = 204, description = "Newsletter deleted."),
        (status = 403, description = "Caller is not an editor.", body = ErrorResponse),
        (status = 404, description = "Unknown newsletter.", body = ErrorResponse)
    ),
    tag = "Newsletters"
)]
pub async fn delete_newsletter(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    state
        .services
        .newsletter_commands
        .delete_newsletter(&user, id)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
