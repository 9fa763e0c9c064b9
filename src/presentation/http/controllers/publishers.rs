// src/presentation/http/controllers/publishers.rs
use crate::application::{
    commands::publishers::{AddPublisherMemberCommand, CreatePublisherCommand},
    dto::{PaginatedResult, PublisherDetailDto, PublisherDto},
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
pub struct CreatePublisherRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/publishers",
    params(PageParams),
    responses(
        (status = 200, description = "Publishers ordered by name.", body = PaginatedResult<PublisherDto>),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Publishers"
)]
pub async fn list_publishers(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<PublisherDto>>> {
    state
        .services
        .publisher_queries
        .list_publishers(params.to_request())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/publishers",
    request_body = CreatePublisherRequest,
    responses(
        (status = 201, description = "Publisher created.", body = PublisherDto),
        (status = 403, description = "Caller is not an editor.", body = ErrorResponse),
        (status = 409, description = "Name already taken.", body = ErrorResponse)
    ),
    tag = "Publishers"
)]
pub async fn create_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreatePublisherRequest>,
) -> HttpResult<(StatusCode, Json<PublisherDto>)> {
    let publisher = state
        .services
        .publisher_commands
        .create_publisher(
            &user,
            CreatePublisherCommand {
                name: payload.name,
                description: payload.description,
            },
        )
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(publisher)))
}

#[utoipa::path(
    get,
    path = "/api/v1/publishers/{id}",
    params(("id" = i64, Path, description = "Publisher id")),
    responses(
        (status = 200, description = "Publisher with its members.", body = PublisherDetailDto),
        (status = 404, description = "Unknown publisher.", body = ErrorResponse)
    ),
    tag = "Publishers"
)]
pub async fn get_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<Json<PublisherDetailDto>> {
    state
        .services
        .publisher_queries
        .get_publisher(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/v1/publishers/{id}/members/{user_id}",
    params(
        ("id" = i64, Path, description = "Publisher id"),
        ("user_id" = i64, Path, description = "Editor or journalist to attach")
    ),
    responses(
        (status = 200, description = "Updated publisher.", body = PublisherDetailDto),
        (status = 400, description = "User is a reader.", body = ErrorResponse),
        (status = 403, description = "Caller is not an editor.", body = ErrorResponse),
        (status = 404, description = "Unknown publisher or user.", body = ErrorResponse)
    ),
    tag = "Publishers"
)]
pub async fn add_member(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path((publisher_id, user_id)): Path<(i64, i64)>,
) -> HttpResult<Json<PublisherDetailDto>> {
    state
        .services
        .publisher_commands
        .add_member(
            &user,
            AddPublisherMemberCommand {
                publisher_id,
                user_id,
            },
        )
        .await
        .into_http()
        .map(Json)
}
