use crate::application::dto::{PaginatedResult, UserDto};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, PageParams};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};

#[utoipa::path(
    get,
    path = "/api/v1/journalists",
    params(PageParams),
    responses(
        (status = 200, description = "Active journalists ordered by username.", body = PaginatedResult<UserDto>),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_journalists(
    Extension(state): Extension<HttpState>,
    Authenticated(_user): Authenticated,
    Query(params): Query<PageParams>,
) -> HttpResult<Json<PaginatedResult<UserDto>>> {
    state
        .services
        .user_queries
        .list_journalists(params.to_request())
        .await
        .into_http()
        .map(Json)
}
