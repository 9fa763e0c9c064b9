// src/presentation/http/controllers/subscriptions.rs
use crate::application::{
    commands::subscriptions::SubscriptionTargetRef,
    dto::{SubscriptionDto, SubscriptionListDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    get,
    path = "/api/v1/subscriptions",
    responses(
        (status = 200, description = "The caller's subscriptions.", body = SubscriptionListDto),
        (status = 403, description = "Caller is not a reader.", body = ErrorResponse)
    ),
    tag = "Subscriptions"
)]
pub async fn list_subscriptions(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<SubscriptionListDto>> {
    state
        .services
        .subscription_queries
        .list_subscriptions(&user)
        .await
        .into_http()
        .map(Json)
}

async fn subscribe(
    state: HttpState,
    user: crate::application::dto::AuthenticatedUser,
    target: SubscriptionTargetRef,
) -> HttpResult<(StatusCode, Json<SubscriptionDto>)> {
    let outcome = state
        .services
        .subscription_commands
        .subscribe(&user, target)
        .await
        .into_http()?;
    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(outcome.subscription)))
}

async fn unsubscribe(
    state: HttpState,
    user: crate::application::dto::AuthenticatedUser,
    target: SubscriptionTargetRef,
) -> HttpResult<StatusCode> {
    state
        .services
        .subscription_commands
        .unsubscribe(&user, target)
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/v1/subscriptions/publishers/{id}",
    params(("id" = i64, Path, description = "Publisher id")),
    responses(
        (status = 201, description = "Subscribed.", body = SubscriptionDto),
        (status = 200, description = "Already subscribed.", body = SubscriptionDto),
        (status = 403, description = "Caller is not a reader.", body = ErrorResponse),
        (status = 404, description = "Unknown publisher.", body = ErrorResponse)
    ),
    tag = "Subscriptions"
)]
pub async fn subscribe_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<(StatusCode, Json<SubscriptionDto>)> {
    subscribe(state, user, SubscriptionTargetRef::Publisher(id)).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/subscriptions/publishers/{id}",
    params(("id" = i64, Path, description = "Publisher id")),
    responses(
        (status = 204, description = "Not subscribed any more."),
        (status = 404, description = "Unknown publisher.", body = ErrorResponse)
    ),
    tag = "Subscriptions"
)]
pub async fn unsubscribe_publisher(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    unsubscribe(state, user, SubscriptionTargetRef::Publisher(id)).await
}

#[utoipa::path(
    put,
    path = "/api/v1/subscriptions/journalists/{id}",
    params(("id" = i64, Path, description = "Journalist user id")),
    responses(
        (status = 201, description = "Subscribed.", body = SubscriptionDto),
        (status = 200, description = "Already subscribed.", body = SubscriptionDto),
        (status = 403, description = "Caller is not a reader.", body = ErrorResponse),
        (status = 404, description = "Unknown journalist.", body = ErrorResponse)
    ),
    tag = "Subscriptions"
)]
pub async fn subscribe_journalist(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<(StatusCode, Json<SubscriptionDto>)> {
    subscribe(state, user, SubscriptionTargetRef::Journalist(id)).await
}

#[utoipa::path(
    delete,
    path = "/api/v1/subscriptions/journalists/{id}",
    params(("id" = i64, Path, description = "Journalist user id")),
    responses(
        (status = 204, description = "Not subscribed any more."),
        (status = 404, description = "Unknown journalist.", body = ErrorResponse)
    ),
    tag = "Subscriptions"
)]
pub async fn unsubscribe_journalist(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<i64>,
) -> HttpResult<StatusCode> {
    unsubscribe(state, user, SubscriptionTargetRef::Journalist(id)).await
}
