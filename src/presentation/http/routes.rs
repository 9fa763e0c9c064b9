// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, auth, journalists, newsletters, publishers, subscriptions},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{delete, get, post, put},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

/// Per-IP request budget.
#[derive(Debug, Clone, Copy)]
pub struct RateLimit {
    pub per_second: u64,
    pub burst: u32,
}

#[derive(Debug, Clone, Default)]
pub struct RouterSettings {
    /// Browser origins allowed by CORS; `*` allows any.
    pub allowed_origins: Vec<String>,
    pub rate_limit: Option<RateLimit>,
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with(state, RouterSettings::default())
}

pub fn build_router_with(state: HttpState, settings: RouterSettings) -> Router {
    let router = api_routes()
        .merge(openapi::docs_router())
        .route("/health", get(health));

    let router = match settings.rate_limit {
        Some(limit) => match rate_limit_layer(limit.per_second, limit.burst) {
            Some(layer) => router.layer(layer),
            None => {
                tracing::warn!("rate limit values must be positive; limiter disabled");
                router
            }
        },
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&settings.allowed_origins))
        .layer(Extension(state))
}

fn api_routes() -> Router {
    Router::new()
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/token", post(auth::token))
        .route("/api/v1/auth/me", get(auth::me))
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/api/v1/articles/subscribed", get(articles::list_subscribed))
        .route("/api/v1/articles/pending", get(articles::list_pending))
        .route("/api/v1/articles/mine", get(articles::list_mine))
        .route(
            "/api/v1/articles/publisher/{id}",
            get(articles::list_by_publisher),
        )
        .route(
            "/api/v1/articles/journalist/{id}",
            get(articles::list_by_journalist),
        )
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/api/v1/articles/{id}/approve",
            post(articles::approve_article),
        )
        .route("/api/v1/articles/{id}/reject", post(articles::reject_article))
        .route(
            "/api/v1/publishers",
            get(publishers::list_publishers).post(publishers::create_publisher),
        )
        .route("/api/v1/publishers/{id}", get(publishers::get_publisher))
        .route(
            "/api/v1/publishers/{id}/members/{user_id}",
            put(publishers::add_member),
        )
        .route("/api/v1/journalists", get(journalists::list_journalists))
        .route(
            "/api/v1/subscriptions",
            get(subscriptions::list_subscriptions),
        )
        .route(
            "/api/v1/subscriptions/publishers/{id}",
            put(subscriptions::subscribe_publisher).delete(subscriptions::unsubscribe_publisher),
        )
        .route(
            "/api/v1/subscriptions/journalists/{id}",
            put(subscriptions::subscribe_journalist)
                .delete(subscriptions::unsubscribe_journalist),
        )
        .route(
            "/api/v1/newsletters",
            get(newsletters::list_newsletters).post(newsletters::create_newsletter),
        )
        .route(
            "/api/v1/newsletters/subscribed",
            get(newsletters::list_subscribed_newsletters),
        )
        .route(
            "/api/v1/newsletters/{id}",
            delete(newsletters::delete_newsletter),
        )
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if allowed_origins.iter().any(|origin| origin == "*") {
        return base.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(origins))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    security(()),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
