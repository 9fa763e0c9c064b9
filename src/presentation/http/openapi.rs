// src/presentation/http/openapi.rs
use crate::application::dto::{
    ArticleDto, AuthTokenDto, CapabilityView, NewsletterDto, PublisherDetailDto, PublisherDto,
    SessionView, SubscriptionDto, SubscriptionListDto, UserDto, UserProfileDto,
};
use crate::domain::{article::ArticleStatus, user::Role};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::{
    Components,
    security::{Http, HttpAuthScheme, SecurityScheme},
    server::Server,
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use super::controllers::{articles, auth, journalists, newsletters, publishers, subscriptions};
use super::error::ErrorResponse;

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::token,
        auth::me,
        articles::list_articles,
        articles::list_subscribed,
        articles::list_by_publisher,
        articles::list_by_journalist,
        articles::list_pending,
        articles::list_mine,
        articles::get_article,
        articles::create_article,
        articles::update_article,
        articles::delete_article,
        articles::approve_article,
        articles::reject_article,
        publishers::list_publishers,
        publishers::create_publisher,
        publishers::get_publisher,
        publishers::add_member,
        journalists::list_journalists,
        subscriptions::list_subscriptions,
        subscriptions::subscribe_publisher,
        subscriptions::unsubscribe_publisher,
        subscriptions::subscribe_journalist,
        subscriptions::unsubscribe_journalist,
        newsletters::list_newsletters,
        newsletters::list_subscribed_newsletters,
        newsletters::create_newsletter,
        newsletters::delete_newsletter,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ErrorResponse,
            Role,
            ArticleStatus,
            auth::RegisterRequest,
            auth::LoginRequest,
            auth::LoginResponse,
            articles::CreateArticleRequest,
            articles::UpdateArticleRequest,
            publishers::CreatePublisherRequest,
            newsletters::CreateNewsletterRequest,
            UserDto,
            UserProfileDto,
            AuthTokenDto,
            CapabilityView,
            SessionView,
            ArticleDto,
            PublisherDto,
            PublisherDetailDto,
            SubscriptionDto,
            SubscriptionListDto,
            NewsletterDto
        )
    ),
    tags(
        (name = "Auth", description = "Registration and token issuance"),
        (name = "Users", description = "User directory"),
        (name = "Articles", description = "Articles and the editorial review workflow"),
        (name = "Publishers", description = "Publishers and their members"),
        (name = "Subscriptions", description = "Reader subscriptions"),
        (name = "Newsletters", description = "Newsletters"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    security(("bearerAuth" = [])),
    info(
        title = "Newsdesk API",
        description = "News publishing with editorial approval and subscriber notifications",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        let mut http = Http::new(HttpAuthScheme::Bearer);
        http.bearer_format = Some("Biscuit".into());
        components.add_security_scheme("bearerAuth", SecurityScheme::Http(http));

        let url = env::var("SITE_URL")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        openapi.servers = Some(vec![Server::new(url)]);
    }
}

/// Serves `/openapi.json`, `/docs` and `/redoc`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the document to `OPENAPI_SNAPSHOT_PATH` and returns the path used.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(output_path)
}
