// tests/support/helpers.rs
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use newsdesk::{
    application::{
        ports::notifier::{EmailSender, SocialPoster},
        services::{Adapters, ApplicationServices, Repositories},
    },
    infrastructure::security::token::BiscuitTokenManager,
    presentation::http::{routes::build_router, state::HttpState},
};

use super::{
    memory::InMemoryStore,
    mocks::{PlainPasswordHasher, RecordingEmailSender, RecordingSocialPoster, SteppingClock},
};

pub const TEST_KEY: &str = "c2a4b8f1d3e5f7091b2d4f6a8c0e1f3a5b7d9e0f2a4c6e8b1d3f5a7c9e0b2d4f";
pub const PASSWORD: &str = "correct horse battery";
pub const SITE_URL: &str = "https://news.example.test";

pub struct TestApp {
    pub router: Router,
    pub services: Arc<ApplicationServices>,
    pub store: Arc<InMemoryStore>,
    pub email: Arc<RecordingEmailSender>,
    pub social: Arc<RecordingSocialPoster>,
}

pub struct Session {
    pub id: i64,
    pub token: String,
}

impl TestApp {
    pub fn new() -> Self {
        Self::build(true)
    }

    /// Neither SMTP nor the social platform configured.
    pub fn without_channels() -> Self {
        Self::build(false)
    }

    fn build(channels: bool) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let email = Arc::new(RecordingEmailSender::default());
        let social = Arc::new(RecordingSocialPoster::default());

        let repos = Repositories {
            users: store.clone(),
            article_writes: store.clone(),
            article_reads: store.clone(),
            publishers: store.clone(),
            subscriptions: store.clone(),
            newsletters: store.clone(),
            outbox: store.clone(),
        };
        let token_manager = BiscuitTokenManager::new(TEST_KEY, Duration::from_secs(3600))
            .expect("valid test key");
        let adapters = Adapters {
            password_hasher: Arc::new(PlainPasswordHasher),
            token_manager: Arc::new(token_manager),
            clock: Arc::new(SteppingClock::default()),
            email_sender: channels.then(|| email.clone() as Arc<dyn EmailSender>),
            social_poster: channels.then(|| social.clone() as Arc<dyn SocialPoster>),
            site_url: SITE_URL.to_string(),
        };

        let services = Arc::new(ApplicationServices::new(repos, adapters));
        let router = build_router(HttpState::new(Arc::clone(&services)));

        Self {
            router,
            services,
            store,
            email,
            social,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(token), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(token), None).await
    }

    pub async fn delete(&self, uri: &str, token: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, Some(token), None).await
    }

    /// Registers `username` with `role` and logs in.
    pub async fn user(&self, username: &str, role: &str, email: Option<&str>) -> Session {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/v1/auth/register",
                None,
                Some(json!({
                    "username": username,
                    "password": PASSWORD,
                    "email": email,
                    "first_name": username.to_uppercase(),
                    "last_name": "Tester",
                    "role": role,
                })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register {username}: {body}");
        let id = body["id"].as_i64().expect("user id");
        let token = self.login(username).await;
        Session { id, token }
    }

    pub async fn login(&self, username: &str) -> String {
        let (status, body) = self
            .request(
                Method::POST,
                "/api/v1/auth/token",
                None,
                Some(json!({ "username": username, "password": PASSWORD })),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "login {username}: {body}");
        body["token"]["token"]
            .as_str()
            .expect("token string")
            .to_string()
    }

    /// Creates a publisher as `editor` and attaches `journalist` to it.
    pub async fn publisher_with(&self, editor: &Session, name: &str, journalist: &Session) -> i64 {
        let (status, body) = self
            .post(
                "/api/v1/publishers",
                &editor.token,
                json!({ "name": name, "description": "test outlet" }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create publisher: {body}");
        let publisher_id = body["id"].as_i64().expect("publisher id");
        let (status, body) = self
            .put(
                &format!("/api/v1/publishers/{publisher_id}/members/{}", journalist.id),
                &editor.token,
            )
            .await;
        assert_eq!(status, StatusCode::OK, "add member: {body}");
        publisher_id
    }

    pub async fn submit(
        &self,
        journalist: &Session,
        title: &str,
        publisher_id: Option<i64>,
    ) -> i64 {
        let (status, body) = self
            .post(
                "/api/v1/articles",
                &journalist.token,
                json!({
                    "title": title,
                    "body": format!("Body of {title}"),
                    "publisher_id": publisher_id,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create article: {body}");
        body["id"].as_i64().expect("article id")
    }

    pub async fn approve(&self, editor: &Session, article_id: i64) -> (StatusCode, Value) {
        self.request(
            Method::POST,
            &format!("/api/v1/articles/{article_id}/approve"),
            Some(&editor.token),
            None,
        )
        .await
    }

    pub async fn reject(&self, editor: &Session, article_id: i64) -> (StatusCode, Value) {
        self.request(
            Method::POST,
            &format!("/api/v1/articles/{article_id}/reject"),
            Some(&editor.token),
            None,
        )
        .await
    }

    /// Runs the outbox dispatcher to completion.
    pub async fn drain_outbox(&self) -> usize {
        self.services
            .dispatcher()
            .run_pending()
            .await
            .expect("dispatcher run")
    }
}

pub fn titles(page: &Value) -> Vec<String> {
    page["items"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item["title"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
