// tests/e2e_auth.rs
mod support;

use axum::http::{Method, StatusCode};
use serde_json::json;
use support::*;

async fn register(app: &TestApp, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    app.request(Method::POST, "/api/v1/auth/register", None, Some(body))
        .await
}

#[tokio::test]
async fn register_login_and_read_profile() {
    let app = TestApp::new();
    let (status, user) = register(
        &app,
        json!({
            "username": "clark",
            "password": PASSWORD,
            "email": "clark@example.com",
            "first_name": "Clark",
            "last_name": "Kent",
            "role": "journalist",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{user}");
    assert_eq!(user["role"], "journalist");
    assert_eq!(user["display_name"], "Clark Kent");
    assert!(user.get("password_hash").is_none());

    let token = app.login("clark").await;
    let (status, me) = app.get("/api/v1/auth/me", Some(&token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["user"]["username"], "clark");
    assert_eq!(me["email"], "clark@example.com");
    let capabilities: Vec<String> = me["capabilities"]
        .as_array()
        .expect("capabilities")
        .iter()
        .map(|c| format!("{}:{}", c["resource"].as_str().unwrap_or(""), c["action"].as_str().unwrap_or("")))
        .collect();
    assert!(capabilities.contains(&"articles:create".to_string()));
    assert!(!capabilities.contains(&"articles:review".to_string()));
}

#[tokio::test]
async fn role_defaults_to_reader() {
    let app = TestApp::new();
    let (status, user) = register(
        &app,
        json!({ "username": "lurker", "password": PASSWORD }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["role"], "reader");
    assert_eq!(user["display_name"], "lurker");
}

#[tokio::test]
async fn registration_rejects_bad_input_and_duplicates() {
    let app = TestApp::new();
    app.user("taken", "reader", None).await;

    let cases = [
        json!({ "username": "taken", "password": PASSWORD }),
        json!({ "username": "fresh", "password": "short" }),
        json!({ "username": "fresh", "password": "1234567890" }),
        json!({ "username": "no spaces", "password": PASSWORD }),
        json!({ "username": "fresh", "password": PASSWORD, "email": "not-an-email" }),
    ];
    let expected = [
        StatusCode::CONFLICT,
        StatusCode::BAD_REQUEST,
        StatusCode::BAD_REQUEST,
        StatusCode::BAD_REQUEST,
        StatusCode::BAD_REQUEST,
    ];
    for (body, want) in cases.into_iter().zip(expected) {
        let (status, response) = register(&app, body.clone()).await;
        assert_eq!(status, want, "{body} -> {response}");
    }
}

#[tokio::test]
async fn wrong_password_is_unauthorized() {
    let app = TestApp::new();
    app.user("clark", "reader", None).await;
    let (status, body) = app
        .request(
            Method::POST,
            "/api/v1/auth/token",
            None,
            Some(json!({ "username": "clark", "password": "kryptonite!" })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");

    let (status, _) = app
        .request(
            Method::POST,
            "/api/v1/auth/token",
            None,
            Some(json!({ "username": "nobody", "password": PASSWORD })),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_routes_need_a_valid_token() {
    let app = TestApp::new();
    for uri in [
        "/api/v1/auth/me",
        "/api/v1/articles/subscribed",
        "/api/v1/articles/pending",
        "/api/v1/subscriptions",
        "/api/v1/newsletters",
        "/api/v1/journalists",
    ] {
        let (status, _) = app.get(uri, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        let (status, _) = app.get(uri, Some("not-a-biscuit")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
    }
}

#[tokio::test]
async fn invalid_token_is_rejected_even_on_public_routes() {
    let app = TestApp::new();
    let (status, _) = app.get("/api/v1/articles", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get("/api/v1/articles/1", Some("garbage")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let app = TestApp::new();
    let (status, body) = app.get("/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));

    let (status, doc) = app.get("/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    let paths = doc["paths"].as_object().expect("paths object");
    for path in [
        "/api/v1/articles",
        "/api/v1/articles/{id}/approve",
        "/api/v1/articles/subscribed",
        "/api/v1/subscriptions/publishers/{id}",
        "/api/v1/newsletters/{id}",
    ] {
        assert!(paths.contains_key(path), "missing {path}");
    }
}
