// tests/e2e_notifications.rs
mod support;

use axum::http::StatusCode;
use newsdesk::domain::notification::{DeliveryChannel, JobStatus};
use support::*;

async fn follow_journalist(app: &TestApp, reader: &Session, journalist: &Session) {
    let (status, body) = app
        .put(
            &format!("/api/v1/subscriptions/journalists/{}", journalist.id),
            &reader.token,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
}

async fn follow_publisher(app: &TestApp, reader: &Session, publisher_id: i64) {
    let (status, body) = app
        .put(
            &format!("/api/v1/subscriptions/publishers/{publisher_id}"),
            &reader.token,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
}

#[tokio::test]
async fn approving_notifies_subscribers_and_posts_once() {
    let app = TestApp::new();
    let editor = app.user("editor1", "editor", None).await;
    let journalist = app.user("writer1", "journalist", None).await;
    let reader = app.user("reader1", "reader", Some("r1@example.com")).await;
    follow_journalist(&app, &reader, &journalist).await;

    let article_id = app.submit(&journalist, "X", None).await;
    assert_eq!(app.drain_outbox().await, 0);
    let (status, _) = app.approve(&editor, article_id).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(app.drain_outbox().await, 1);

    let sent = app.email.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "r1@example.com");
    assert_eq!(sent[0].subject, "New Article: X");
    assert!(sent[0].body.contains("Author: WRITER1 Tester"));
    assert!(sent[0].body.contains("Publisher: Independent"));
    assert!(
        sent[0]
            .body
            .contains(&format!("{SITE_URL}/articles/{article_id}/"))
    );

    let posts = app.social.posts();
    assert_eq!(posts.len(), 1);
    assert!(posts[0].starts_with("New Article: X"));

    let deliveries = app.store.deliveries();
    let email = deliveries
        .iter()
        .find(|d| d.channel == DeliveryChannel::Email)
        .expect("email delivery recorded");
    assert!(email.succeeded);
    assert_eq!(email.recipient.as_deref(), Some("r1@example.com"));
    assert!(
        deliveries
            .iter()
            .any(|d| d.channel == DeliveryChannel::Social && d.succeeded)
    );

    let jobs = app.store.jobs();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].status, JobStatus::Completed);
    assert!(jobs[0].completed_at.is_some());

    // Completed jobs are never picked up again.
    assert_eq!(app.drain_outbox().await, 0);
    assert_eq!(app.email.sent().len(), 1);
}

#[tokio::test]
async fn reader_following_journalist_and_publisher_gets_one_email() {
    let app = TestApp::new();
    let editor = app.user("editor1", "editor", None).await;
    let journalist = app.user("writer1", "journalist", None).await;
    let reader = app.user("reader1", "reader", Some("r1@example.com")).await;
    let publisher_id = app.publisher_with(&editor, "Daily Planet", &journalist).await;
    follow_journalist(&app, &reader, &journalist).await;
    follow_publisher(&app, &reader, publisher_id).await;

    let article_id = app.submit(&journalist, "Both ways", Some(publisher_id)).await;
    app.approve(&editor, article_id).await;
    app.drain_outbox().await;

    let sent = app.email.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].body.contains("Publisher: Daily Planet"));
    assert!(app.social.posts()[0].contains("for Daily Planet"));
}

#[tokio::test]
async fn article_without_subscribers_sends_no_email() {
    let app = TestApp::new();
    let editor = app.user("editor1", "editor", None).await;
    let journalist = app.user("writer1", "journalist", None).await;
    app.user("reader1", "reader", Some("r1@example.com")).await;

    let article_id = app.submit(&journalist, "Quiet news", None).await;
    app.approve(&editor, article_id).await;
    assert_eq!(app.drain_outbox().await, 1);

    assert!(app.email.sent().is_empty());
    assert_eq!(app.social.posts().len(), 1);
}

#[tokio::test]
async fn failed_social_post_does_not_block_email_or_approval() {
    let app = TestApp::new();
    app.social.fail_all();
    let editor = app.user("editor1", "editor", None).await;
    let journalist = app.user("writer1", "journalist", None).await;
    let reader = app.user("reader1", "reader", Some("r1@example.com")).await;
    follow_journalist(&app, &reader, &journalist).await;

    let article_id = app.submit(&journalist, "Outage", None).await;
    let (status, body) = app.approve(&editor, article_id).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "approved");
    app.drain_outbox().await;

    assert_eq!(app.email.sent().len(), 1);
    let social = app
        .store
        .deliveries()
        .into_iter()
        .find(|d| d.channel == DeliveryChannel::Social)
        .expect("social attempt recorded");
    assert!(!social.succeeded);
    assert!(social.error.unwrap_or_default().contains("503"));

    let stored = app.store.article(article_id).expect("article stored");
    assert!(stored.is_approved());
    assert_eq!(app.store.jobs()[0].status, JobStatus::Completed);
}

#[tokio::test]
async fn failed_emails_are_recorded_and_not_retried() {
    let app = TestApp::new();
    app.email.fail_all();
    let editor = app.user("editor1", "editor", None).await;
    let journalist = app.user("writer1", "journalist", None).await;
    for (name, address) in [("reader1", "r1@example.com"), ("reader2", "r2@example.com")] {
        let reader = app.user(name, "reader", Some(address)).await;
        follow_journalist(&app, &reader, &journalist).await;
    }

    let article_id = app.submit(&journalist, "Bounce", None).await;
    app.approve(&editor, article_id).await;
    app.drain_outbox().await;
    app.drain_outbox().await;

    let failed: Vec<_> = app
        .store
        .deliveries()
        .into_iter()
        .filter(|d| d.channel == DeliveryChannel::Email)
        .collect();
    assert_eq!(failed.len(), 2);
    assert!(failed.iter().all(|d| !d.succeeded && d.error.is_some()));
    assert_eq!(app.social.posts().len(), 1);
}

#[tokio::test]
async fn readers_without_email_are_skipped() {
    let app = TestApp::new();
    let editor = app.user("editor1", "editor", None).await;
    let journalist = app.user("writer1", "journalist", None).await;
    let silent = app.user("reader1", "reader", None).await;
    let loud = app.user("reader2", "reader", Some("r2@example.com")).await;
    follow_journalist(&app, &silent, &journalist).await;
    follow_journalist(&app, &loud, &journalist).await;

    let article_id = app.submit(&journalist, "Mixed audience", None).await;
    app.approve(&editor, article_id).await;
    app.drain_outbox().await;

    let sent = app.email.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "r2@example.com");
}

#[tokio::test]
async fn unconfigured_channels_still_complete_the_job() {
    let app = TestApp::without_channels();
    let editor = app.user("editor1", "editor", None).await;
    let journalist = app.user("writer1", "journalist", None).await;
    let reader = app.user("reader1", "reader", Some("r1@example.com")).await;
    follow_journalist(&app, &reader, &journalist).await;

    let article_id = app.submit(&journalist, "Offline", None).await;
    app.approve(&editor, article_id).await;
    assert_eq!(app.drain_outbox().await, 1);

    assert!(app.store.deliveries().is_empty());
    assert_eq!(app.store.jobs()[0].status, JobStatus::Completed);
}

#[tokio::test]
async fn unsubscribed_reader_is_not_notified() {
    let app = TestApp::new();
    let editor = app.user("editor1", "editor", None).await;
    let journalist = app.user("writer1", "journalist", None).await;
    let reader = app.user("reader1", "reader", Some("r1@example.com")).await;
    follow_journalist(&app, &reader, &journalist).await;
    let (status, _) = app
        .delete(
            &format!("/api/v1/subscriptions/journalists/{}", journalist.id),
            &reader.token,
        )
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let article_id = app.submit(&journalist, "Gone quiet", None).await;
    app.approve(&editor, article_id).await;
    app.drain_outbox().await;

    assert!(app.email.sent().is_empty());
}

#[tokio::test]
async fn failed_completion_does_not_strand_the_rest_of_the_batch() {
    let app = TestApp::new();
    let editor = app.user("editor1", "editor", None).await;
    let journalist = app.user("writer1", "journalist", None).await;
    let reader = app.user("reader1", "reader", Some("r1@example.com")).await;
    follow_journalist(&app, &reader, &journalist).await;

    let first = app.submit(&journalist, "First", None).await;
    let second = app.submit(&journalist, "Second", None).await;
    app.approve(&editor, first).await;
    app.approve(&editor, second).await;

    app.store.fail_completions(1);
    assert_eq!(app.drain_outbox().await, 2);
    assert_eq!(app.email.sent().len(), 2);
    assert_eq!(app.social.posts().len(), 2);

    let statuses: Vec<JobStatus> = app.store.jobs().iter().map(|j| j.status).collect();
    assert_eq!(statuses, vec![JobStatus::Running, JobStatus::Completed]);
    assert_eq!(app.drain_outbox().await, 0);
}

#[tokio::test]
async fn recovered_job_completes_without_resending() {
    let app = TestApp::new();
    let editor = app.user("editor1", "editor", None).await;
    let journalist = app.user("writer1", "journalist", None).await;
    let reader = app.user("reader1", "reader", Some("r1@example.com")).await;
    follow_journalist(&app, &reader, &journalist).await;

    let article_id = app.submit(&journalist, "Stranded", None).await;
    app.approve(&editor, article_id).await;
    app.store.fail_completions(1);
    assert_eq!(app.drain_outbox().await, 1);

    let dispatcher = app.services.dispatcher();
    assert_eq!(dispatcher.recover().await.expect("recover"), 1);
    assert_eq!(app.drain_outbox().await, 1);

    assert_eq!(app.email.sent().len(), 1);
    assert_eq!(app.social.posts().len(), 1);
    assert_eq!(app.store.deliveries().len(), 2);
    assert!(
        app.store
            .jobs()
            .iter()
            .all(|j| j.status == JobStatus::Completed)
    );
    assert_eq!(dispatcher.recover().await.expect("recover"), 0);
}
