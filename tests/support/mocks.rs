// tests/support/mocks.rs
use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicI64, Ordering},
};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use once_cell::sync::Lazy;

use newsdesk::application::{
    error::{ApplicationError, ApplicationResult},
    ports::{
        notifier::{EmailMessage, EmailSender, SocialPoster},
        security::PasswordHasher,
        time::Clock,
    },
};

pub static EPOCH: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap());

/// Reversible "hash" so tests skip Argon2's cost.
#[derive(Default)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("plain${password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("plain${password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// Advances one second per reading so creation order is visible in timestamps.
#[derive(Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        *EPOCH + Duration::seconds(tick)
    }
}

#[derive(Default)]
pub struct RecordingEmailSender {
    sent: Mutex<Vec<EmailMessage>>,
    failing: AtomicBool,
}

impl RecordingEmailSender {
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, message: &EmailMessage) -> ApplicationResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApplicationError::delivery("email", "smtp relay unavailable"));
        }
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingSocialPoster {
    posts: Mutex<Vec<String>>,
    failing: AtomicBool,
}

impl RecordingSocialPoster {
    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn posts(&self) -> Vec<String> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SocialPoster for RecordingSocialPoster {
    async fn post(&self, text: &str) -> ApplicationResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApplicationError::delivery("social", "platform returned 503"));
        }
        self.posts.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
