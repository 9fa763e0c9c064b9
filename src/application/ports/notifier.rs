// src/application/ports/notifier.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Delivers a single plain-text email to a single recipient.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> ApplicationResult<()>;
}

/// Publishes a short status update on the external social platform.
#[async_trait]
pub trait SocialPoster: Send + Sync {
    async fn post(&self, text: &str) -> ApplicationResult<()>;
}
