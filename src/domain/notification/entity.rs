use crate::domain::article::ArticleId;
use crate::domain::notification::value_objects::{DeliveryChannel, JobId, JobStatus};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct NotificationJob {
    pub id: JobId,
    pub article_id: ArticleId,
    pub status: JobStatus,
    pub enqueued_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewNotificationJob {
    pub article_id: ArticleId,
    pub enqueued_at: DateTime<Utc>,
}

/// One send attempt on one channel. `recipient` is the email address for
/// email deliveries and empty for the social post.
#[derive(Debug, Clone)]
pub struct NotificationDelivery {
    pub job_id: JobId,
    pub article_id: ArticleId,
    pub channel: DeliveryChannel,
    pub recipient: Option<String>,
    pub succeeded: bool,
    pub error: Option<String>,
    pub attempted_at: DateTime<Utc>,
}

impl NotificationDelivery {
    pub fn succeeded(
        job: &NotificationJob,
        channel: DeliveryChannel,
        recipient: Option<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            job_id: job.id,
            article_id: job.article_id,
            channel,
            recipient,
            succeeded: true,
            error: None,
            attempted_at: at,
        }
    }

    pub fn failed(
        job: &NotificationJob,
        channel: DeliveryChannel,
        recipient: Option<String>,
        error: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            job_id: job.id,
            article_id: job.article_id,
            channel,
            recipient,
            succeeded: false,
            error: Some(error.into()),
            attempted_at: at,
        }
    }
}
